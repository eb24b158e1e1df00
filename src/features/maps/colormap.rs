//! Linear colour maps for map markers and legends.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::indicators::stats::Extent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

/// Resolve a CSS colour keyword used by the indicator table
pub fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "red" => Rgb(255, 0, 0),
        "darkred" => Rgb(139, 0, 0),
        "orange" => Rgb(255, 165, 0),
        "yellow" => Rgb(255, 255, 0),
        "green" => Rgb(0, 128, 0),
        "lightgreen" => Rgb(144, 238, 144),
        "blue" => Rgb(0, 0, 255),
        "lightblue" => Rgb(173, 216, 230),
        "darkblue" => Rgb(0, 0, 139),
        "navy" => Rgb(0, 0, 128),
        "lightcyan" => Rgb(224, 255, 255),
        "black" => Rgb(0, 0, 0),
        "white" => Rgb(255, 255, 255),
        _ => return None,
    };
    Some(rgb)
}

/// Evenly spaced colour stops interpolated in RGB between `vmin` and `vmax`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColormap {
    stops: Vec<Rgb>,
    extent: Extent,
}

impl LinearColormap {
    /// Unknown colour names are skipped; fewer than one usable stop falls back to grey
    pub fn new(colors: &[&str], extent: Extent) -> Self {
        let mut stops: Vec<Rgb> = colors.iter().filter_map(|c| named_color(c)).collect();
        if stops.is_empty() {
            tracing::warn!("No usable colour stops in {:?}, falling back to grey", colors);
            stops.push(Rgb(128, 128, 128));
        }
        Self { stops, extent }
    }

    /// Colour at a position in `[0, 1]`
    pub fn at_fraction(&self, t: f64) -> Rgb {
        if self.stops.len() == 1 {
            return self.stops[0];
        }
        let t = t.clamp(0.0, 1.0);
        let segments = (self.stops.len() - 1) as f64;
        let scaled = t * segments;
        let index = (scaled.floor() as usize).min(self.stops.len() - 2);
        self.stops[index].lerp(self.stops[index + 1], scaled - index as f64)
    }

    /// Colour of a data value
    pub fn color(&self, value: f64) -> Rgb {
        self.at_fraction(self.extent.fraction(value))
    }

    pub fn legend(&self, caption: String) -> Legend {
        Legend {
            caption,
            vmin: self.extent.min,
            vmax: self.extent.max,
            colors: self.stops.iter().map(|c| c.to_hex()).collect(),
        }
    }
}

/// Colour legend drawn next to the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Legend {
    pub caption: String,
    pub vmin: f64,
    pub vmax: f64,
    /// Hex colour stops, low to high
    pub colors: Vec<String>,
}
