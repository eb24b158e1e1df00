use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::indicators::Indicator;
use crate::features::maps::colormap::Legend;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One province marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CircleMarker {
    pub province: String,
    pub location: LatLng,
    /// Indicator value driving size and colour
    pub value: f64,
    pub radius: f64,
    /// Outline colour
    pub color: String,
    /// Outline width
    pub weight: u32,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub tooltip: String,
    pub popup_html: String,
    pub popup_max_width: u32,
}

/// Everything the browser needs to draw an indicator map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapSpec {
    pub indicator: Indicator,
    pub title: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: String,
    pub markers: Vec<CircleMarker>,
    pub legend: Legend,
}
