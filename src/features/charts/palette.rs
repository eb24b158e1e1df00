//! Continuous colour scales.
//!
//! Plotly.js only ships a subset of the ColorBrewer scales, so every scale
//! used by the dashboard is spelled out here and sent as explicit stops.

use serde_json::{json, Value};

const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];
const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];
const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];
const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];
const RD_YL_GN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
    "#66bd63", "#1a9850", "#006837",
];
const RD_BU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de",
    "#4393c3", "#2166ac", "#053061",
];

pub fn scale_colors(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "Reds" => Some(REDS),
        "Oranges" => Some(ORANGES),
        "Blues" => Some(BLUES),
        "Greens" => Some(GREENS),
        "RdYlGn" => Some(RD_YL_GN),
        "RdBu" => Some(RD_BU),
        _ => None,
    }
}

/// Plotly `colorscale` value: `[[0.0, c0], ..., [1.0, cn]]`, or the bare
/// name for scales not listed here
pub fn plotly_colorscale(name: &str) -> Value {
    let Some(colors) = scale_colors(name) else {
        return Value::String(name.to_string());
    };
    let last = (colors.len() - 1) as f64;
    Value::Array(
        colors
            .iter()
            .enumerate()
            .map(|(i, color)| json!([i as f64 / last, color]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::indicators::Indicator;

    #[test]
    fn test_every_indicator_scale_is_known() {
        for indicator in Indicator::ALL {
            assert!(scale_colors(indicator.spec().color_scale).is_some());
        }
        assert!(scale_colors("RdBu").is_some());
    }

    #[test]
    fn test_colorscale_spans_unit_interval() {
        let scale = plotly_colorscale("Oranges");
        let stops = scale.as_array().unwrap();

        assert_eq!(stops.len(), 9);
        assert_eq!(stops[0][0], 0.0);
        assert_eq!(stops[8][0], 1.0);
        assert_eq!(stops[8][1], "#7f2704");
    }

    #[test]
    fn test_unknown_scale_passes_through() {
        assert_eq!(plotly_colorscale("Viridis"), json!("Viridis"));
    }
}
