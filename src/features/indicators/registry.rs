//! Indicator lookup table.
//!
//! Every per-indicator choice the dashboard makes (column, unit, colours,
//! titles, marker sizing) lives in one descriptor here, so map, chart and
//! page builders stay generic over the selected indicator.

use crate::features::indicators::models::{Indicator, IndicatorFamily, TrendMetric};
use crate::shared::format::with_unit;

/// Circle marker sizing for one indicator family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub base_radius: f64,
    pub radius_span: f64,
    pub fill_opacity: f64,
}

impl IndicatorFamily {
    pub fn marker_style(self) -> MarkerStyle {
        match self {
            IndicatorFamily::Poverty => MarkerStyle {
                base_radius: 10.0,
                radius_span: 20.0,
                fill_opacity: 0.7,
            },
            IndicatorFamily::Greenhouse | IndicatorFamily::Employment => MarkerStyle {
                base_radius: 8.0,
                radius_span: 15.0,
                fill_opacity: 0.8,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSpec {
    pub indicator: Indicator,
    pub family: IndicatorFamily,
    /// Short name used in tooltips, legends and metric labels
    pub label: &'static str,
    /// Long name shown in the sidebar
    pub menu_label: &'static str,
    pub unit: &'static str,
    /// Precision of the mean/max/min metric cards
    pub decimals: usize,
    /// Colour stops of the map legend, low to high
    pub map_colors: &'static [&'static str],
    /// Continuous colour scale of the ranking bar chart
    pub color_scale: &'static str,
    pub map_title: &'static str,
    pub chart_title: &'static str,
}

impl IndicatorSpec {
    pub fn caption(&self) -> String {
        if self.unit.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }

    /// Value as shown in tooltips: raw value followed by the unit
    pub fn display(&self, value: f64) -> String {
        with_unit(&value.to_string(), self.unit)
    }
}

// Ordered like `Indicator` so the enum discriminant indexes the table.
static INDICATORS: [IndicatorSpec; 7] = [
    IndicatorSpec {
        indicator: Indicator::Pou,
        family: IndicatorFamily::Poverty,
        label: "PoU",
        menu_label: "PoU (Prevalence of Undernourishment)",
        unit: "%",
        decimals: 2,
        map_colors: &["green", "yellow", "orange", "red"],
        color_scale: "Reds",
        map_title: "Peta PoU (Prevalence of Undernourishment)",
        chart_title: "PoU per Provinsi (%)",
    },
    IndicatorSpec {
        indicator: Indicator::FiesSevere,
        family: IndicatorFamily::Poverty,
        label: "FIES Severe",
        menu_label: "FIES Severe (Food Insecurity)",
        unit: "%",
        decimals: 2,
        map_colors: &["lightgreen", "yellow", "orange", "red"],
        color_scale: "Reds",
        map_title: "Peta FIES Severe (Food Insecurity)",
        chart_title: "FIES Severe per Provinsi (%)",
    },
    IndicatorSpec {
        indicator: Indicator::Co,
        family: IndicatorFamily::Greenhouse,
        label: "CO",
        menu_label: "CO (Carbon Monoxide)",
        unit: "mg/m³",
        decimals: 3,
        map_colors: &["lightblue", "yellow", "orange", "red"],
        color_scale: "Oranges",
        map_title: "Peta Konsentrasi CO",
        chart_title: "CO per Provinsi (mg/m³)",
    },
    IndicatorSpec {
        indicator: Indicator::No2,
        family: IndicatorFamily::Greenhouse,
        label: "NO2",
        menu_label: "NO2 (Nitrogen Dioxide)",
        unit: "µg/m³",
        decimals: 3,
        map_colors: &["lightgreen", "yellow", "orange", "red"],
        color_scale: "Reds",
        map_title: "Peta Konsentrasi NO2",
        chart_title: "NO2 per Provinsi (µg/m³)",
    },
    IndicatorSpec {
        indicator: Indicator::Ch4,
        family: IndicatorFamily::Greenhouse,
        label: "CH4",
        menu_label: "CH4 (Methane)",
        unit: "ppm",
        decimals: 3,
        map_colors: &["lightcyan", "yellow", "orange", "darkred"],
        color_scale: "Blues",
        map_title: "Peta Konsentrasi CH4",
        chart_title: "CH4 per Provinsi (ppm)",
    },
    IndicatorSpec {
        indicator: Indicator::Ntp,
        family: IndicatorFamily::Employment,
        label: "NTP",
        menu_label: "NTP (Nilai Tukar Petani)",
        unit: "",
        decimals: 2,
        map_colors: &["red", "orange", "yellow", "lightgreen", "green"],
        color_scale: "RdYlGn",
        map_title: "Peta NTP (Nilai Tukar Petani)",
        chart_title: "NTP per Provinsi",
    },
    IndicatorSpec {
        indicator: Indicator::AgriWorkers,
        family: IndicatorFamily::Employment,
        label: "Pekerja Pertanian",
        menu_label: "Persentase Pekerja Pertanian",
        unit: "%",
        decimals: 2,
        map_colors: &["lightblue", "blue", "darkblue", "navy"],
        color_scale: "Greens",
        map_title: "Peta Persentase Pekerja Pertanian",
        chart_title: "Pekerja Pertanian per Provinsi (%)",
    },
];

pub fn indicator_spec(indicator: Indicator) -> &'static IndicatorSpec {
    &INDICATORS[indicator as usize]
}

impl Indicator {
    pub fn spec(self) -> &'static IndicatorSpec {
        indicator_spec(self)
    }
}

/// Horizontal reference line drawn across a trend chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSpec {
    pub metric: TrendMetric,
    pub label: &'static str,
    pub menu_label: &'static str,
    pub unit: &'static str,
    /// Precision of the latest-value cards
    pub decimals: usize,
    pub chart_title: &'static str,
    pub axis_label: &'static str,
    pub reference_line: Option<ReferenceLine>,
}

static TREND_METRICS: [TrendSpec; 5] = [
    TrendSpec {
        metric: TrendMetric::Co,
        label: "CO",
        menu_label: "CO Level",
        unit: "mg/m³",
        decimals: 3,
        chart_title: "Trend Konsentrasi CO (mg/m³)",
        axis_label: "CO (mg/m³)",
        reference_line: None,
    },
    TrendSpec {
        metric: TrendMetric::No2,
        label: "NO2",
        menu_label: "NO2 Level",
        unit: "µg/m³",
        decimals: 1,
        chart_title: "Trend Konsentrasi NO2 (µg/m³)",
        axis_label: "NO2 (µg/m³)",
        reference_line: None,
    },
    TrendSpec {
        metric: TrendMetric::Ch4,
        label: "CH4",
        menu_label: "CH4 Level",
        unit: "ppm",
        decimals: 3,
        chart_title: "Trend Konsentrasi CH4 (ppm)",
        axis_label: "CH4 (ppm)",
        reference_line: None,
    },
    TrendSpec {
        metric: TrendMetric::Pou,
        label: "PoU",
        menu_label: "PoU Trend",
        unit: "%",
        decimals: 2,
        chart_title: "Trend PoU (%)",
        axis_label: "PoU (%)",
        reference_line: None,
    },
    TrendSpec {
        metric: TrendMetric::Ntp,
        label: "NTP",
        menu_label: "NTP Trend",
        unit: "",
        decimals: 2,
        chart_title: "Trend NTP",
        axis_label: "NTP",
        reference_line: Some(ReferenceLine {
            y: 100.0,
            label: "NTP = 100 (Break Even)",
        }),
    },
];

pub fn trend_spec(metric: TrendMetric) -> &'static TrendSpec {
    &TREND_METRICS[metric as usize]
}

impl TrendMetric {
    pub fn spec(self) -> &'static TrendSpec {
        trend_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_indexed_by_discriminant() {
        for indicator in Indicator::ALL {
            assert_eq!(indicator.spec().indicator, indicator);
        }
        for metric in TrendMetric::ALL {
            assert_eq!(metric.spec().metric, metric);
        }
    }

    #[test]
    fn test_every_indicator_has_at_least_two_colour_stops() {
        for indicator in Indicator::ALL {
            assert!(indicator.spec().map_colors.len() >= 2);
        }
    }

    #[test]
    fn test_caption() {
        assert_eq!(Indicator::Ch4.spec().caption(), "CH4 (ppm)");
        assert_eq!(Indicator::Ntp.spec().caption(), "NTP");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(Indicator::Pou.spec().display(12.34), "12.34%");
        assert_eq!(Indicator::Co.spec().display(1.5), "1.5 mg/m³");
        assert_eq!(Indicator::Ntp.spec().display(101.25), "101.25");
    }

    #[test]
    fn test_only_ntp_trend_has_reference_line() {
        for metric in TrendMetric::ALL {
            assert_eq!(
                metric.spec().reference_line.is_some(),
                metric == TrendMetric::Ntp
            );
        }
    }

    #[test]
    fn test_marker_styles() {
        assert_eq!(IndicatorFamily::Poverty.marker_style().base_radius, 10.0);
        assert_eq!(IndicatorFamily::Greenhouse.marker_style().radius_span, 15.0);
        assert_eq!(IndicatorFamily::Employment.marker_style().fill_opacity, 0.8);
    }
}
