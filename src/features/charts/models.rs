use serde::{Deserialize, Serialize};

/// Typed chart description, turned into a Plotly figure by [`super::plotly::figure`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChart),
    MultiBar(MultiBarChart),
    Scatter(ScatterChart),
    Line(LineChart),
    Heatmap(HeatmapChart),
}

/// Horizontal bar chart coloured by value on a continuous scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub value_title: String,
    pub category_title: String,
    pub color_scale: String,
    pub height: Option<u32>,
}

/// Named series sharing a category axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Stack,
    Group,
}

impl BarMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BarMode::Stack => "stack",
            BarMode::Group => "group",
        }
    }
}

/// Vertical bars, one trace per series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub mode: BarMode,
    pub series: Vec<Series>,
    pub tick_angle: i32,
    pub height: Option<u32>,
}

/// Labelled point cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLine {
    pub y: f64,
    pub label: String,
    pub color: String,
    pub dash: String,
}

/// Date-indexed lines, one per series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub series: Vec<Series>,
    pub reference_line: Option<HorizontalLine>,
    pub height: Option<u32>,
}

/// Square matrix heatmap, first row drawn at the top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    pub title: String,
    pub labels: Vec<String>,
    pub z: Vec<Vec<f64>>,
    pub color_scale: String,
    pub zmin: f64,
    pub zmax: f64,
    pub height: Option<u32>,
}
