use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::features::charts::ChartSpec;
use crate::features::indicators::{EmploymentIndicator, GasType, PovertyIndicator, TrendMetric};
use crate::features::maps::MapSpec;

// ============================================================================
// Menu selection
// ============================================================================

/// Top-level monitoring category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringCategory {
    #[default]
    Overview,
    Poverty,
    Greenhouse,
    Employment,
    Trend,
}

impl MonitoringCategory {
    pub const ALL: [MonitoringCategory; 5] = [
        MonitoringCategory::Overview,
        MonitoringCategory::Poverty,
        MonitoringCategory::Greenhouse,
        MonitoringCategory::Employment,
        MonitoringCategory::Trend,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MonitoringCategory::Overview => "overview",
            MonitoringCategory::Poverty => "poverty",
            MonitoringCategory::Greenhouse => "greenhouse",
            MonitoringCategory::Employment => "employment",
            MonitoringCategory::Trend => "trend",
        }
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            MonitoringCategory::Overview => "📊 Overview",
            MonitoringCategory::Poverty => "🍽️ Indikator Kemiskinan",
            MonitoringCategory::Greenhouse => "🏭 Gas Rumah Kaca",
            MonitoringCategory::Employment => "👨‍🌾 Ketenagakerjaan",
            MonitoringCategory::Trend => "📈 Analisis Trend",
        }
    }

    /// Page heading
    pub fn heading(self) -> &'static str {
        match self {
            MonitoringCategory::Overview => "📊 Ringkasan Indikator Sumatera",
            MonitoringCategory::Poverty => "🍽️ Monitoring Indikator Kemiskinan",
            MonitoringCategory::Greenhouse => "🏭 Monitoring Gas Rumah Kaca",
            MonitoringCategory::Employment => "👨‍🌾 Monitoring Ketenagakerjaan",
            MonitoringCategory::Trend => "📈 Analisis Trend Temporal",
        }
    }
}

/// Sidebar state as sent by the browser; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuSelection {
    pub category: Option<MonitoringCategory>,
    pub poverty: Option<PovertyIndicator>,
    pub gas: Option<GasType>,
    pub employment: Option<EmploymentIndicator>,
    pub trend: Option<TrendMetric>,
    /// Comma-separated province names for the trend view. Omitted means the
    /// default selection; present but empty means none selected.
    #[param(example = "Aceh,Sumatera Utara,Sumatera Barat")]
    pub provinces: Option<String>,
}

/// Selection after defaults are applied and province names are checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedSelection {
    pub category: MonitoringCategory,
    pub poverty: PovertyIndicator,
    pub gas: GasType,
    pub employment: EmploymentIndicator,
    pub trend: TrendMetric,
    pub provinces: Vec<String>,
}

// ============================================================================
// Page sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Metric {
    pub label: String,
    pub value: String,
    /// Small caption under the value
    pub help: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Metrics shown together under one heading, e.g. one province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricGroup {
    pub title: String,
    pub items: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn of(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            TrendDirection::Up
        } else if change_percent < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Up => "📈 Naik",
            TrendDirection::Down => "📉 Turun",
            TrendDirection::Flat => "➡️ Stabil",
        }
    }
}

/// Start-to-end change of the trend metric for one province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendChange {
    pub province: String,
    /// `None` when the first value of the window is zero
    pub change_percent: Option<f64>,
    pub direction: TrendDirection,
    /// Change formatted to one decimal, or "n/a"
    pub label: String,
    pub direction_label: String,
}

/// One block of the composed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Metrics {
        title: Option<String>,
        items: Vec<Metric>,
    },
    MetricGroups {
        title: String,
        groups: Vec<MetricGroup>,
    },
    Map {
        title: String,
        map: MapSpec,
    },
    Chart {
        title: String,
        #[schema(value_type = Object)]
        chart: ChartSpec,
        /// Plotly figure (`data` + `layout`)
        #[schema(value_type = Object)]
        figure: Value,
    },
    Table {
        title: String,
        table: DataTable,
    },
    Changes {
        title: String,
        items: Vec<TrendChange>,
    },
    Info {
        text: String,
    },
    Warning {
        text: String,
    },
}

/// Fully composed dashboard page for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardPage {
    pub category: MonitoringCategory,
    pub heading: String,
    pub selection: ResolvedSelection,
    pub sections: Vec<Section>,
}

// ============================================================================
// Menu options
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuOption {
    pub key: String,
    pub label: String,
}

impl MenuOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Everything the sidebar offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuOptions {
    pub categories: Vec<MenuOption>,
    pub poverty: Vec<MenuOption>,
    pub gas: Vec<MenuOption>,
    pub employment: Vec<MenuOption>,
    pub trend: Vec<MenuOption>,
    pub provinces: Vec<String>,
    pub default_provinces: Vec<String>,
}
