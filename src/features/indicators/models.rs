use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::dataset::models::{ProvinceRecord, TrendRecord};

/// Map/chart indicator over the province table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Prevalence of Undernourishment
    Pou,
    /// FIES severe food insecurity
    FiesSevere,
    /// Carbon monoxide
    Co,
    /// Nitrogen dioxide
    No2,
    /// Methane
    Ch4,
    /// Nilai Tukar Petani
    Ntp,
    /// Agricultural workforce share
    AgriWorkers,
}

impl Indicator {
    pub const ALL: [Indicator; 7] = [
        Indicator::Pou,
        Indicator::FiesSevere,
        Indicator::Co,
        Indicator::No2,
        Indicator::Ch4,
        Indicator::Ntp,
        Indicator::AgriWorkers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Indicator::Pou => "pou",
            Indicator::FiesSevere => "fies_severe",
            Indicator::Co => "co",
            Indicator::No2 => "no2",
            Indicator::Ch4 => "ch4",
            Indicator::Ntp => "ntp",
            Indicator::AgriWorkers => "agri_workers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.key() == key)
    }

    /// The column this indicator reads from a province row
    pub fn value(self, record: &ProvinceRecord) -> f64 {
        match self {
            Indicator::Pou => record.pou_percentage,
            Indicator::FiesSevere => record.fies_severe,
            Indicator::Co => record.co_level,
            Indicator::No2 => record.no2_level,
            Indicator::Ch4 => record.ch4_level,
            Indicator::Ntp => record.ntp,
            Indicator::AgriWorkers => record.agri_workers_percentage,
        }
    }
}

/// Which dashboard area an indicator belongs to; decides popup layout and marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorFamily {
    Poverty,
    Greenhouse,
    Employment,
}

/// Poverty sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PovertyIndicator {
    #[default]
    Pou,
    FiesSevere,
}

/// Greenhouse-gas sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GasType {
    #[default]
    Co,
    No2,
    Ch4,
}

/// Employment sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentIndicator {
    #[default]
    Ntp,
    AgriWorkers,
}

impl PovertyIndicator {
    pub const ALL: [PovertyIndicator; 2] = [PovertyIndicator::Pou, PovertyIndicator::FiesSevere];
}

impl GasType {
    pub const ALL: [GasType; 3] = [GasType::Co, GasType::No2, GasType::Ch4];
}

impl EmploymentIndicator {
    pub const ALL: [EmploymentIndicator; 2] =
        [EmploymentIndicator::Ntp, EmploymentIndicator::AgriWorkers];
}

impl From<PovertyIndicator> for Indicator {
    fn from(value: PovertyIndicator) -> Self {
        match value {
            PovertyIndicator::Pou => Indicator::Pou,
            PovertyIndicator::FiesSevere => Indicator::FiesSevere,
        }
    }
}

impl From<GasType> for Indicator {
    fn from(value: GasType) -> Self {
        match value {
            GasType::Co => Indicator::Co,
            GasType::No2 => Indicator::No2,
            GasType::Ch4 => Indicator::Ch4,
        }
    }
}

impl From<EmploymentIndicator> for Indicator {
    fn from(value: EmploymentIndicator) -> Self {
        match value {
            EmploymentIndicator::Ntp => Indicator::Ntp,
            EmploymentIndicator::AgriWorkers => Indicator::AgriWorkers,
        }
    }
}

/// Metric plotted by the trend view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    #[default]
    Co,
    No2,
    Ch4,
    Pou,
    Ntp,
}

impl TrendMetric {
    pub const ALL: [TrendMetric; 5] = [
        TrendMetric::Co,
        TrendMetric::No2,
        TrendMetric::Ch4,
        TrendMetric::Pou,
        TrendMetric::Ntp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TrendMetric::Co => "co",
            TrendMetric::No2 => "no2",
            TrendMetric::Ch4 => "ch4",
            TrendMetric::Pou => "pou",
            TrendMetric::Ntp => "ntp",
        }
    }

    pub fn value(self, record: &TrendRecord) -> f64 {
        match self {
            TrendMetric::Co => record.co_trend,
            TrendMetric::No2 => record.no2_trend,
            TrendMetric::Ch4 => record.ch4_trend,
            TrendMetric::Pou => record.pou_trend,
            TrendMetric::Ntp => record.ntp_trend,
        }
    }
}
