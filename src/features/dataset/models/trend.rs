use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One (date, province) sample of the daily trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendRecord {
    pub date: NaiveDate,
    pub province: String,
    pub co_trend: f64,
    pub no2_trend: f64,
    pub ch4_trend: f64,
    pub pou_trend: f64,
    pub ntp_trend: f64,
}

/// Daily series for a set of provinces, ordered date-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSeries {
    pub days: u32,
    pub provinces: Vec<String>,
    pub records: Vec<TrendRecord>,
}

impl TimeSeries {
    /// Rows of one province, oldest first
    pub fn for_province<'a>(&'a self, province: &'a str) -> impl Iterator<Item = &'a TrendRecord> {
        self.records.iter().filter(move |r| r.province == province)
    }

    /// Most recent row of one province
    pub fn latest(&self, province: &str) -> Option<&TrendRecord> {
        self.records
            .iter()
            .filter(|r| r.province == province)
            .max_by_key(|r| r.date)
    }

    /// Keep only the rows of `provinces`, preserving row order
    pub fn restrict_to(&self, provinces: &[String]) -> TimeSeries {
        TimeSeries {
            days: self.days,
            provinces: self
                .provinces
                .iter()
                .filter(|p| provinces.contains(p))
                .cloned()
                .collect(),
            records: self
                .records
                .iter()
                .filter(|r| provinces.contains(&r.province))
                .cloned()
                .collect(),
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }
}
