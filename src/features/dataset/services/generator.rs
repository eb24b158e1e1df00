//! Synthetic sample data for the dashboard.
//!
//! Every value is an independent uniform draw inside a domain-plausible
//! range, rounded to the precision the dashboard displays. There is no
//! cross-field consistency and no day-to-day continuity in the trend series.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::features::dataset::catalog::SUMATERA_PROVINCES;
use crate::features::dataset::models::{ProvinceRecord, TrendRecord};
use crate::shared::format::round_to;

/// Inclusive sampling range with display precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64, decimals: u32) -> Self {
        Self { min, max, decimals }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round_to(rng.gen_range(self.min..=self.max), self.decimals)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const POU_RANGE: ValueRange = ValueRange::new(3.5, 18.5, 2);
pub const FIES_MILD_RANGE: ValueRange = ValueRange::new(18.0, 42.0, 2);
pub const FIES_MODERATE_RANGE: ValueRange = ValueRange::new(9.0, 28.0, 2);
pub const FIES_SEVERE_RANGE: ValueRange = ValueRange::new(3.0, 15.0, 2);
pub const CO_RANGE: ValueRange = ValueRange::new(0.8, 2.5, 3);
pub const NO2_RANGE: ValueRange = ValueRange::new(15.0, 85.0, 2);
pub const CH4_RANGE: ValueRange = ValueRange::new(1.8, 3.2, 3);
pub const NTP_RANGE: ValueRange = ValueRange::new(95.0, 115.0, 2);
pub const AGRI_WORKERS_RANGE: ValueRange = ValueRange::new(25.0, 65.0, 2);
pub const POPULATION_RANGE: (u64, u64) = (800_000, 14_000_000);

pub const CO_TREND_RANGE: ValueRange = ValueRange::new(0.5, 3.0, 3);
pub const NO2_TREND_RANGE: ValueRange = ValueRange::new(10.0, 90.0, 2);
pub const CH4_TREND_RANGE: ValueRange = ValueRange::new(1.5, 3.5, 3);
pub const POU_TREND_RANGE: ValueRange = ValueRange::new(2.0, 20.0, 2);
pub const NTP_TREND_RANGE: ValueRange = ValueRange::new(90.0, 120.0, 2);

/// Build the per-province table, one record per catalogue entry.
pub fn generate_province_table<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProvinceRecord> {
    SUMATERA_PROVINCES
        .iter()
        .map(|seed| ProvinceRecord {
            province: seed.name.to_string(),
            capital: seed.capital.to_string(),
            latitude: seed.lat,
            longitude: seed.lon,
            pou_percentage: POU_RANGE.sample(rng),
            fies_mild: FIES_MILD_RANGE.sample(rng),
            fies_moderate: FIES_MODERATE_RANGE.sample(rng),
            fies_severe: FIES_SEVERE_RANGE.sample(rng),
            co_level: CO_RANGE.sample(rng),
            no2_level: NO2_RANGE.sample(rng),
            ch4_level: CH4_RANGE.sample(rng),
            ntp: NTP_RANGE.sample(rng),
            agri_workers_percentage: AGRI_WORKERS_RANGE.sample(rng),
            population: rng.gen_range(POPULATION_RANGE.0..=POPULATION_RANGE.1),
        })
        .collect()
}

/// The `days` dates preceding `today`, oldest first (`today - days ..= today - 1`).
pub fn trailing_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (1..=days as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// Build the daily trend series for `provinces`, date-major.
pub fn generate_time_series<R: Rng + ?Sized>(
    rng: &mut R,
    provinces: &[String],
    days: u32,
    today: NaiveDate,
) -> Vec<TrendRecord> {
    let mut records = Vec::with_capacity(provinces.len() * days as usize);

    for date in trailing_dates(today, days) {
        for province in provinces {
            records.push(TrendRecord {
                date,
                province: province.clone(),
                co_trend: CO_TREND_RANGE.sample(rng),
                no2_trend: NO2_TREND_RANGE.sample(rng),
                ch4_trend: CH4_TREND_RANGE.sample(rng),
                pou_trend: POU_TREND_RANGE.sample(rng),
                ntp_trend: NTP_TREND_RANGE.sample(rng),
            });
        }
    }

    records
}
