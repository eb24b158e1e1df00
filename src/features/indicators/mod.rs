//! Indicator catalogue: selectable indicators, their display descriptors and
//! the descriptive statistics computed over them.

pub mod models;
pub mod registry;
pub mod stats;

pub use models::{
    EmploymentIndicator, GasType, Indicator, IndicatorFamily, PovertyIndicator, TrendMetric,
};