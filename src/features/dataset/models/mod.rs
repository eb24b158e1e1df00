pub mod province;
pub mod trend;

pub use province::{ProvinceRecord, ProvinceTable};
pub use trend::{TimeSeries, TrendRecord};

#[cfg(test)]
pub(crate) use province::sample_record;
