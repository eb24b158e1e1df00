use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::core::config::DatasetConfig;
use crate::core::error::{AppError, Result};
use crate::features::dataset::models::{ProvinceTable, TimeSeries};
use crate::features::dataset::services::generator;
use crate::shared::constants::SERIES_CACHE_CAPACITY;

/// Cache key: one generated series per distinct (provinces, days, today)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    provinces: Vec<String>,
    days: u32,
    today: NaiveDate,
}

/// On-demand series, bounded to `capacity` entries of the current day.
///
/// Inserting a key for a new day drops every entry of earlier days. When the
/// cache is full the oldest insertion is evicted.
#[derive(Debug)]
struct SeriesCache {
    entries: HashMap<SeriesKey, (u64, Arc<TimeSeries>)>,
    next_seq: u64,
    capacity: usize,
}

impl SeriesCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            next_seq: 0,
            capacity: capacity.max(1),
        }
    }

    fn get(&self, key: &SeriesKey) -> Option<Arc<TimeSeries>> {
        self.entries.get(key).map(|(_, series)| Arc::clone(series))
    }

    fn insert(&mut self, key: SeriesKey, series: Arc<TimeSeries>) {
        let before = self.entries.len();
        self.entries.retain(|k, _| k.today == key.today);
        if self.entries.len() < before {
            tracing::debug!(
                "Dropped {} cached series from earlier days",
                before - self.entries.len()
            );
        }

        while self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, (seq, _))| *seq)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    self.entries.remove(&k);
                }
                None => break,
            }
        }

        self.entries.insert(key, (self.next_seq, series));
        self.next_seq += 1;
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Session-scoped synthetic dataset.
///
/// The province table and the default trend series (every province over the
/// configured window) are generated once at construction and never mutated.
/// Other series are generated on demand and kept in a bounded cache.
pub struct DatasetService {
    rng: Mutex<StdRng>,
    provinces: Arc<ProvinceTable>,
    default_key: SeriesKey,
    default_series: Arc<TimeSeries>,
    series_cache: RwLock<SeriesCache>,
    config: DatasetConfig,
}

impl std::fmt::Debug for DatasetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetService")
            .field("provinces", &self.provinces.len())
            .field("default_series_rows", &self.default_series.records.len())
            .field("config", &self.config)
            .finish()
    }
}

impl DatasetService {
    pub fn new(config: DatasetConfig) -> Self {
        Self::with_today(config, Local::now().date_naive())
    }

    /// Build the dataset as of a fixed calendar day
    pub fn with_today(config: DatasetConfig, today: NaiveDate) -> Self {
        let mut rng = match config.seed {
            Some(seed) => {
                tracing::info!("Generating dataset with fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let provinces = ProvinceTable::new(generator::generate_province_table(&mut rng));
        let names = provinces.names();
        let records = generator::generate_time_series(&mut rng, &names, config.trend_days, today);
        let default_series = TimeSeries {
            days: config.trend_days,
            provinces: names.clone(),
            records,
        };

        tracing::info!(
            "Dataset generated: {} provinces, {} trend rows over {} days",
            provinces.len(),
            default_series.records.len(),
            config.trend_days
        );

        Self {
            rng: Mutex::new(rng),
            provinces: Arc::new(provinces),
            default_key: SeriesKey {
                provinces: names,
                days: config.trend_days,
                today,
            },
            default_series: Arc::new(default_series),
            series_cache: RwLock::new(SeriesCache::new(SERIES_CACHE_CAPACITY)),
            config,
        }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// The per-province table
    pub fn provinces(&self) -> Arc<ProvinceTable> {
        Arc::clone(&self.provinces)
    }

    /// Trend series for every province over the configured window.
    ///
    /// Its dates end the day before the service started and stay fixed for the
    /// whole session, so the trend page keeps one window even after midnight.
    /// [`Self::time_series`] windows end the day before the current day.
    pub fn default_series(&self) -> Arc<TimeSeries> {
        Arc::clone(&self.default_series)
    }

    /// Check that every name is a known province; returns them in catalogue order
    pub fn resolve_provinces(&self, names: &[String]) -> Result<Vec<String>> {
        let unknown: Vec<&str> = names
            .iter()
            .filter(|n| !self.provinces.contains(n))
            .map(String::as_str)
            .collect();

        if !unknown.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown province(s): {}",
                unknown.join(", ")
            )));
        }

        Ok(self
            .provinces
            .names()
            .into_iter()
            .filter(|n| names.contains(n))
            .collect())
    }

    /// Trend series for `provinces` over `days` ending yesterday.
    ///
    /// `provinces` must name at least one known province.
    pub async fn time_series(&self, provinces: &[String], days: u32) -> Result<Arc<TimeSeries>> {
        self.time_series_as_of(provinces, days, Local::now().date_naive())
            .await
    }

    pub async fn time_series_as_of(
        &self,
        provinces: &[String],
        days: u32,
        today: NaiveDate,
    ) -> Result<Arc<TimeSeries>> {
        if !(1..=DatasetConfig::MAX_TREND_DAYS).contains(&days) {
            return Err(AppError::Validation(format!(
                "days must be between 1 and {}",
                DatasetConfig::MAX_TREND_DAYS
            )));
        }
        if provinces.is_empty() {
            return Err(AppError::BadRequest(
                "At least one province must be selected".to_string(),
            ));
        }

        let provinces = self.resolve_provinces(provinces)?;
        let key = SeriesKey {
            provinces,
            days,
            today,
        };

        if key == self.default_key {
            return Ok(self.default_series());
        }

        if let Some(series) = self.series_cache.read().await.get(&key) {
            tracing::debug!("Time series cache hit: {} days, {:?}", days, key.provinces);
            return Ok(series);
        }

        let mut cache = self.series_cache.write().await;
        // Another request may have filled the entry while we waited for the lock
        if let Some(series) = cache.get(&key) {
            return Ok(series);
        }

        let records = {
            let mut rng = self.rng.lock().await;
            generator::generate_time_series(&mut *rng, &key.provinces, days, today)
        };
        tracing::debug!(
            "Generated time series: {} rows for {:?}",
            records.len(),
            key.provinces
        );

        let series = Arc::new(TimeSeries {
            days,
            provinces: key.provinces.clone(),
            records,
        });
        cache.insert(key, Arc::clone(&series));
        tracing::debug!("Time series cache holds {} series", cache.len());

        Ok(series)
    }

    #[cfg(test)]
    pub(crate) async fn cached_series_count(&self) -> usize {
        self.series_cache.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> DatasetService {
        DatasetService::with_today(
            DatasetConfig {
                seed: Some(seed),
                ..DatasetConfig::default()
            },
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_default_series_covers_every_province() {
        let service = seeded(1);
        let series = service.default_series();
        assert_eq!(series.days, 30);
        assert_eq!(series.provinces.len(), 10);
        assert_eq!(series.records.len(), 300);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(*seeded(42).provinces(), *seeded(42).provinces());
    }

    #[test]
    fn test_resolve_provinces_orders_by_catalogue() {
        let service = seeded(1);
        let resolved = service
            .resolve_provinces(&["Lampung".to_string(), "Aceh".to_string()])
            .unwrap();
        assert_eq!(resolved, vec!["Aceh".to_string(), "Lampung".to_string()]);
    }

    #[test]
    fn test_resolve_provinces_rejects_unknown() {
        let service = seeded(1);
        let result = service.resolve_provinces(&["Bali".to_string()]);
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("Bali")));
    }

    #[tokio::test]
    async fn test_time_series_cached_per_input() {
        let service = seeded(9);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let provinces = vec!["Riau".to_string(), "Jambi".to_string()];

        let first = service
            .time_series_as_of(&provinces, 7, today)
            .await
            .unwrap();
        let second = service
            .time_series_as_of(&provinces, 7, today)
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.records.len(), 14);
        assert_eq!(service.cached_series_count().await, 1);

        let other = service
            .time_series_as_of(&provinces, 8, today)
            .await
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(service.cached_series_count().await, 2);
    }

    #[tokio::test]
    async fn test_default_inputs_hit_default_series() {
        let service = seeded(2);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let all = service.provinces().names();

        let series = service.time_series_as_of(&all, 30, today).await.unwrap();

        assert!(Arc::ptr_eq(&series, &service.default_series()));
        assert_eq!(service.cached_series_count().await, 0);
    }

    #[tokio::test]
    async fn test_cache_stays_bounded() {
        let service = seeded(4);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let all = service.provinces().names();

        for days in 1..=DatasetConfig::MAX_TREND_DAYS {
            let series = service.time_series_as_of(&all, days, today).await.unwrap();
            assert_eq!(series.days, days);
        }

        assert_eq!(service.cached_series_count().await, SERIES_CACHE_CAPACITY);
    }

    #[tokio::test]
    async fn test_cache_evicts_oldest_insertion() {
        let service = seeded(5);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let provinces = vec!["Aceh".to_string()];

        let first = service
            .time_series_as_of(&provinces, 1, today)
            .await
            .unwrap();
        for days in 2..=(SERIES_CACHE_CAPACITY as u32 + 1) {
            service
                .time_series_as_of(&provinces, days, today)
                .await
                .unwrap();
        }

        let again = service
            .time_series_as_of(&provinces, 1, today)
            .await
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &again));
    }

    #[tokio::test]
    async fn test_new_day_drops_earlier_entries() {
        let service = seeded(6);
        let day_one = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let provinces = vec!["Riau".to_string()];

        for days in 1..=5 {
            service
                .time_series_as_of(&provinces, days, day_one)
                .await
                .unwrap();
        }
        assert_eq!(service.cached_series_count().await, 5);

        service
            .time_series_as_of(&provinces, 3, day_two)
            .await
            .unwrap();
        assert_eq!(service.cached_series_count().await, 1);
    }

    #[tokio::test]
    async fn test_default_series_keeps_startup_window() {
        let service = seeded(7);
        let next_day = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let all = service.provinces().names();

        let fresh = service
            .time_series_as_of(&all, 30, next_day)
            .await
            .unwrap();
        let default = service.default_series();

        assert!(!Arc::ptr_eq(&fresh, &default));
        assert_eq!(
            default.last_date().unwrap() + chrono::Duration::days(1),
            fresh.last_date().unwrap()
        );
    }

    #[tokio::test]
    async fn test_time_series_rejects_empty_selection() {
        let service = seeded(8);
        let result = service.time_series(&[], 7).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.cached_series_count().await, 0);
    }

    #[tokio::test]
    async fn test_time_series_rejects_out_of_range_days() {
        let service = seeded(3);
        let provinces = vec!["Aceh".to_string()];

        let zero = service.time_series(&provinces, 0).await;
        assert!(matches!(zero, Err(AppError::Validation(_))));

        let too_long = service.time_series(&provinces, 366).await;
        assert!(matches!(too_long, Err(AppError::Validation(_))));
    }
}
