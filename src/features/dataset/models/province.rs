use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One province row of the synthetic indicator table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProvinceRecord {
    pub province: String,
    pub capital: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Prevalence of Undernourishment (%)
    pub pou_percentage: f64,
    /// FIES mild food insecurity (%)
    pub fies_mild: f64,
    /// FIES moderate food insecurity (%)
    pub fies_moderate: f64,
    /// FIES severe food insecurity (%)
    pub fies_severe: f64,
    /// Carbon monoxide (mg/m³)
    pub co_level: f64,
    /// Nitrogen dioxide (µg/m³)
    pub no2_level: f64,
    /// Methane (ppm)
    pub ch4_level: f64,
    /// Nilai Tukar Petani (farmer terms-of-trade index)
    pub ntp: f64,
    /// Share of the workforce employed in agriculture (%)
    pub agri_workers_percentage: f64,
    pub population: u64,
}

/// The per-province table, one record per province in catalogue order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProvinceTable {
    pub records: Vec<ProvinceRecord>,
}

impl ProvinceTable {
    pub fn new(records: Vec<ProvinceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProvinceRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.province.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.province == name)
    }

    /// Extract one numeric column in row order
    pub fn column<F>(&self, select: F) -> Vec<f64>
    where
        F: Fn(&ProvinceRecord) -> f64,
    {
        self.records.iter().map(select).collect()
    }

    /// Mean latitude/longitude of all rows
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            return None;
        }
        let n = self.records.len() as f64;
        let lat = self.records.iter().map(|r| r.latitude).sum::<f64>() / n;
        let lon = self.records.iter().map(|r| r.longitude).sum::<f64>() / n;
        Some((lat, lon))
    }
}

#[cfg(test)]
pub(crate) fn sample_record(name: &str, value: f64) -> ProvinceRecord {
    ProvinceRecord {
        province: name.to_string(),
        capital: format!("Ibukota {}", name),
        latitude: 0.0,
        longitude: 100.0,
        pou_percentage: value,
        fies_mild: value,
        fies_moderate: value,
        fies_severe: value,
        co_level: value,
        no2_level: value,
        ch4_level: value,
        ntp: value,
        agri_workers_percentage: value,
        population: 1_000_000,
    }
}
