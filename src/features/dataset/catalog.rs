/// Static facts about a province that the generator never randomises
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvinceSeed {
    pub name: &'static str,
    pub capital: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// The ten provinces of Pulau Sumatera, in display order
pub const SUMATERA_PROVINCES: [ProvinceSeed; 10] = [
    ProvinceSeed {
        name: "Aceh",
        capital: "Banda Aceh",
        lat: 4.695135,
        lon: 96.749397,
    },
    ProvinceSeed {
        name: "Sumatera Utara",
        capital: "Medan",
        lat: 2.1153547,
        lon: 99.5450974,
    },
    ProvinceSeed {
        name: "Sumatera Barat",
        capital: "Padang",
        lat: -0.7399397,
        lon: 100.8000051,
    },
    ProvinceSeed {
        name: "Riau",
        capital: "Pekanbaru",
        lat: 0.2933469,
        lon: 101.7068294,
    },
    ProvinceSeed {
        name: "Kepulauan Riau",
        capital: "Tanjung Pinang",
        lat: 3.9456514,
        lon: 108.1428669,
    },
    ProvinceSeed {
        name: "Jambi",
        capital: "Jambi",
        lat: -1.4851831,
        lon: 102.4380581,
    },
    ProvinceSeed {
        name: "Sumatera Selatan",
        capital: "Palembang",
        lat: -3.3194374,
        lon: 103.914399,
    },
    ProvinceSeed {
        name: "Bangka Belitung",
        capital: "Pangkal Pinang",
        lat: -2.7410513,
        lon: 106.4405872,
    },
    ProvinceSeed {
        name: "Bengkulu",
        capital: "Bengkulu",
        lat: -3.8004871,
        lon: 102.2655756,
    },
    ProvinceSeed {
        name: "Lampung",
        capital: "Bandar Lampung",
        lat: -4.5585849,
        lon: 105.4068079,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_province_names_unique() {
        let names: HashSet<_> = SUMATERA_PROVINCES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), SUMATERA_PROVINCES.len());
    }

    #[test]
    fn test_coordinates_inside_sumatera_bounds() {
        for province in SUMATERA_PROVINCES {
            assert!((-6.0..=6.0).contains(&province.lat), "{}", province.name);
            assert!((95.0..=109.0).contains(&province.lon), "{}", province.name);
        }
    }
}
