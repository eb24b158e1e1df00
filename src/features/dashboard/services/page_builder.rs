//! Section builders for each monitoring category.
//!
//! Every function here is a pure view over the dataset: the same table,
//! series and selection always compose the same sections.

use crate::features::charts::{self, ChartSpec};
use crate::features::dashboard::dtos::{
    Cell, DataTable, Metric, MetricGroup, Section, TrendChange, TrendDirection,
};
use crate::features::dataset::models::{ProvinceTable, TimeSeries};
use crate::features::indicators::stats::{self, correlation_matrix, percent_change};
use crate::features::indicators::{
    EmploymentIndicator, GasType, Indicator, PovertyIndicator, TrendMetric,
};
use crate::features::maps::build_map;
use crate::shared::format::{format_measure, round_to};

pub const EMPTY_TREND_SELECTION: &str = "Silakan pilih minimal satu provinsi untuk analisis trend.";

const NTP_INTERPRETATION: &str =
    "NTP > 100: Kondisi petani membaik\nNTP < 100: Kondisi petani memburuk";

const DEGENERATE_CORRELATION: &str = "Sebagian korelasi tidak terdefinisi (kurang dari dua \
     provinsi atau nilai konstan) dan ditampilkan sebagai 0.";

// ============================================================================
// Shared pieces
// ============================================================================

fn chart_section(title: impl Into<String>, chart: ChartSpec) -> Section {
    Section::Chart {
        title: title.into(),
        figure: charts::figure(&chart),
        chart,
    }
}

fn map_section(table: &ProvinceTable, indicator: Indicator) -> Option<Section> {
    let map = build_map(table, indicator)?;
    Some(Section::Map {
        title: format!("🗺️ {}", map.title),
        map,
    })
}

/// Mean, highest and lowest value of one indicator column
fn summary_metrics(table: &ProvinceTable, indicator: Indicator) -> Option<Section> {
    let spec = indicator.spec();
    let summary = stats::summarize(&table.column(|r| indicator.value(r)))?;
    let fmt = |v: f64| format_measure(v, spec.decimals, spec.unit);

    Some(Section::Metrics {
        title: None,
        items: vec![
            Metric::new(format!("Rata-rata {}", spec.label), fmt(summary.mean)),
            Metric::new("Tertinggi", fmt(summary.max)),
            Metric::new("Terendah", fmt(summary.min)),
        ],
    })
}

fn table_section(title: &str, columns: &[&str], rows: Vec<Vec<Cell>>) -> Section {
    Section::Table {
        title: title.to_string(),
        table: DataTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        },
    }
}

fn mean_of(table: &ProvinceTable, indicator: Indicator) -> f64 {
    stats::mean(&table.column(|r| indicator.value(r))).unwrap_or_default()
}

// ============================================================================
// Categories
// ============================================================================

pub fn overview(table: &ProvinceTable) -> Vec<Section> {
    let mut sections = vec![Section::Metrics {
        title: None,
        items: vec![
            Metric::new(
                "🍽️ Kemiskinan",
                format!("{:.1}%", mean_of(table, Indicator::Pou)),
            )
            .with_help("Rata-rata PoU"),
            Metric::new("🏭 Gas CO", format!("{:.2}", mean_of(table, Indicator::Co)))
                .with_help("Rata-rata mg/m³"),
            Metric::new("👨‍🌾 NTP", format!("{:.1}", mean_of(table, Indicator::Ntp)))
                .with_help("Rata-rata Nilai Tukar Petani"),
            Metric::new(
                "🌾 Pertanian",
                format!("{:.1}%", mean_of(table, Indicator::AgriWorkers)),
            )
            .with_help("Rata-rata Pekerja Pertanian"),
        ],
    }];

    let rows: Vec<Vec<Cell>> = table
        .iter()
        .map(|r| {
            vec![
                r.province.as_str().into(),
                r.capital.as_str().into(),
                r.pou_percentage.into(),
                r.co_level.into(),
                r.ntp.into(),
                r.agri_workers_percentage.into(),
            ]
        })
        .collect();
    sections.push(table_section(
        "📋 Data Provinsi Sumatera",
        &[
            "Provinsi",
            "Ibukota",
            "PoU (%)",
            "CO (mg/m³)",
            "NTP",
            "Pekerja Pertanian (%)",
        ],
        rows,
    ));

    if let Some(map) = build_map(table, Indicator::Pou) {
        sections.push(Section::Map {
            title: "🗺️ Peta Overview Sumatera".to_string(),
            map,
        });
    }

    sections
}

pub fn poverty(table: &ProvinceTable, selected: PovertyIndicator) -> Vec<Section> {
    let indicator = Indicator::from(selected);
    let mut sections: Vec<Section> = map_section(table, indicator).into_iter().collect();

    match selected {
        PovertyIndicator::Pou => {
            sections.push(chart_section(
                "📊 Statistik Kemiskinan",
                charts::ranking_bar(table, indicator),
            ));
            sections.extend(summary_metrics(table, indicator));
        }
        PovertyIndicator::FiesSevere => {
            sections.push(chart_section(
                "📊 Statistik Kemiskinan",
                charts::fies_stacked_bar(table),
            ));
        }
    }

    let rows: Vec<Vec<Cell>> = table
        .iter()
        .map(|r| {
            vec![
                r.province.as_str().into(),
                r.pou_percentage.into(),
                r.fies_mild.into(),
                r.fies_moderate.into(),
                r.fies_severe.into(),
            ]
        })
        .collect();
    sections.push(table_section(
        "📋 Detail Data Kemiskinan",
        &[
            "Provinsi",
            "PoU (%)",
            "FIES Mild (%)",
            "FIES Moderate (%)",
            "FIES Severe (%)",
        ],
        rows,
    ));

    sections
}

pub fn greenhouse(table: &ProvinceTable, gas: GasType) -> Vec<Section> {
    let indicator = Indicator::from(gas);
    let label = indicator.spec().label;
    let mut sections: Vec<Section> = map_section(table, indicator).into_iter().collect();

    sections.push(chart_section(
        format!("📊 Statistik {}", label),
        charts::ranking_bar(table, indicator),
    ));
    sections.extend(summary_metrics(table, indicator));
    sections.push(chart_section(
        "📊 Perbandingan Gas Rumah Kaca",
        charts::gas_comparison(table),
    ));

    let rows: Vec<Vec<Cell>> = table
        .iter()
        .map(|r| {
            vec![
                r.province.as_str().into(),
                r.co_level.into(),
                r.no2_level.into(),
                r.ch4_level.into(),
            ]
        })
        .collect();
    sections.push(table_section(
        "📋 Detail Data Gas Rumah Kaca",
        &["Provinsi", "CO (mg/m³)", "NO2 (µg/m³)", "CH4 (ppm)"],
        rows,
    ));

    sections
}

pub fn employment(table: &ProvinceTable, selected: EmploymentIndicator) -> Vec<Section> {
    let indicator = Indicator::from(selected);
    let mut sections: Vec<Section> = map_section(table, indicator).into_iter().collect();

    sections.push(chart_section(
        "📊 Statistik Ketenagakerjaan",
        charts::ranking_bar(table, indicator),
    ));
    if selected == EmploymentIndicator::Ntp {
        sections.push(Section::Info {
            text: NTP_INTERPRETATION.to_string(),
        });
    }
    sections.extend(summary_metrics(table, indicator));
    sections.push(chart_section(
        "🔍 Analisis Hubungan NTP dan Pekerja Pertanian",
        charts::ntp_agri_scatter(table),
    ));

    let rows: Vec<Vec<Cell>> = table
        .iter()
        .map(|r| {
            vec![
                r.province.as_str().into(),
                r.ntp.into(),
                r.agri_workers_percentage.into(),
            ]
        })
        .collect();
    sections.push(table_section(
        "📋 Detail Data Ketenagakerjaan",
        &["Provinsi", "NTP", "Pekerja Pertanian (%)"],
        rows,
    ));

    sections
}

// ============================================================================
// Trend
// ============================================================================

/// Per-province mean of every trend metric, in `TrendMetric::ALL` order
fn province_means(series: &TimeSeries, province: &str) -> Option<Vec<f64>> {
    TrendMetric::ALL
        .into_iter()
        .map(|metric| {
            let values: Vec<f64> = series
                .for_province(province)
                .map(|r| metric.value(r))
                .collect();
            stats::mean(&values)
        })
        .collect()
}

/// Start-to-end change of `metric`; needs at least two samples
pub fn trend_change(
    series: &TimeSeries,
    province: &str,
    metric: TrendMetric,
) -> Option<TrendChange> {
    let mut rows = series.for_province(province);
    let first = rows.next()?;
    let last = rows.last()?;

    let change_percent = percent_change(metric.value(first), metric.value(last));
    let direction = change_percent
        .map(TrendDirection::of)
        .unwrap_or(TrendDirection::Flat);

    Some(TrendChange {
        province: province.to_string(),
        label: match change_percent {
            Some(change) => format!("{:.1}%", change),
            None => "n/a".to_string(),
        },
        change_percent,
        direction,
        direction_label: direction.label().to_string(),
    })
}

/// Trend view over `provinces`, restricted from the session series
pub fn trend(series: &TimeSeries, provinces: &[String], metric: TrendMetric) -> Vec<Section> {
    if provinces.is_empty() {
        return vec![Section::Warning {
            text: EMPTY_TREND_SELECTION.to_string(),
        }];
    }

    let series = series.restrict_to(provinces);
    let spec = metric.spec();
    let mut sections = vec![chart_section(
        format!("📊 Trend {} - {} Hari Terakhir", spec.menu_label, series.days),
        charts::trend_line(&series, metric),
    )];

    let groups = series
        .provinces
        .iter()
        .filter_map(|province| {
            let latest = series.latest(province)?;
            let items = TrendMetric::ALL
                .into_iter()
                .map(|m| {
                    let s = m.spec();
                    Metric::new(s.label, format_measure(m.value(latest), s.decimals, s.unit))
                })
                .collect();
            Some(MetricGroup {
                title: format!("📍 {}", province),
                items,
            })
        })
        .collect();
    sections.push(Section::MetricGroups {
        title: "📊 Statistik Trend Terkini".to_string(),
        groups,
    });

    let changes: Vec<TrendChange> = series
        .provinces
        .iter()
        .filter_map(|province| trend_change(&series, province, metric))
        .collect();
    if !changes.is_empty() {
        sections.push(Section::Changes {
            title: "📈 Analisis Perubahan".to_string(),
            items: changes,
        });
    }

    let means: Vec<(&String, Vec<f64>)> = series
        .provinces
        .iter()
        .filter_map(|province| Some((province, province_means(&series, province)?)))
        .collect();
    if means.is_empty() {
        return sections;
    }

    let labels: Vec<&str> = TrendMetric::ALL.iter().map(|m| m.spec().label).collect();
    let columns: Vec<Vec<f64>> = (0..TrendMetric::ALL.len())
        .map(|i| means.iter().map(|(_, row)| row[i]).collect())
        .collect();
    let matrix = correlation_matrix(&labels, &columns);
    if matrix.degenerate {
        tracing::debug!(
            "Correlation over {} province(s) has undefined entries",
            matrix.samples
        );
    }

    sections.push(chart_section(
        "🔥 Heatmap Korelasi Antar Indikator",
        charts::correlation_heatmap(&matrix),
    ));
    if matrix.degenerate {
        sections.push(Section::Info {
            text: DEGENERATE_CORRELATION.to_string(),
        });
    }

    let columns: Vec<&str> = std::iter::once("Provinsi")
        .chain(TrendMetric::ALL.iter().map(|m| m.spec().axis_label))
        .collect();
    let rows: Vec<Vec<Cell>> = means
        .iter()
        .map(|(province, row)| {
            std::iter::once(Cell::from(province.as_str()))
                .chain(row.iter().map(|v| Cell::from(round_to(*v, 3))))
                .collect()
        })
        .collect();
    sections.push(table_section("📋 Summary Data Trend Terkini", &columns, rows));

    sections
}
