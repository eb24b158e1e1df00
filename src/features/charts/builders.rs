//! Chart builders over the province table and trend series.

use crate::features::charts::models::{
    BarChart, BarMode, ChartSpec, HeatmapChart, HorizontalLine, LineChart, MultiBarChart,
    ScatterChart, Series,
};
use crate::features::dataset::models::{ProvinceRecord, ProvinceTable, TimeSeries};
use crate::features::indicators::stats::{normalize_min_max, CorrelationMatrix};
use crate::features::indicators::{Indicator, TrendMetric};
use crate::shared::constants::{
    NORMALIZED_SCALE, PROVINCE_TICK_ANGLE, SIDE_CHART_HEIGHT, TREND_CHART_HEIGHT,
};

const PROVINCE_AXIS: &str = "Provinsi";
const DATE_AXIS: &str = "Tanggal";

/// Provinces ranked by `indicator`, lowest at the bottom of the axis
pub fn ranking_bar(table: &ProvinceTable, indicator: Indicator) -> ChartSpec {
    let spec = indicator.spec();

    let mut rows: Vec<&ProvinceRecord> = table.iter().collect();
    rows.sort_by(|a, b| indicator.value(a).total_cmp(&indicator.value(b)));

    ChartSpec::Bar(BarChart {
        title: spec.chart_title.to_string(),
        categories: rows.iter().map(|r| r.province.clone()).collect(),
        values: rows.iter().map(|r| indicator.value(r)).collect(),
        value_title: spec.caption(),
        category_title: PROVINCE_AXIS.to_string(),
        color_scale: spec.color_scale.to_string(),
        height: Some(SIDE_CHART_HEIGHT),
    })
}

/// Mild, moderate and severe food insecurity stacked per province
pub fn fies_stacked_bar(table: &ProvinceTable) -> ChartSpec {
    let provinces = table.names();
    let tier = |name: &str, select: fn(&ProvinceRecord) -> f64| Series {
        name: name.to_string(),
        x: provinces.clone(),
        y: table.column(select),
    };

    ChartSpec::MultiBar(MultiBarChart {
        title: "Perbandingan Tingkat FIES".to_string(),
        x_title: PROVINCE_AXIS.to_string(),
        y_title: "Persentase (%)".to_string(),
        legend_title: "Tingkat FIES".to_string(),
        mode: BarMode::Stack,
        series: vec![
            tier("FIES Mild", |r| r.fies_mild),
            tier("FIES Moderate", |r| r.fies_moderate),
            tier("FIES Severe", |r| r.fies_severe),
        ],
        tick_angle: PROVINCE_TICK_ANGLE,
        height: Some(SIDE_CHART_HEIGHT),
    })
}

/// CO, NO2 and CH4 side by side, each min-max scaled to 0-100 on its own column
pub fn gas_comparison(table: &ProvinceTable) -> ChartSpec {
    let provinces = table.names();
    let series = [Indicator::Co, Indicator::No2, Indicator::Ch4]
        .into_iter()
        .map(|gas| Series {
            name: gas.spec().label.to_string(),
            x: provinces.clone(),
            y: normalize_min_max(&table.column(|r| gas.value(r)), NORMALIZED_SCALE),
        })
        .collect();

    ChartSpec::MultiBar(MultiBarChart {
        title: "Perbandingan Relatif Gas Rumah Kaca (Normalized)".to_string(),
        x_title: PROVINCE_AXIS.to_string(),
        y_title: "Level Relatif (0-100)".to_string(),
        legend_title: "Jenis Gas".to_string(),
        mode: BarMode::Group,
        series,
        tick_angle: PROVINCE_TICK_ANGLE,
        height: None,
    })
}

pub fn ntp_agri_scatter(table: &ProvinceTable) -> ChartSpec {
    ChartSpec::Scatter(ScatterChart {
        title: "Hubungan NTP dan Persentase Pekerja Pertanian".to_string(),
        x_title: "Nilai Tukar Petani".to_string(),
        y_title: "Pekerja Pertanian (%)".to_string(),
        x: table.column(|r| r.ntp),
        y: table.column(|r| r.agri_workers_percentage),
        labels: table.names(),
    })
}

/// One line per province of `series`, in the series' province order
pub fn trend_line(series: &TimeSeries, metric: TrendMetric) -> ChartSpec {
    let spec = metric.spec();

    let lines = series
        .provinces
        .iter()
        .map(|province| {
            let (x, y) = series
                .for_province(province)
                .map(|r| (r.date.format("%Y-%m-%d").to_string(), metric.value(r)))
                .unzip();
            Series {
                name: province.clone(),
                x,
                y,
            }
        })
        .collect();

    ChartSpec::Line(LineChart {
        title: spec.chart_title.to_string(),
        x_title: DATE_AXIS.to_string(),
        y_title: spec.axis_label.to_string(),
        legend_title: PROVINCE_AXIS.to_string(),
        series: lines,
        reference_line: spec.reference_line.map(|line| HorizontalLine {
            y: line.y,
            label: line.label.to_string(),
            color: "red".to_string(),
            dash: "dash".to_string(),
        }),
        height: Some(TREND_CHART_HEIGHT),
    })
}

pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> ChartSpec {
    ChartSpec::Heatmap(HeatmapChart {
        title: "Korelasi Antar Indikator".to_string(),
        labels: matrix.labels.clone(),
        z: matrix.values.clone(),
        color_scale: "RdBu".to_string(),
        zmin: -1.0,
        zmax: 1.0,
        height: Some(SIDE_CHART_HEIGHT),
    })
}
