//! Plotly figure JSON (`{"data": [...], "layout": {...}}`) for chart specs.

use serde_json::{json, Map, Value};

use crate::features::charts::models::{
    BarChart, ChartSpec, HeatmapChart, LineChart, MultiBarChart, ScatterChart,
};
use crate::features::charts::palette::plotly_colorscale;

pub fn figure(chart: &ChartSpec) -> Value {
    match chart {
        ChartSpec::Bar(c) => bar(c),
        ChartSpec::MultiBar(c) => multi_bar(c),
        ChartSpec::Scatter(c) => scatter(c),
        ChartSpec::Line(c) => line(c),
        ChartSpec::Heatmap(c) => heatmap(c),
    }
}

fn axis(title: &str) -> Value {
    json!({ "title": { "text": title } })
}

fn layout(title: &str, height: Option<u32>) -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": title }));
    if let Some(height) = height {
        layout.insert("height".into(), json!(height));
    }
    layout
}

fn bar(chart: &BarChart) -> Value {
    let trace = json!({
        "type": "bar",
        "orientation": "h",
        "x": chart.values,
        "y": chart.categories,
        "marker": {
            "color": chart.values,
            "colorscale": plotly_colorscale(&chart.color_scale),
            "showscale": true,
            "colorbar": { "title": { "text": chart.value_title } },
        },
    });

    let mut layout = layout(&chart.title, chart.height);
    layout.insert("xaxis".into(), axis(&chart.value_title));
    layout.insert("yaxis".into(), axis(&chart.category_title));

    json!({ "data": [trace], "layout": layout })
}

fn multi_bar(chart: &MultiBarChart) -> Value {
    let traces: Vec<Value> = chart
        .series
        .iter()
        .map(|s| json!({ "type": "bar", "name": s.name, "x": s.x, "y": s.y }))
        .collect();

    let mut layout = layout(&chart.title, chart.height);
    layout.insert("barmode".into(), json!(chart.mode.as_str()));
    layout.insert(
        "xaxis".into(),
        json!({ "title": { "text": chart.x_title }, "tickangle": chart.tick_angle }),
    );
    layout.insert("yaxis".into(), axis(&chart.y_title));
    layout.insert(
        "legend".into(),
        json!({ "title": { "text": chart.legend_title } }),
    );

    json!({ "data": traces, "layout": layout })
}

fn scatter(chart: &ScatterChart) -> Value {
    let trace = json!({
        "type": "scatter",
        "mode": "markers+text",
        "x": chart.x,
        "y": chart.y,
        "text": chart.labels,
        "textposition": "top center",
    });

    let mut layout = layout(&chart.title, None);
    layout.insert("xaxis".into(), axis(&chart.x_title));
    layout.insert("yaxis".into(), axis(&chart.y_title));

    json!({ "data": [trace], "layout": layout })
}

fn line(chart: &LineChart) -> Value {
    let traces: Vec<Value> = chart
        .series
        .iter()
        .map(|s| json!({ "type": "scatter", "mode": "lines", "name": s.name, "x": s.x, "y": s.y }))
        .collect();

    let mut layout = layout(&chart.title, chart.height);
    layout.insert("xaxis".into(), axis(&chart.x_title));
    layout.insert("yaxis".into(), axis(&chart.y_title));
    layout.insert(
        "legend".into(),
        json!({ "title": { "text": chart.legend_title } }),
    );

    if let Some(reference) = &chart.reference_line {
        layout.insert(
            "shapes".into(),
            json!([{
                "type": "line",
                "xref": "paper",
                "x0": 0,
                "x1": 1,
                "y0": reference.y,
                "y1": reference.y,
                "line": { "color": reference.color, "dash": reference.dash },
            }]),
        );
        layout.insert(
            "annotations".into(),
            json!([{
                "xref": "paper",
                "x": 1,
                "y": reference.y,
                "text": reference.label,
                "showarrow": false,
                "xanchor": "right",
                "yanchor": "bottom",
            }]),
        );
    }

    json!({ "data": traces, "layout": layout })
}

fn heatmap(chart: &HeatmapChart) -> Value {
    let trace = json!({
        "type": "heatmap",
        "x": chart.labels,
        "y": chart.labels,
        "z": chart.z,
        "zmin": chart.zmin,
        "zmax": chart.zmax,
        "colorscale": plotly_colorscale(&chart.color_scale),
    });

    let mut layout = layout(&chart.title, chart.height);
    layout.insert("yaxis".into(), json!({ "autorange": "reversed" }));

    json!({ "data": [trace], "layout": layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::charts::models::{BarMode, HorizontalLine, Series};

    fn series(name: &str) -> Series {
        Series {
            name: name.to_string(),
            x: vec!["A".into(), "B".into()],
            y: vec![1.0, 2.0],
        }
    }

    #[test]
    fn test_bar_figure() {
        let chart = ChartSpec::Bar(BarChart {
            title: "PoU per Provinsi (%)".into(),
            categories: vec!["A".into(), "B".into()],
            values: vec![1.0, 2.0],
            value_title: "PoU (%)".into(),
            category_title: "Provinsi".into(),
            color_scale: "Reds".into(),
            height: Some(400),
        });

        let fig = figure(&chart);

        assert_eq!(fig["data"][0]["orientation"], "h");
        assert_eq!(fig["data"][0]["y"], json!(["A", "B"]));
        assert!(fig["data"][0]["marker"]["colorscale"].is_array());
        assert_eq!(fig["layout"]["height"], 400);
        assert_eq!(fig["layout"]["title"]["text"], "PoU per Provinsi (%)");
    }

    #[test]
    fn test_multi_bar_figure() {
        let chart = ChartSpec::MultiBar(MultiBarChart {
            title: "t".into(),
            x_title: "x".into(),
            y_title: "y".into(),
            legend_title: "l".into(),
            mode: BarMode::Stack,
            series: vec![series("one"), series("two")],
            tick_angle: 45,
            height: None,
        });

        let fig = figure(&chart);

        assert_eq!(fig["data"].as_array().unwrap().len(), 2);
        assert_eq!(fig["layout"]["barmode"], "stack");
        assert_eq!(fig["layout"]["xaxis"]["tickangle"], 45);
        assert!(fig["layout"].get("height").is_none());
    }

    #[test]
    fn test_line_figure_reference_line() {
        let mut chart = LineChart {
            title: "Trend NTP".into(),
            x_title: "Tanggal".into(),
            y_title: "NTP".into(),
            legend_title: "Provinsi".into(),
            series: vec![series("Aceh")],
            reference_line: None,
            height: Some(500),
        };
        let plain = figure(&ChartSpec::Line(chart.clone()));
        assert!(plain["layout"].get("shapes").is_none());

        chart.reference_line = Some(HorizontalLine {
            y: 100.0,
            label: "NTP = 100 (Break Even)".into(),
            color: "red".into(),
            dash: "dash".into(),
        });
        let fig = figure(&ChartSpec::Line(chart));

        assert_eq!(fig["layout"]["shapes"][0]["y0"], 100.0);
        assert_eq!(fig["layout"]["shapes"][0]["line"]["dash"], "dash");
        assert_eq!(
            fig["layout"]["annotations"][0]["text"],
            "NTP = 100 (Break Even)"
        );
    }

    #[test]
    fn test_scatter_and_heatmap_figures() {
        let scatter = figure(&ChartSpec::Scatter(ScatterChart {
            title: "s".into(),
            x_title: "x".into(),
            y_title: "y".into(),
            x: vec![1.0],
            y: vec![2.0],
            labels: vec!["Aceh".into()],
        }));
        assert_eq!(scatter["data"][0]["textposition"], "top center");
        assert_eq!(scatter["data"][0]["text"][0], "Aceh");

        let heatmap = figure(&ChartSpec::Heatmap(HeatmapChart {
            title: "h".into(),
            labels: vec!["a".into(), "b".into()],
            z: vec![vec![1.0, 0.5], vec![0.5, 1.0]],
            color_scale: "RdBu".into(),
            zmin: -1.0,
            zmax: 1.0,
            height: Some(400),
        }));
        assert_eq!(heatmap["data"][0]["z"][0][1], 0.5);
        assert_eq!(heatmap["data"][0]["zmin"], -1.0);
    }
}
