//! Indicator maps over the province table.
//!
//! One builder serves every indicator: the descriptor decides colours, units
//! and marker sizing, the indicator family decides popup layout.

use minijinja::HtmlEscape;

use crate::features::dataset::models::{ProvinceRecord, ProvinceTable};
use crate::features::indicators::stats::Extent;
use crate::features::indicators::{Indicator, IndicatorFamily};
use crate::features::maps::colormap::LinearColormap;
use crate::features::maps::models::{CircleMarker, LatLng, MapSpec};
use crate::shared::constants::{
    MAP_TILES, MAP_ZOOM, MARKER_BORDER_COLOR, MARKER_BORDER_WEIGHT, POPUP_MAX_WIDTH,
};
use crate::shared::format::format_thousands;

/// Build the map for `indicator`, or `None` for an empty table
pub fn build_map(table: &ProvinceTable, indicator: Indicator) -> Option<MapSpec> {
    let spec = indicator.spec();
    let (center_lat, center_lng) = table.centroid()?;
    let extent = Extent::of(&table.column(|r| indicator.value(r)))?;

    if extent.is_degenerate() {
        tracing::debug!(
            "Constant {} column, markers use the mid radius and colour",
            spec.label
        );
    }

    let colormap = LinearColormap::new(spec.map_colors, extent);
    let style = spec.family.marker_style();

    let markers = table
        .iter()
        .map(|record| {
            let value = indicator.value(record);
            CircleMarker {
                province: record.province.clone(),
                location: LatLng {
                    lat: record.latitude,
                    lng: record.longitude,
                },
                value,
                radius: style.base_radius + extent.fraction(value) * style.radius_span,
                color: MARKER_BORDER_COLOR.to_string(),
                weight: MARKER_BORDER_WEIGHT,
                fill_color: colormap.color(value).to_hex(),
                fill_opacity: style.fill_opacity,
                tooltip: format!("{}: {}", record.province, spec.display(value)),
                popup_html: popup_html(record, indicator),
                popup_max_width: POPUP_MAX_WIDTH,
            }
        })
        .collect();

    Some(MapSpec {
        indicator,
        title: spec.map_title.to_string(),
        center: LatLng {
            lat: center_lat,
            lng: center_lng,
        },
        zoom: MAP_ZOOM,
        tiles: MAP_TILES.to_string(),
        markers,
        legend: colormap.legend(spec.caption()),
    })
}

/// Popup body for one marker
pub fn popup_html(record: &ProvinceRecord, indicator: Indicator) -> String {
    let mut rows: Vec<(&str, String)> = vec![("Ibukota", record.capital.clone())];

    match indicator.spec().family {
        IndicatorFamily::Poverty => {
            let pou = ("PoU", format!("{}%", record.pou_percentage));
            let mild = ("FIES Mild", format!("{}%", record.fies_mild));
            let moderate = ("FIES Moderate", format!("{}%", record.fies_moderate));
            let severe = ("FIES Severe", format!("{}%", record.fies_severe));
            if indicator == Indicator::Pou {
                rows.extend([pou, mild, moderate, severe]);
            } else {
                rows.extend([severe, moderate, mild]);
            }
            rows.push(("Populasi", format_thousands(record.population)));
        }
        IndicatorFamily::Greenhouse => {
            rows.push(("CO", format!("{} mg/m³", record.co_level)));
            rows.push(("NO2", format!("{} µg/m³", record.no2_level)));
            rows.push(("CH4", format!("{} ppm", record.ch4_level)));
        }
        IndicatorFamily::Employment => {
            rows.push(("NTP", record.ntp.to_string()));
            rows.push((
                "Pekerja Pertanian",
                format!("{}%", record.agri_workers_percentage),
            ));
            rows.push(("Populasi", format_thousands(record.population)));
        }
    }

    let mut html = format!(
        "<div style=\"width: 200px;\"><h4>{}</h4>",
        HtmlEscape(&record.province)
    );
    for (label, value) in rows {
        html.push_str(&format!("<b>{}:</b> {}<br>", label, HtmlEscape(&value)));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dataset::models::sample_record;
    use crate::features::dataset::services::generator::generate_province_table;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generated_table(seed: u64) -> ProvinceTable {
        let mut rng = StdRng::seed_from_u64(seed);
        ProvinceTable::new(generate_province_table(&mut rng))
    }

    #[test]
    fn test_one_marker_per_row() {
        let table = generated_table(1);
        for indicator in Indicator::ALL {
            let map = build_map(&table, indicator).unwrap();
            assert_eq!(map.markers.len(), table.len());
        }
    }

    #[test]
    fn test_center_is_centroid() {
        let table = generated_table(2);
        let map = build_map(&table, Indicator::Pou).unwrap();
        let (lat, lng) = table.centroid().unwrap();
        assert_eq!(map.center, LatLng { lat, lng });
        assert_eq!(map.zoom, 6);
    }

    #[test]
    fn test_radius_monotonic_in_value() {
        for seed in 0..10 {
            let table = generated_table(seed);
            for indicator in Indicator::ALL {
                let mut markers = build_map(&table, indicator).unwrap().markers;
                markers.sort_by(|a, b| a.value.total_cmp(&b.value));
                assert!(markers.windows(2).all(|w| w[0].radius <= w[1].radius));
            }
        }
    }

    #[test]
    fn test_radius_bounds_follow_family_style() {
        let table = generated_table(3);

        let poverty = build_map(&table, Indicator::Pou).unwrap();
        let radii: Vec<f64> = poverty.markers.iter().map(|m| m.radius).collect();
        assert!(radii.contains(&10.0));
        assert!(radii.contains(&30.0));

        let gas = build_map(&table, Indicator::No2).unwrap();
        let radii: Vec<f64> = gas.markers.iter().map(|m| m.radius).collect();
        assert!(radii.contains(&8.0));
        assert!(radii.contains(&23.0));
        assert!(gas.markers.iter().all(|m| m.fill_opacity == 0.8));
    }

    #[test]
    fn test_constant_column_does_not_divide_by_zero() {
        let table = ProvinceTable::new(vec![
            sample_record("A", 5.0),
            sample_record("B", 5.0),
            sample_record("C", 5.0),
        ]);

        let map = build_map(&table, Indicator::Ntp).unwrap();

        for marker in &map.markers {
            assert!(marker.radius.is_finite());
            assert_eq!(marker.radius, 8.0 + 0.5 * 15.0);
            assert_eq!(marker.fill_color, map.markers[0].fill_color);
        }
    }

    #[test]
    fn test_empty_table_has_no_map() {
        assert!(build_map(&ProvinceTable::default(), Indicator::Co).is_none());
    }

    #[test]
    fn test_tooltip_and_legend() {
        let table = ProvinceTable::new(vec![sample_record("A", 1.5), sample_record("B", 2.5)]);

        let map = build_map(&table, Indicator::Ch4).unwrap();

        assert_eq!(map.markers[0].tooltip, "A: 1.5 ppm");
        assert_eq!(map.legend.caption, "CH4 (ppm)");
        assert_eq!(map.legend.vmin, 1.5);
        assert_eq!(map.legend.vmax, 2.5);
        assert_eq!(map.legend.colors.len(), 4);
    }

    #[test]
    fn test_popup_content_by_family() {
        let mut record = sample_record("Aceh", 12.5);
        record.population = 5_274_871;

        let pou = popup_html(&record, Indicator::Pou);
        assert!(pou.contains("<h4>Aceh</h4>"));
        assert!(pou.contains("<b>PoU:</b> 12.5%"));
        assert!(pou.contains("<b>Populasi:</b> 5,274,871"));
        assert!(pou.find("PoU").unwrap() < pou.find("FIES Severe").unwrap());

        let severe = popup_html(&record, Indicator::FiesSevere);
        assert!(!severe.contains("<b>PoU:</b>"));
        assert!(severe.find("FIES Severe").unwrap() < severe.find("FIES Mild").unwrap());

        let gas = popup_html(&record, Indicator::Co);
        assert!(gas.contains("<b>NO2:</b> 12.5 µg"));
        assert!(!gas.contains("Populasi"));

        let employment = popup_html(&record, Indicator::AgriWorkers);
        assert!(employment.contains("<b>Pekerja Pertanian:</b> 12.5%"));
        assert!(employment.contains("<b>NTP:</b> 12.5"));
    }

    #[test]
    fn test_popup_escapes_text() {
        let mut record = sample_record("<Aceh & Co>", 1.0);
        record.capital = "\"Banda\" Aceh".to_string();

        let html = popup_html(&record, Indicator::Ntp);

        assert!(html.contains("<h4>&lt;Aceh &amp; Co&gt;</h4>"));
        assert!(html.contains("&quot;Banda&quot; Aceh"));
        assert!(!html.contains("<Aceh"));
    }
}
