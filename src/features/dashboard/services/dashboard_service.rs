use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::page_builder;
use crate::features::dataset::dtos::parse_province_list;
use crate::features::dataset::DatasetService;
use crate::features::indicators::{
    EmploymentIndicator, GasType, Indicator, PovertyIndicator, TrendMetric,
};

/// Menu dispatcher: turns a sidebar selection into a composed page
pub struct DashboardService {
    dataset: Arc<DatasetService>,
}

impl DashboardService {
    pub fn new(dataset: Arc<DatasetService>) -> Self {
        Self { dataset }
    }

    /// Provinces pre-selected in the trend view
    pub fn default_provinces(&self) -> Vec<String> {
        self.dataset
            .provinces()
            .names()
            .into_iter()
            .take(self.dataset.config().default_trend_provinces)
            .collect()
    }

    // ========================================================================
    // Menu
    // ========================================================================

    pub fn menu(&self) -> MenuOptions {
        let indicator_option = |indicator: Indicator| {
            MenuOption::new(indicator.key(), indicator.spec().menu_label)
        };

        MenuOptions {
            categories: MonitoringCategory::ALL
                .into_iter()
                .map(|c| MenuOption::new(c.key(), c.label()))
                .collect(),
            poverty: PovertyIndicator::ALL
                .into_iter()
                .map(|p| indicator_option(p.into()))
                .collect(),
            gas: GasType::ALL
                .into_iter()
                .map(|g| indicator_option(g.into()))
                .collect(),
            employment: EmploymentIndicator::ALL
                .into_iter()
                .map(|e| indicator_option(e.into()))
                .collect(),
            trend: TrendMetric::ALL
                .into_iter()
                .map(|m| MenuOption::new(m.key(), m.spec().menu_label))
                .collect(),
            provinces: self.dataset.provinces().names(),
            default_provinces: self.default_provinces(),
        }
    }

    // ========================================================================
    // Page
    // ========================================================================

    /// Apply defaults and validate province names
    pub fn resolve(&self, selection: &MenuSelection) -> Result<ResolvedSelection> {
        let provinces = match selection.provinces.as_deref() {
            None => self.default_provinces(),
            Some(raw) => self.dataset.resolve_provinces(&parse_province_list(raw))?,
        };

        Ok(ResolvedSelection {
            category: selection.category.unwrap_or_default(),
            poverty: selection.poverty.unwrap_or_default(),
            gas: selection.gas.unwrap_or_default(),
            employment: selection.employment.unwrap_or_default(),
            trend: selection.trend.unwrap_or_default(),
            provinces,
        })
    }

    /// Compose the page for `selection`, recomputed from scratch on every call.
    ///
    /// The trend view reads the session's default series, so its window ends
    /// on the startup day for the lifetime of the service.
    pub fn render(&self, selection: &MenuSelection) -> Result<DashboardPage> {
        let resolved = self.resolve(selection)?;
        let table = self.dataset.provinces();

        let sections = match resolved.category {
            MonitoringCategory::Overview => page_builder::overview(&table),
            MonitoringCategory::Poverty => page_builder::poverty(&table, resolved.poverty),
            MonitoringCategory::Greenhouse => page_builder::greenhouse(&table, resolved.gas),
            MonitoringCategory::Employment => {
                page_builder::employment(&table, resolved.employment)
            }
            MonitoringCategory::Trend => page_builder::trend(
                &self.dataset.default_series(),
                &resolved.provinces,
                resolved.trend,
            ),
        };

        tracing::debug!(
            "Rendered {:?} page with {} section(s)",
            resolved.category,
            sections.len()
        );

        Ok(DashboardPage {
            category: resolved.category,
            heading: resolved.category.heading().to_string(),
            selection: resolved,
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatasetConfig;
    use crate::core::error::AppError;

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(DatasetService::new(DatasetConfig {
            seed: Some(42),
            ..DatasetConfig::default()
        })))
    }

    #[test]
    fn test_default_selection_is_overview() {
        let page = service().render(&MenuSelection::default()).unwrap();

        assert_eq!(page.category, MonitoringCategory::Overview);
        assert_eq!(page.heading, "📊 Ringkasan Indikator Sumatera");
        assert_eq!(
            page.selection.provinces,
            vec!["Aceh", "Sumatera Utara", "Sumatera Barat"]
        );
    }

    #[test]
    fn test_every_category_renders() {
        let service = service();
        for category in MonitoringCategory::ALL {
            let page = service
                .render(&MenuSelection {
                    category: Some(category),
                    ..MenuSelection::default()
                })
                .unwrap();
            assert!(!page.sections.is_empty());
            assert!(!page
                .sections
                .iter()
                .any(|s| matches!(s, Section::Warning { .. })));
        }
    }

    #[test]
    fn test_empty_province_selection_warns() {
        let page = service()
            .render(&MenuSelection {
                category: Some(MonitoringCategory::Trend),
                provinces: Some(String::new()),
                ..MenuSelection::default()
            })
            .unwrap();

        assert_eq!(page.sections.len(), 1);
        assert!(matches!(page.sections[0], Section::Warning { .. }));
    }

    #[test]
    fn test_unknown_province_is_rejected() {
        let result = service().render(&MenuSelection {
            category: Some(MonitoringCategory::Trend),
            provinces: Some("Aceh,Atlantis".into()),
            ..MenuSelection::default()
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_trend_uses_selected_provinces() {
        let page = service()
            .render(&MenuSelection {
                category: Some(MonitoringCategory::Trend),
                trend: Some(TrendMetric::Ntp),
                provinces: Some("Riau,Lampung".into()),
                ..MenuSelection::default()
            })
            .unwrap();

        let Section::Chart { figure, .. } = &page.sections[0] else {
            panic!("expected the trend chart first");
        };
        assert_eq!(figure["data"].as_array().unwrap().len(), 2);
        assert_eq!(figure["data"][0]["name"], "Riau");
        assert_eq!(figure["data"][0]["y"].as_array().unwrap().len(), 30);
        assert!(figure["layout"]["shapes"].is_array());
    }

    #[test]
    fn test_menu_options() {
        let menu = service().menu();

        assert_eq!(menu.categories.len(), 5);
        assert_eq!(menu.categories[2].label, "🏭 Gas Rumah Kaca");
        assert_eq!(menu.poverty[1].key, "fies_severe");
        assert_eq!(menu.gas.len(), 3);
        assert_eq!(menu.employment[1].label, "Persentase Pekerja Pertanian");
        assert_eq!(menu.trend[4].label, "NTP Trend");
        assert_eq!(menu.provinces.len(), 10);
        assert_eq!(menu.default_provinces.len(), 3);
    }
}
