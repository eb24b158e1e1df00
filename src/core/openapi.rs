use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::dataset::{handlers as dataset_handlers, models as dataset_models};
use crate::features::indicators::{
    stats, EmploymentIndicator, GasType, Indicator, IndicatorFamily, PovertyIndicator,
    TrendMetric,
};
use crate::features::maps::{colormap, handlers as maps_handlers, models as maps_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dataset
        dataset_handlers::list_provinces,
        dataset_handlers::get_time_series,
        // Maps
        maps_handlers::get_map,
        // Dashboard
        dashboard_handlers::get_view,
        dashboard_handlers::get_menu,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Indicators
            Indicator,
            IndicatorFamily,
            PovertyIndicator,
            GasType,
            EmploymentIndicator,
            TrendMetric,
            stats::Summary,
            stats::CorrelationMatrix,
            // Dataset
            dataset_models::ProvinceRecord,
            dataset_models::TrendRecord,
            dataset_models::TimeSeries,
            ApiResponse<Vec<dataset_models::ProvinceRecord>>,
            ApiResponse<dataset_models::TimeSeries>,
            // Maps
            maps_models::LatLng,
            maps_models::CircleMarker,
            maps_models::MapSpec,
            colormap::Legend,
            ApiResponse<maps_models::MapSpec>,
            // Dashboard
            dashboard_dtos::MonitoringCategory,
            dashboard_dtos::ResolvedSelection,
            dashboard_dtos::Metric,
            dashboard_dtos::MetricGroup,
            dashboard_dtos::Cell,
            dashboard_dtos::DataTable,
            dashboard_dtos::TrendDirection,
            dashboard_dtos::TrendChange,
            dashboard_dtos::Section,
            dashboard_dtos::DashboardPage,
            dashboard_dtos::MenuOption,
            dashboard_dtos::MenuOptions,
            ApiResponse<dashboard_dtos::DashboardPage>,
            ApiResponse<dashboard_dtos::MenuOptions>,
        )
    ),
    tags(
        (name = "Dataset", description = "Synthetic province indicators and daily trend series"),
        (name = "Maps", description = "Circle-marker maps per indicator"),
        (name = "Dashboard", description = "Menu dispatcher and composed dashboard pages"),
    ),
    info(
        title = "Sumatera Dashboard API",
        version = "0.1.0",
        description = "Poverty, greenhouse gas and employment indicators for the provinces of Sumatera",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
