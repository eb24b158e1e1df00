use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::dataset::DatasetService;
use crate::features::indicators::Indicator;
use crate::features::maps::builder::build_map;
use crate::features::maps::models::MapSpec;
use crate::shared::types::ApiResponse;

/// Circle-marker map of one indicator across all provinces
#[utoipa::path(
    get,
    path = "/api/maps/{indicator}",
    tag = "Maps",
    params(
        ("indicator" = String, Path, description = "pou, fies_severe, co, no2, ch4, ntp or agri_workers")
    ),
    responses(
        (status = 200, description = "Map specification", body = ApiResponse<MapSpec>),
        (status = 404, description = "Unknown indicator")
    )
)]
pub async fn get_map(
    State(service): State<Arc<DatasetService>>,
    Path(indicator): Path<String>,
) -> Result<Json<ApiResponse<MapSpec>>> {
    let indicator = Indicator::from_key(&indicator)
        .ok_or_else(|| AppError::NotFound(format!("Unknown indicator '{}'", indicator)))?;

    let map = build_map(&service.provinces(), indicator)
        .ok_or_else(|| AppError::Internal("Province table is empty".to_string()))?;

    Ok(Json(ApiResponse::success(Some(map), None, None)))
}
