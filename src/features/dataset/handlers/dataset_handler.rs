use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::dataset::dtos::{parse_province_list, TimeSeriesQuery};
use crate::features::dataset::models::{ProvinceRecord, TimeSeries};
use crate::features::dataset::services::DatasetService;
use crate::shared::types::{ApiResponse, Meta};

/// List the synthetic per-province indicator table
#[utoipa::path(
    get,
    path = "/api/dataset/provinces",
    tag = "Dataset",
    responses(
        (status = 200, description = "Province indicator table", body = ApiResponse<Vec<ProvinceRecord>>)
    )
)]
pub async fn list_provinces(
    State(service): State<Arc<DatasetService>>,
) -> Result<Json<ApiResponse<Vec<ProvinceRecord>>>> {
    let table = service.provinces();
    let total = table.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(table.records.clone()),
        None,
        Some(Meta { total }),
    )))
}

/// Daily trend series for a set of provinces
#[utoipa::path(
    get,
    path = "/api/dataset/time-series",
    tag = "Dataset",
    params(TimeSeriesQuery),
    responses(
        (status = 200, description = "Trend series, date-major", body = ApiResponse<TimeSeries>),
        (status = 400, description = "Empty or unknown province list, or days out of range")
    )
)]
pub async fn get_time_series(
    State(service): State<Arc<DatasetService>>,
    AppQuery(query): AppQuery<TimeSeriesQuery>,
) -> Result<Json<ApiResponse<TimeSeries>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provinces = match query.provinces.as_deref() {
        Some(raw) => parse_province_list(raw),
        None => service.provinces().names(),
    };
    let days = query.days.unwrap_or(service.config().trend_days);

    let series = service.time_series(&provinces, days).await?;
    tracing::debug!(
        "Serving time series {:?}..{:?} for {} province(s)",
        series.first_date(),
        series.last_date(),
        series.provinces.len()
    );
    let total = series.records.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(series.as_ref().clone()),
        None,
        Some(Meta { total }),
    )))
}
