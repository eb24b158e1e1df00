use axum::{extract::State, response::Html, Json};
use minijinja::context;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::constants::{DASHBOARD_FOOTER, DASHBOARD_SUBTITLE, DASHBOARD_TITLE};
use crate::shared::templates::render_template;
use crate::shared::types::ApiResponse;

// ============================================================================
// JSON
// ============================================================================

/// Compose the dashboard page for a sidebar selection
#[utoipa::path(
    get,
    path = "/api/dashboard/view",
    tag = "Dashboard",
    params(MenuSelection),
    responses(
        (status = 200, description = "Composed page sections", body = ApiResponse<DashboardPage>),
        (status = 400, description = "Unknown option or province")
    )
)]
pub async fn get_view(
    State(service): State<Arc<DashboardService>>,
    AppQuery(selection): AppQuery<MenuSelection>,
) -> Result<Json<ApiResponse<DashboardPage>>> {
    let page = service.render(&selection)?;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

/// Sidebar options
#[utoipa::path(
    get,
    path = "/api/dashboard/menu",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Menu options", body = ApiResponse<MenuOptions>)
    )
)]
pub async fn get_menu(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<MenuOptions>>> {
    Ok(Json(ApiResponse::success(Some(service.menu()), None, None)))
}

// ============================================================================
// HTML
// ============================================================================

/// Render the dashboard as a full HTML page
pub async fn index(
    State(service): State<Arc<DashboardService>>,
    AppQuery(selection): AppQuery<MenuSelection>,
) -> Result<Html<String>> {
    let page = service.render(&selection)?;
    let menu = service.menu();

    let html = render_template(
        "dashboard/page.html.jinja",
        context! {
            title => DASHBOARD_TITLE,
            subtitle => DASHBOARD_SUBTITLE,
            footer => DASHBOARD_FOOTER,
            page => page,
            menu => menu,
        },
    )?;

    Ok(Html(html))
}
