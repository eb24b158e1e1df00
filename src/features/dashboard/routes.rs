use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create public dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        // Browser page
        .route("/", get(handlers::index))
        // JSON views
        .route("/api/dashboard/view", get(handlers::get_view))
        .route("/api/dashboard/menu", get(handlers::get_menu))
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatasetConfig;
    use crate::features::dataset::DatasetService;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        let dataset = Arc::new(DatasetService::new(DatasetConfig {
            seed: Some(99),
            ..DatasetConfig::default()
        }));
        TestServer::new(routes(Arc::new(DashboardService::new(dataset)))).unwrap()
    }

    #[tokio::test]
    async fn test_view_defaults_to_overview() {
        let response = server().get("/api/dashboard/view").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["category"], "overview");
        assert_eq!(body["data"]["sections"][0]["kind"], "metrics");
    }

    #[tokio::test]
    async fn test_view_greenhouse_gas() {
        let response = server()
            .get("/api/dashboard/view")
            .add_query_param("category", "greenhouse")
            .add_query_param("gas", "no2")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["selection"]["gas"], "no2");
        assert_eq!(body["data"]["sections"][0]["map"]["indicator"], "no2");
        assert_eq!(body["data"]["sections"][1]["chart"]["type"], "bar");
    }

    #[tokio::test]
    async fn test_view_trend_without_provinces_only_warns() {
        let response = server()
            .get("/api/dashboard/view")
            .add_query_param("category", "trend")
            .add_query_param("provinces", "")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let sections = body["data"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0]["kind"], "warning");
    }

    #[tokio::test]
    async fn test_view_rejects_unknown_values() {
        let response = server()
            .get("/api/dashboard/view")
            .add_query_param("category", "weather")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server()
            .get("/api/dashboard/view")
            .add_query_param("category", "trend")
            .add_query_param("provinces", "Aceh,Jawa Barat")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_menu() {
        let response = server().get("/api/dashboard/menu").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["categories"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["default_provinces"][0], "Aceh");
    }

    #[tokio::test]
    async fn test_html_page_renders() {
        let response = server()
            .get("/")
            .add_query_param("category", "employment")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Dashboard Monitoring Indikator Pulau Sumatera"));
        assert!(html.contains("👨‍🌾 Monitoring Ketenagakerjaan"));
        assert!(html.contains("data-map=\"map-1\""));
        assert!(html.contains("data-chart="));
    }

    #[tokio::test]
    async fn test_html_trend_page_lists_provinces() {
        let response = server().get("/").add_query_param("category", "trend").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("name=\"provinces\""));
        assert!(html.contains("Bangka Belitung"));
    }
}
