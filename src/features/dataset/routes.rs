use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dataset::handlers;
use crate::features::dataset::services::DatasetService;

/// Create public dataset routes
pub fn routes(dataset_service: Arc<DatasetService>) -> Router {
    Router::new()
        .route("/api/dataset/provinces", get(handlers::list_provinces))
        .route("/api/dataset/time-series", get(handlers::get_time_series))
        .with_state(dataset_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatasetConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        let service = Arc::new(DatasetService::new(DatasetConfig {
            seed: Some(17),
            ..DatasetConfig::default()
        }));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_provinces() {
        let response = server().get("/api/dataset/provinces").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(body["meta"]["total"], 10);
    }

    #[tokio::test]
    async fn test_time_series_for_subset() {
        let response = server()
            .get("/api/dataset/time-series")
            .add_query_param("provinces", "Aceh,Riau")
            .add_query_param("days", 5)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["days"], 5);
        assert_eq!(body["data"]["records"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_time_series_rejects_unknown_province() {
        let response = server()
            .get("/api/dataset/time-series")
            .add_query_param("provinces", "Atlantis")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_time_series_rejects_empty_province_list() {
        let response = server()
            .get("/api/dataset/time-series")
            .add_query_param("provinces", "")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_time_series_rejects_bad_days() {
        let response = server()
            .get("/api/dataset/time-series")
            .add_query_param("days", 0)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server()
            .get("/api/dataset/time-series")
            .add_query_param("days", "many")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
