use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dataset::DatasetService;
use crate::features::maps::handlers;

/// Create public map routes
pub fn routes(dataset_service: Arc<DatasetService>) -> Router {
    Router::new()
        .route("/api/maps/{indicator}", get(handlers::get_map))
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
            seed: Some(5),
            ..DatasetConfig::default()
        }));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_map_for_each_indicator() {
        let server = server();
        for key in ["pou", "fies_severe", "co", "no2", "ch4", "ntp", "agri_workers"] {
            let response = server.get(&format!("/api/maps/{}", key)).await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["data"]["indicator"], key);
            assert_eq!(body["data"]["markers"].as_array().unwrap().len(), 10);
            assert_eq!(body["data"]["zoom"], 6);
        }
    }

    #[tokio::test]
    async fn test_unknown_indicator_is_not_found() {
        let response = server().get("/api/maps/ozone").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
