use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::templates::TemplateError;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Template(TemplateError::NotFound("page.jinja".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
