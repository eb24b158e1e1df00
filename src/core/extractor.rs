use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Query string extractor that reports malformed selections through the
/// standard error envelope instead of axum's plain-text rejection.
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            QueryRejection::FailedToDeserializeQueryString(err) => {
                format!("Invalid query parameters: {}", err.body_text())
            }
            _ => "Failed to parse query string".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
