//! Error envelope for the QA API.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use brain_core::BrainError;
use thiserror::Error;

/// Errors returned by the QA API handlers.
///
/// Every variant renders as HTTP 200 with `{"status": "error", "message": ...}`;
/// callers tell failures apart from answers by the `status` field.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Model or tool failure.
    #[error(transparent)]
    Brain(#[from] BrainError),

    /// Missing or malformed request parameters.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Brain(err) => tracing::error!("Request failed: {}", err),
            ApiError::InvalidRequest(msg) => tracing::warn!("Invalid request: {}", msg),
        }

        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string()
        });

        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
