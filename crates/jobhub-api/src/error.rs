//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use jobhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype over [`AppError`] so the HTTP mapping can live in this crate
/// (the orphan rule forbids `impl IntoResponse for AppError` directly).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = match &err.kind {
            ErrorKind::InvalidQuery
            | ErrorKind::InvalidName
            | ErrorKind::InvalidDateRange
            | ErrorKind::EmployeeNotFound => StatusCode::BAD_REQUEST,
            ErrorKind::Lookup => {
                tracing::error!(error = %err.message, "Employee directory lookup failed");
                StatusCode::BAD_GATEWAY
            }
            ErrorKind::Storage => {
                tracing::error!(error = %err.message, "Storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}
