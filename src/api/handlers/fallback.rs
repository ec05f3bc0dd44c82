//! Handlers for requests no route accepts.

use axum::http::StatusCode;

use crate::error::ApiError;

/// Answers requests for unknown paths.
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Not found")
}

/// Answers requests whose path exists but whose method is not routed.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::new("Method not allowed").with_status(StatusCode::METHOD_NOT_ALLOWED.as_u16())
}
