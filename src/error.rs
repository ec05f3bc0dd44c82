//! Centralized error type and its translation into HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`. Validation failures, not-found
//! conditions and failures raised by the user service all travel as an
//! [`ApiError`] and are collapsed into a response in exactly one place: the
//! [`IntoResponse`] implementation below.
//!
//! # Response Shape
//!
//! ```json
//! { "error": "User not found", "status": 404 }
//! ```
//!
//! The HTTP status line always carries the same code as the body. An error
//! without an explicit status is reported as `500 Internal Server Error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned when a create request lacks a required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Message returned when a user lookup, update or delete finds nothing.
pub const USER_NOT_FOUND: &str = "User not found";

/// Error carrying a human-readable message and an optional HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: Option<u16>,
}

/// Wire representation of an [`ApiError`].
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl ApiError {
    /// Creates an error without a status code; it is rendered as 500.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Attaches an explicit HTTP status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::BAD_REQUEST.as_u16())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND.as_u16())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
    }

    /// The 400 raised when `username`, `email` or `phoneNumber` is missing.
    pub fn missing_required_fields() -> Self {
        Self::bad_request(MISSING_REQUIRED_FIELDS)
    }

    /// The 404 raised when the user service reports no matching user.
    pub fn user_not_found() -> Self {
        Self::not_found(USER_NOT_FOUND)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Explicit status code, if one was attached.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Status code used on the wire.
    ///
    /// Falls back to 500 when no code was attached or the attached code is
    /// not a valid HTTP status.
    pub fn status_code(&self) -> StatusCode {
        self.status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.message, "Request rejected");
        }

        let body = ErrorBody {
            error: self.message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database error");
        ApiError::internal("Database error")
    }
}
