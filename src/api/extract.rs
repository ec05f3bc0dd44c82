//! Extractors whose failures never escape as plain-text rejections.
//!
//! - [`ApiJson`] reports body decoding failures as a 400 [`ApiError`]
//! - [`LenientQuery`] falls back to `T::default()` on any query string error
//! - [`UserIdPath`] yields `None` for a segment that cannot be a user id

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::{HeaderValue, header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use crate::error::ApiError;

/// Largest request body accepted by [`ApiJson`].
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] with two differences: a missing or blank body
/// is read as `{}`, and malformed bodies, wrong field types and a missing
/// `Content-Type` on a non-empty body turn into a 400 [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            ApiError::bad_request("Failed to read request body")
        })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            parts
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Body::from("{}")
        } else {
            Body::from(bytes)
        };

        match Json::<T>::from_request(Request::from_parts(parts, body), state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(ApiError::bad_request(rejection.body_text()))
            }
        }
    }
}

/// Query string extractor that never rejects.
///
/// Any failure, including a repeated key, yields `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Ignoring malformed query string");
                Ok(Self(T::default()))
            }
        }
    }
}

/// The `{id}` path segment as a user id.
///
/// `None` when the segment is not valid UTF-8 after percent-decoding or is not
/// an integer; such a segment cannot identify a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub Option<i64>);

impl UserIdPath {
    fn parse(raw: &str) -> Self {
        Self(raw.parse().ok())
    }
}

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(Self::parse(&raw)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Unusable user id segment");
                Ok(Self(None))
            }
        }
    }
}
