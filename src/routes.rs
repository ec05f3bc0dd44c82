//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (storage)
//! - `/users/*`      - User CRUD API
//!
//! Unknown paths and unsupported methods answer with the standard JSON error
//! body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes, fallbacks and tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::user_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/users/` and `/users` route identically.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
