//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into user service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors reporting rejections as API errors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
