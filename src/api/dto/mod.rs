//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! are checked with `validator` where the API demands presence checks.

pub mod health;
pub mod pagination;
pub mod user;
