//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
