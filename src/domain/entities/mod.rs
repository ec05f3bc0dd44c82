//! Core domain entities.
//!
//! Entities are plain data structures with no transport or storage concerns.
//!
//! - [`User`] - A registered user
//! - [`NewUser`] / [`UserPatch`] - Creation input and partial update
//! - [`PaginationParams`] / [`PagedResult`] - Page request and page envelope

pub mod page;
pub mod user;

pub use page::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PagedResult, PaginationParams};
pub use user::{NewUser, User, UserPatch};
