//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::ApiError;
use async_trait::async_trait;

/// Repository interface for storing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - Process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns a 500 [`ApiError`] on storage errors.
    async fn create(&self, new_user: NewUser) -> Result<User, ApiError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;

    /// Returns one page of users ordered by id together with the total count.
    ///
    /// Both values come from the same snapshot of the store.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), ApiError>;

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` when no user has the given id.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, ApiError>;

    /// Removes a user. Returns `false` when no user has the given id.
    async fn delete(&self, id: i64) -> Result<bool, ApiError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), ApiError>;
}
