//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, PagedResult, PaginationParams, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::ApiError;

/// Service owning the user lifecycle: creation, lookup, listing, partial
/// update and deletion.
///
/// HTTP handlers treat this as their only collaborator. Every failure it
/// returns is an [`ApiError`] that handlers forward unchanged.
pub struct UserService<R: UserRepository + ?Sized = dyn UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Propagates repository failures unchanged.
    pub async fn add(&self, new_user: NewUser) -> Result<User, ApiError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Returns one page of users together with the total count.
    ///
    /// The page and the total come from a single repository call so that
    /// `hasNext` is computed against the same snapshot as `data`.
    pub async fn list(&self, params: PaginationParams) -> Result<PagedResult<User>, ApiError> {
        let (data, total) = self
            .repository
            .list_page(params.offset(), params.limit)
            .await?;

        Ok(PagedResult::new(data, total, params))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        self.repository.find_by_id(id).await
    }

    /// Applies a partial update; fields left as `None` stay unchanged.
    ///
    /// An empty patch is a plain lookup.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no user has the given id.
    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, ApiError> {
        if patch.is_empty() {
            return self.repository.find_by_id(id).await;
        }

        let updated = self.repository.update(id, patch).await?;
        if updated.is_some() {
            tracing::info!(user_id = id, "User updated");
        }
        Ok(updated)
    }

    /// Deletes a user. Returns `false` if no user has the given id.
    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(user_id = id, "User deleted");
        }
        Ok(deleted)
    }

    /// Checks that the underlying storage is reachable.
    pub async fn health_check(&self) -> Result<(), ApiError> {
        self.repository.ping().await
    }
}
