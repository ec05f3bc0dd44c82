//! Process-local user storage.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::ApiError;

#[derive(Default)]
struct Store {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// A user repository kept entirely in memory.
///
/// Used when no `DATABASE_URL` is configured and by the HTTP test suite.
/// Ids start at 1 and are never reused; listing is in id order.
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        debug!("Using in-memory user storage");
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, ApiError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let now = Utc::now();
        let user = User::new(
            store.next_id,
            new_user.username,
            new_user.email,
            new_user.phone_number,
            now,
            now,
        );
        store.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), ApiError> {
        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        let store = self.store.read().await;
        let data = store.users.values().skip(skip).take(take).cloned().collect();
        let total = i64::try_from(store.users.len()).unwrap_or(i64::MAX);

        Ok((data, total))
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, ApiError> {
        let mut store = self.store.write().await;
        let Some(user) = store.users.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(user);
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.store.write().await.users.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            phone_number: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("first")).await.unwrap();
        let second = repo.create(new_user("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let (_, total) = repo.list_page(0, 10).await.unwrap();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("first")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(new_user("second")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.create(new_user(&format!("user{i}"))).await.unwrap();
        }

        let (page, total) = repo.list_page(2, 2).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(total, 5);

        let (beyond, total) = repo.list_page(10, 2).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_list_page_total_matches_data_under_concurrent_writes() {
        let repo = std::sync::Arc::new(InMemoryUserRepository::new());

        let writer = {
            let repo = repo.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    repo.create(new_user(&format!("user{i}"))).await.unwrap();
                }
            })
        };

        for _ in 0..50 {
            let (data, total) = repo.list_page(0, 1000).await.unwrap();
            assert_eq!(data.len() as i64, total);
            tokio::task::yield_now().await;
        }

        writer.await.unwrap();

        let (data, total) = repo.list_page(0, 1000).await.unwrap();
        assert_eq!(total, 200);
        assert_eq!(data.len(), 200);
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_none() {
        let repo = InMemoryUserRepository::new();

        let patch = UserPatch {
            username: Some("ghost".to_string()),
            ..Default::default()
        };

        assert!(repo.update(1, patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_unspecified_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("alice")).await.unwrap();

        let patch = UserPatch {
            phone_number: Some("5550100".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "alice@example.com");
        assert_eq!(updated.phone_number, "5550100");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_missing_user_returns_false() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }
}
