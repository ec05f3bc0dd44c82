//! PostgreSQL implementation of the user repository.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::ApiError;

/// Row shape shared by every query returning a user.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(
            r.id,
            r.username,
            r.email,
            r.phone_number,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for users.
///
/// Ids come from the `BIGSERIAL` primary key of the `users` table.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations under `./migrations`.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .context("Failed to apply migrations")
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, ApiError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, phone_number)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, phone_number, created_at, updated_at
            "#,
        )
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.phone_number)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, phone_number, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), ApiError> {
        let mut tx = self.pool.begin().await?;

        // Page and total must describe the same snapshot.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, phone_number, created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((rows.into_iter().map(User::from).collect(), total))
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, ApiError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                username     = COALESCE($2::TEXT, username),
                email        = COALESCE($3::TEXT, email),
                phone_number = COALESCE($4::TEXT, phone_number),
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, username, email, phone_number, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.username)
        .bind(patch.email)
        .bind(patch.phone_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
