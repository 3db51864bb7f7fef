//! SQLite portfolio user repository implementation.

use crate::{
    traits::{NewPortfolioUser, PortfolioUserRepository},
    DatabasePool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skillsnap_core::{PortfolioUser, PortfolioUserId, SkillSnapError, SkillSnapResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite portfolio user repository implementation.
#[derive(Clone)]
pub struct SqlitePortfolioUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqlitePortfolioUserRepository {
    /// Creates a new SQLite portfolio user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a portfolio user.
#[derive(Debug, FromRow)]
struct PortfolioUserRow {
    id: i64,
    name: String,
    bio: String,
    profile_image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PortfolioUserRow> for PortfolioUser {
    fn from(row: PortfolioUserRow) -> Self {
        Self {
            id: PortfolioUserId::new(row.id),
            name: row.name,
            bio: row.bio,
            profile_image_url: row.profile_image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, bio, profile_image_url, created_at, updated_at";

#[async_trait]
impl PortfolioUserRepository for SqlitePortfolioUserRepository {
    async fn find_all(&self) -> SkillSnapResult<Vec<PortfolioUser>> {
        debug!("Listing all portfolio users");

        let rows = sqlx::query_as::<_, PortfolioUserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM portfolio_users ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(PortfolioUser::from).collect())
    }

    async fn find_by_id(&self, id: PortfolioUserId) -> SkillSnapResult<Option<PortfolioUser>> {
        debug!("Finding portfolio user by id: {}", id);

        let row = sqlx::query_as::<_, PortfolioUserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM portfolio_users WHERE id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(PortfolioUser::from))
    }

    async fn exists(&self, id: PortfolioUserId) -> SkillSnapResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM portfolio_users WHERE id = ? LIMIT 1")
                .bind(id.into_inner())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn create(&self, user: &NewPortfolioUser) -> SkillSnapResult<PortfolioUser> {
        debug!("Creating portfolio user: {}", user.name);

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO portfolio_users (name, bio, profile_image_url, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.bio)
        .bind(&user.profile_image_url)
        .bind(now)
        .bind(now)
        .execute(self.pool.inner())
        .await?;

        let id = PortfolioUserId::new(result.last_insert_rowid());
        self.find_by_id(id).await?.ok_or_else(|| {
            SkillSnapError::Internal("Failed to fetch inserted portfolio user".to_string())
        })
    }

    async fn update(&self, user: &PortfolioUser) -> SkillSnapResult<PortfolioUser> {
        debug!("Updating portfolio user: {}", user.id);

        let result = sqlx::query(
            r#"
            UPDATE portfolio_users
            SET name = ?, bio = ?, profile_image_url = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.bio)
        .bind(&user.profile_image_url)
        .bind(user.updated_at)
        .bind(user.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(SkillSnapError::not_found("PortfolioUser", user.id));
        }

        self.find_by_id(user.id).await?.ok_or_else(|| {
            SkillSnapError::Internal("Failed to fetch updated portfolio user".to_string())
        })
    }

    async fn delete(&self, id: PortfolioUserId) -> SkillSnapResult<bool> {
        debug!("Deleting portfolio user: {}", id);

        let result = sqlx::query("DELETE FROM portfolio_users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqlitePortfolioUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePortfolioUserRepository").finish_non_exhaustive()
    }
}
