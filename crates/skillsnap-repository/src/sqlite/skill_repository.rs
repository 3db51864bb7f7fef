//! SQLite skill repository implementation.

use crate::{
    traits::{NewSkill, OwnerSummary, SkillRepository, SkillWithOwner},
    DatabasePool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skillsnap_core::{PortfolioUserId, Skill, SkillId, SkillSnapError, SkillSnapResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite skill repository implementation.
#[derive(Clone)]
pub struct SqliteSkillRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteSkillRepository {
    /// Creates a new SQLite skill repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a skill.
#[derive(Debug, FromRow)]
struct SkillRow {
    id: i64,
    name: String,
    level: String,
    portfolio_user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            id: SkillId::new(row.id),
            name: row.name,
            level: row.level,
            portfolio_user_id: PortfolioUserId::new(row.portfolio_user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Skill row joined with its owner's name.
#[derive(Debug, FromRow)]
struct SkillWithOwnerRow {
    id: i64,
    name: String,
    level: String,
    portfolio_user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
}

impl From<SkillWithOwnerRow> for SkillWithOwner {
    fn from(row: SkillWithOwnerRow) -> Self {
        Self {
            owner: OwnerSummary {
                id: PortfolioUserId::new(row.portfolio_user_id),
                name: row.owner_name,
            },
            skill: Skill {
                id: SkillId::new(row.id),
                name: row.name,
                level: row.level,
                portfolio_user_id: PortfolioUserId::new(row.portfolio_user_id),
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, level, portfolio_user_id, created_at, updated_at";

#[async_trait]
impl SkillRepository for SqliteSkillRepository {
    async fn find_all_with_owner(&self) -> SkillSnapResult<Vec<SkillWithOwner>> {
        debug!("Listing all skills with owner");

        let rows = sqlx::query_as::<_, SkillWithOwnerRow>(
            r#"
            SELECT s.id, s.name, s.level, s.portfolio_user_id,
                   s.created_at, s.updated_at, u.name AS owner_name
            FROM skills s
            JOIN portfolio_users u ON u.id = s.portfolio_user_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(SkillWithOwner::from).collect())
    }

    async fn find_by_id(&self, id: SkillId) -> SkillSnapResult<Option<Skill>> {
        debug!("Finding skill by id: {}", id);

        let row = sqlx::query_as::<_, SkillRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM skills WHERE id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Skill::from))
    }

    async fn find_by_portfolio_user(
        &self,
        portfolio_user_id: PortfolioUserId,
    ) -> SkillSnapResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM skills WHERE portfolio_user_id = ? ORDER BY id"
        ))
        .bind(portfolio_user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn create(&self, skill: &NewSkill) -> SkillSnapResult<Skill> {
        debug!("Creating skill: {}", skill.name);

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO skills (name, level, portfolio_user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.level)
        .bind(skill.portfolio_user_id.into_inner())
        .bind(now)
        .bind(now)
        .execute(self.pool.inner())
        .await?;

        let id = SkillId::new(result.last_insert_rowid());
        self.find_by_id(id)
            .await?
            .ok_or_else(|| SkillSnapError::Internal("Failed to fetch inserted skill".to_string()))
    }

    async fn update(&self, skill: &Skill) -> SkillSnapResult<Skill> {
        debug!("Updating skill: {}", skill.id);

        let result = sqlx::query(
            r#"
            UPDATE skills
            SET name = ?, level = ?, portfolio_user_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.level)
        .bind(skill.portfolio_user_id.into_inner())
        .bind(skill.updated_at)
        .bind(skill.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(SkillSnapError::not_found("Skill", skill.id));
        }

        self.find_by_id(skill.id)
            .await?
            .ok_or_else(|| SkillSnapError::Internal("Failed to fetch updated skill".to_string()))
    }

    async fn delete(&self, id: SkillId) -> SkillSnapResult<bool> {
        debug!("Deleting skill: {}", id);

        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteSkillRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSkillRepository").finish_non_exhaustive()
    }
}
