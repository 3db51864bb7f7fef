//! SQLite account repository implementation.

use crate::{traits::AccountRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skillsnap_core::{Account, AccountId, Email, SkillSnapError, SkillSnapResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// SQLite account repository implementation.
#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteAccountRepository {
    /// Creates a new SQLite account repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, FromRow)]
struct AccountRow {
    id: String, // UUID stored as TEXT
    email: String,
    password_hash: String,
    full_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = SkillSnapError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| SkillSnapError::Internal(format!("Invalid UUID in database: {e}")))?;

        Ok(Account {
            id: AccountId::from_uuid(id),
            email: Email::new_unchecked(row.email),
            password_hash: row.password_hash,
            full_name: row.full_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn find_by_id(&self, id: AccountId) -> SkillSnapResult<Option<Account>> {
        debug!("Finding account by id: {}", id);

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, full_name, created_at, updated_at
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> SkillSnapResult<Option<Account>> {
        debug!("Finding account by email");

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, full_name, created_at, updated_at
            FROM accounts
            WHERE LOWER(email) = LOWER(?)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> SkillSnapResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM accounts WHERE LOWER(email) = LOWER(?) LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn save(&self, account: &Account) -> SkillSnapResult<Account> {
        debug!("Saving new account: {}", account.id);

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, full_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.into_inner().to_string())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.full_name)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(account.id)
            .await?
            .ok_or_else(|| SkillSnapError::Internal("Failed to fetch inserted account".to_string()))
    }
}

impl std::fmt::Debug for SqliteAccountRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteAccountRepository").finish_non_exhaustive()
    }
}
