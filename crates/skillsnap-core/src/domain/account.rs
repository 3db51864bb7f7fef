//! Auth account entity.

use crate::{AccountId, Email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account entity representing an authenticated identity.
///
/// Accounts can log in and manage portfolio content; they are distinct from
/// [`PortfolioUser`](crate::PortfolioUser) records, which are the displayed
/// portfolio profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account.
    pub id: AccountId,

    /// Account email address (unique, used as the login identifier).
    pub email: Email,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name of the account holder.
    pub full_name: String,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with the given details.
    #[must_use]
    pub fn new(email: Email, password_hash: String, full_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            email,
            password_hash,
            full_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the account's password hash.
    pub fn update_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
