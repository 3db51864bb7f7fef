//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skillsnap_core::AccountId;
use uuid::Uuid;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID).
    pub sub: String,

    /// Account email.
    pub email: String,

    /// Account display name.
    pub name: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an account.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        email: String,
        name: String,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: account_id.to_string(),
            email,
            name,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer,
            aud: audience,
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// Returns the account ID, if the subject parses as one.
    #[must_use]
    pub fn account_id(&self) -> Option<AccountId> {
        AccountId::parse(&self.sub).ok()
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_claims(expires_at: DateTime<Utc>) -> Claims {
        Claims::new(
            AccountId::new(),
            "test@example.com".to_string(),
            "Test User".to_string(),
            "skillsnap".to_string(),
            "skillsnap-api".to_string(),
            expires_at,
        )
    }

    #[test]
    fn test_claims_round_trip_account_id() {
        let claims = sample_claims(Utc::now() + Duration::hours(1));
        let id = claims.account_id().unwrap();
        assert_eq!(id.to_string(), claims.sub);
    }

    #[test]
    fn test_claims_expiry() {
        let valid = sample_claims(Utc::now() + Duration::hours(1));
        assert!(!valid.is_expired());

        let expired = sample_claims(Utc::now() - Duration::hours(1));
        assert!(expired.is_expired());
    }

    #[test]
    fn test_claims_have_unique_jti() {
        let now = Utc::now() + Duration::hours(1);
        let a = sample_claims(now);
        let b = sample_claims(now);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_invalid_subject_yields_no_account_id() {
        let mut claims = sample_claims(Utc::now() + Duration::hours(1));
        claims.sub = "not-a-uuid".to_string();
        assert!(claims.account_id().is_none());
    }
}
