//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use skillsnap_config::SecurityConfig;
use skillsnap_core::{Account, SkillSnapError, SkillSnapResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// An issued bearer token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded JWT.
    pub token: String,
    /// Expiration timestamp (unix seconds).
    pub expires_at: i64,
    /// Token type (always "Bearer").
    pub token_type: String,
}

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates a bearer token for an account.
    pub fn generate_token(&self, account: &Account) -> SkillSnapResult<IssuedToken> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_expiration_secs as i64);

        let claims = Claims::new(
            account.id,
            account.email.to_string(),
            account.full_name.clone(),
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SkillSnapError::Internal(format!("Failed to generate token: {e}")))?;

        debug!("Generated token for account {}", account.id);
        Ok(IssuedToken {
            token,
            expires_at: expires_at.timestamp(),
            token_type: "Bearer".to_string(),
        })
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> SkillSnapResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        SkillSnapError::TokenExpired
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        SkillSnapError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        SkillSnapError::InvalidToken("Invalid token issuer".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        SkillSnapError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => SkillSnapError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsnap_core::Email;

    fn create_test_provider() -> TokenProvider {
        let config = SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        };
        TokenProvider::new(Arc::new(config))
    }

    fn test_account() -> Account {
        Account::new(
            Email::new_unchecked("test@example.com"),
            "hash".to_string(),
            "Test User".to_string(),
        )
    }

    #[test]
    fn test_generate_and_validate_token() {
        let provider = create_test_provider();
        let account = test_account();

        let issued = provider.generate_token(&account).unwrap();
        assert_eq!(issued.token_type, "Bearer");

        let claims = provider.validate_token(&issued.token).unwrap();
        assert_eq!(claims.account_id().unwrap(), account.id);
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.name, "Test User");
    }

    #[test]
    fn test_validate_garbage_token() {
        let provider = create_test_provider();
        let result = provider.validate_token("not.a.token");
        assert!(matches!(result, Err(SkillSnapError::InvalidToken(_))));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let provider = create_test_provider();
        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        }));

        let issued = other.generate_token(&test_account()).unwrap();
        assert!(provider.validate_token(&issued.token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let provider = create_test_provider();
        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "someone-else".to_string(),
            jwt_audience: "test-audience".to_string(),
        }));

        let issued = other.generate_token(&test_account()).unwrap();
        let result = provider.validate_token(&issued.token);
        assert!(result.is_err());
    }
}
