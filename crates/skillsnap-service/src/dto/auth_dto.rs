//! Authentication-related DTOs.

use serde::{Deserialize, Serialize};
use skillsnap_core::{rules, Account, AccountId};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = rules::password_complexity))]
    pub password: String,

    #[validate(length(min = 1, max = 128, message = "Full name is required"))]
    pub full_name: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Authentication response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountInfo,
}

/// Account info included in auth responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountInfo {
    pub id: AccountId,
    pub email: String,
    pub full_name: String,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.to_string(),
            full_name: account.full_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "Passw0rd".to_string(),
            full_name: "Test User".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "Passw0rd".to_string(),
            full_name: "Test User".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_weak_password() {
        let request = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "password".to_string(), // no uppercase, no digit
            full_name: "Test User".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_requires_password() {
        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
