//! Authentication service implementation.

use crate::dto::{AccountInfo, AuthResponse, LoginRequest, RegisterRequest};
use async_trait::async_trait;
use skillsnap_config::SecurityConfig;
use skillsnap_core::{Account, Email, SkillSnapError, SkillSnapResult, ValidateExt};
use skillsnap_repository::AccountRepository;
use skillsnap_security::{Claims, PasswordHasher, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account.
    async fn register(&self, request: RegisterRequest) -> SkillSnapResult<AuthResponse>;

    /// Logs an account in.
    async fn login(&self, request: LoginRequest) -> SkillSnapResult<AuthResponse>;

    /// Validates a bearer token and returns its claims.
    async fn validate_token(&self, token: &str) -> SkillSnapResult<Claims>;

    /// Gets the current account from claims.
    async fn get_current_account(&self, claims: &Claims) -> SkillSnapResult<AccountInfo>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl<R: AccountRepository> {
    account_repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
    token_provider: Arc<TokenProvider>,
}

impl<R: AccountRepository> AuthServiceImpl<R> {
    /// Creates a new authentication service.
    pub fn new(
        account_repository: Arc<R>,
        password_hasher: Arc<PasswordHasher>,
        security_config: Arc<SecurityConfig>,
    ) -> Self {
        let token_provider = Arc::new(TokenProvider::new(security_config));
        Self {
            account_repository,
            password_hasher,
            token_provider,
        }
    }

    /// Creates an auth response for an account.
    fn create_auth_response(&self, account: &Account) -> SkillSnapResult<AuthResponse> {
        let issued = self.token_provider.generate_token(account)?;

        Ok(AuthResponse {
            token: issued.token,
            token_type: issued.token_type,
            expires_in: issued.expires_at - chrono::Utc::now().timestamp(),
            account: AccountInfo::from(account),
        })
    }
}

#[async_trait]
impl<R: AccountRepository + 'static> AuthService for AuthServiceImpl<R> {
    async fn register(&self, request: RegisterRequest) -> SkillSnapResult<AuthResponse> {
        debug!("Registering account");

        request.validate_request()?;

        if self.account_repository.exists_by_email(&request.email).await? {
            return Err(SkillSnapError::Conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let email =
            Email::new(&request.email).map_err(|e| SkillSnapError::Validation(e.to_string()))?;
        let password_hash = self.password_hasher.hash(&request.password)?;

        let account = Account::new(email, password_hash, request.full_name);
        let saved = self.account_repository.save(&account).await?;

        info!("Account registered: {}", saved.id);

        self.create_auth_response(&saved)
    }

    async fn login(&self, request: LoginRequest) -> SkillSnapResult<AuthResponse> {
        debug!("Login attempt");

        request.validate_request()?;

        // Unknown email and wrong password produce the same error
        let account = self
            .account_repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                SkillSnapError::InvalidCredentials
            })?;

        if !self
            .password_hasher
            .verify(&request.password, &account.password_hash)?
        {
            warn!("Login failed: invalid password for {}", account.id);
            return Err(SkillSnapError::InvalidCredentials);
        }

        info!("Account logged in: {}", account.id);

        self.create_auth_response(&account)
    }

    async fn validate_token(&self, token: &str) -> SkillSnapResult<Claims> {
        self.token_provider.validate_token(token)
    }

    async fn get_current_account(&self, claims: &Claims) -> SkillSnapResult<AccountInfo> {
        let account_id = claims
            .account_id()
            .ok_or_else(|| SkillSnapError::InvalidToken("Invalid subject".to_string()))?;

        let account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| SkillSnapError::not_found("Account", account_id))?;

        Ok(AccountInfo::from(&account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsnap_core::AccountId;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryAccountRepository {
        accounts: Mutex<HashMap<AccountId, Account>>,
    }

    impl InMemoryAccountRepository {
        fn new() -> Self {
            Self {
                accounts: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl AccountRepository for InMemoryAccountRepository {
        async fn find_by_id(&self, id: AccountId) -> SkillSnapResult<Option<Account>> {
            Ok(self.accounts.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> SkillSnapResult<Option<Account>> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .values()
                .find(|a| a.email.as_str().eq_ignore_ascii_case(email))
                .cloned())
        }

        async fn exists_by_email(&self, email: &str) -> SkillSnapResult<bool> {
            Ok(self.find_by_email(email).await?.is_some())
        }

        async fn save(&self, account: &Account) -> SkillSnapResult<Account> {
            self.accounts
                .lock()
                .unwrap()
                .insert(account.id, account.clone());
            Ok(account.clone())
        }
    }

    fn test_service() -> AuthServiceImpl<InMemoryAccountRepository> {
        let config = SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "test".to_string(),
            jwt_audience: "test-api".to_string(),
        };
        AuthServiceImpl::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(config),
        )
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "new@example.com".to_string(),
            password: "Passw0rd".to_string(),
            full_name: "New User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = test_service();

        let registered = service.register(register_request()).await.unwrap();
        assert_eq!(registered.token_type, "Bearer");
        assert_eq!(registered.account.email, "new@example.com");

        let logged_in = service
            .login(LoginRequest {
                email: "new@example.com".to_string(),
                password: "Passw0rd".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.account.id, registered.account.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let service = test_service();
        service.register(register_request()).await.unwrap();

        let err = service.register(register_request()).await.unwrap_err();
        assert!(matches!(err, SkillSnapError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let service = test_service();
        let mut request = register_request();
        request.password = "short".to_string();

        let err = service.register(request).await.unwrap_err();
        assert!(matches!(err, SkillSnapError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_look_identical() {
        let service = test_service();
        service.register(register_request()).await.unwrap();

        let unknown = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Passw0rd".to_string(),
            })
            .await
            .unwrap_err();
        let wrong = service
            .login(LoginRequest {
                email: "new@example.com".to_string(),
                password: "WrongPass1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(unknown, SkillSnapError::InvalidCredentials));
        assert!(matches!(wrong, SkillSnapError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_current_account_from_token() {
        let service = test_service();
        let registered = service.register(register_request()).await.unwrap();

        let claims = service.validate_token(&registered.token).await.unwrap();
        let current = service.get_current_account(&claims).await.unwrap();
        assert_eq!(current.id, registered.account.id);
        assert_eq!(current.full_name, "New User");
    }

    #[tokio::test]
    async fn test_current_account_missing_is_not_found() {
        let service = test_service();
        let registered = service.register(register_request()).await.unwrap();
        let claims = service.validate_token(&registered.token).await.unwrap();

        // Simulate the account disappearing after the token was issued
        service
            .account_repository
            .accounts
            .lock()
            .unwrap()
            .clear();

        let err = service.get_current_account(&claims).await.unwrap_err();
        assert!(matches!(err, SkillSnapError::NotFound { .. }));
    }
}
