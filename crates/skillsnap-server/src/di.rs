//! Dependency wiring for the application.
//!
//! Builds the full object graph explicitly: repositories over the shared
//! database pool, then services over the repositories, cache and security
//! components.

use skillsnap_config::{CacheConfig, SecurityConfig};
use skillsnap_core::{SkillSnapError, SkillSnapResult};
use skillsnap_repository::{
    DatabasePool, SqliteAccountRepository, SqlitePortfolioUserRepository, SqliteProjectRepository,
    SqliteSkillRepository,
};
use skillsnap_rest::{AppState, AuthMiddlewareState};
use skillsnap_security::{PasswordHasher, TokenProvider};
use skillsnap_service::{
    AuthService, AuthServiceImpl, CacheInterface, MemoryCacheService, PortfolioUserService,
    PortfolioUserServiceImpl, ProjectService, ProjectServiceImpl, SkillService, SkillServiceImpl,
};
use std::sync::Arc;

/// Fully wired application components.
pub struct AppModule {
    pub auth_service: Arc<dyn AuthService>,
    pub portfolio_user_service: Arc<dyn PortfolioUserService>,
    pub project_service: Arc<dyn ProjectService>,
    pub skill_service: Arc<dyn SkillService>,
    pub token_provider: Arc<TokenProvider>,
    pub cache: Arc<dyn CacheInterface>,
}

impl AppModule {
    /// Creates the REST application state from the wired services.
    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.auth_service.clone(),
            self.portfolio_user_service.clone(),
            self.project_service.clone(),
            self.skill_service.clone(),
        )
    }

    /// Creates the auth middleware state.
    pub fn auth_middleware_state(&self) -> AuthMiddlewareState {
        AuthMiddlewareState::new(self.token_provider.clone())
    }
}

/// Builder for the application module.
pub struct AppModuleBuilder {
    database_pool: Option<Arc<DatabasePool>>,
    security_config: Option<SecurityConfig>,
    cache_config: Option<CacheConfig>,
}

impl AppModuleBuilder {
    pub fn new() -> Self {
        Self {
            database_pool: None,
            security_config: None,
            cache_config: None,
        }
    }

    pub fn with_database_pool(mut self, pool: Arc<DatabasePool>) -> Self {
        self.database_pool = Some(pool);
        self
    }

    pub fn with_security_config(mut self, config: SecurityConfig) -> Self {
        self.security_config = Some(config);
        self
    }

    pub fn with_cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = Some(config);
        self
    }

    /// Wires the full object graph.
    ///
    /// Missing configuration falls back to defaults; a missing pool is a
    /// startup wiring error.
    pub fn build(self) -> SkillSnapResult<AppModule> {
        let pool = self.database_pool.ok_or_else(|| {
            SkillSnapError::Configuration("database pool is required".to_string())
        })?;
        let security_config = Arc::new(self.security_config.unwrap_or_default());
        let cache_config = self.cache_config.unwrap_or_default();

        let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
        let portfolio_user_repository = Arc::new(SqlitePortfolioUserRepository::new(pool.clone()));
        let project_repository = Arc::new(SqliteProjectRepository::new(pool.clone()));
        let skill_repository = Arc::new(SqliteSkillRepository::new(pool));

        let password_hasher = Arc::new(PasswordHasher::new());
        let token_provider = Arc::new(TokenProvider::new(security_config.clone()));
        let cache: Arc<dyn CacheInterface> =
            Arc::new(MemoryCacheService::from_config(&cache_config));

        let auth_service = Arc::new(AuthServiceImpl::new(
            account_repository,
            password_hasher,
            security_config,
        ));
        let portfolio_user_service = Arc::new(PortfolioUserServiceImpl::new(
            portfolio_user_repository.clone(),
            project_repository.clone(),
            skill_repository.clone(),
        ));
        let project_service = Arc::new(ProjectServiceImpl::new(
            project_repository,
            portfolio_user_repository.clone(),
            cache.clone(),
        ));
        let skill_service = Arc::new(SkillServiceImpl::new(
            skill_repository,
            portfolio_user_repository,
            cache.clone(),
        ));

        Ok(AppModule {
            auth_service,
            portfolio_user_service,
            project_service,
            skill_service,
            token_provider,
            cache,
        })
    }
}

impl Default for AppModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsnap_config::DatabaseConfig;

    async fn memory_pool() -> Arc<DatabasePool> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        };
        let pool = DatabasePool::new(&config).await.unwrap();
        pool.run_migrations().await.unwrap();
        Arc::new(pool)
    }

    #[tokio::test]
    async fn test_build_wires_all_services() {
        let module = AppModuleBuilder::new()
            .with_database_pool(memory_pool().await)
            .with_security_config(SecurityConfig::default())
            .with_cache_config(CacheConfig::default())
            .build()
            .unwrap();

        assert!(module.cache.is_enabled());
        let _ = module.app_state();
        let _ = module.auth_middleware_state();
    }

    #[tokio::test]
    async fn test_build_honors_disabled_cache() {
        let module = AppModuleBuilder::new()
            .with_database_pool(memory_pool().await)
            .with_cache_config(CacheConfig {
                enabled: false,
                ..Default::default()
            })
            .build()
            .unwrap();

        assert!(!module.cache.is_enabled());
    }
}
