//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use skillsnap_core::SkillSnapError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads configuration from layered file and environment sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Sources are applied in order, later ones overriding earlier ones:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `SKILLSNAP_` prefix
    pub fn load(config_dir: &str) -> Result<AppConfig, SkillSnapError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("SKILLSNAP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{config_dir}/default.toml");
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{config_dir}/{environment}.toml");
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{config_dir}/local.toml");
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (SKILLSNAP_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("SKILLSNAP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_skillsnap_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_skillsnap_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, SkillSnapError> {
        Self::load("./config")
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), SkillSnapError> {
        // Warn about default JWT secret in production
        if config.app.environment == "production"
            && config.security.jwt_secret == "change-me-in-production"
        {
            warn!("Using default JWT secret in production! This is a security risk.");
        }

        if config.database.url.is_empty() {
            return Err(SkillSnapError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.security.jwt_secret.is_empty() {
            return Err(SkillSnapError::Configuration(
                "JWT secret is required".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_skillsnap_error(err: ConfigError) -> SkillSnapError {
    SkillSnapError::Configuration(err.to_string())
}
