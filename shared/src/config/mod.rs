//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and password hashing configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load layered configuration: the environment's TOML file (optional),
    /// then `THENETA__*` variables, e.g. `THENETA__AUTH__JWT__SECRET`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let settings = ::config::Config::builder()
            .set_default("environment", environment.to_string())?
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(::config::Environment::with_prefix("THENETA").separator("__"))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings that would make token issuing unsafe or meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid {
                field: "auth.jwt.secret".to_string(),
                reason: "default secret must not be used in production".to_string(),
            });
        }
        if self.auth.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                field: "auth.jwt.access_token_expiry".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.auth.jwt.refresh_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                field: "auth.jwt.refresh_token_expiry".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(4..=31).contains(&self.auth.password.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                field: "auth.password.bcrypt_cost".to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("auth.jwt.secret"));
    }

    #[test]
    fn test_rejects_non_positive_lifetimes() {
        let mut config = AppConfig::default();
        config.auth.jwt.refresh_token_expiry = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "auth.jwt.refresh_token_expiry"
        ));
    }

    #[test]
    fn test_rejects_out_of_range_bcrypt_cost() {
        let mut config = AppConfig::default();
        config.auth.password.bcrypt_cost = 2;
        assert!(config.validate().is_err());
    }
}
