//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `OSRA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use osra::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Orphans join before age {}", config.rules.age_of_eligibility_to_join);
//! ```

mod database;
mod error;
mod logging;
mod lookup;
mod redis;
mod rules;
mod sequence;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use redis::RedisConfig;
pub use rules::RulesConfig;
pub use sequence::{SequenceBackend, SequenceConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection; required unless every backend is in memory
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis connection for the Redis sequence backend
    #[serde(default)]
    pub redis: Option<RedisConfig>,

    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Age and gestation thresholds
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `OSRA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `OSRA__DATABASE__URL=...` -> `database.url = ...`
    /// - `OSRA__RULES__AGE_OF_ELIGIBILITY_TO_JOIN=18` -> `rules.age_of_eligibility_to_join = 18`
    /// - `OSRA__LOOKUP__GENDERS=Male,Female` -> `lookup.genders = ["Male", "Female"]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("OSRA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("lookup.genders")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The database section is only required when a Postgres backend is
    /// selected or a URL is given; Redis only for the Redis backend.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.sequence.backend {
            SequenceBackend::Postgres if self.database.url().is_none() => {
                return Err(ValidationError::SequenceBackendUnconfigured("postgres"));
            }
            SequenceBackend::Redis => match &self.redis {
                Some(redis) => redis.validate()?,
                None => return Err(ValidationError::SequenceBackendUnconfigured("redis")),
            },
            _ => {}
        }
        self.database.validate()?;
        self.rules.validate()?;
        self.lookup.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 8] = [
        "OSRA__DATABASE__URL",
        "OSRA__REDIS__URL",
        "OSRA__SEQUENCE__BACKEND",
        "OSRA__RULES__AGE_OF_ELIGIBILITY_TO_JOIN",
        "OSRA__RULES__VALID_GESTATION_YEARS",
        "OSRA__LOOKUP__GENDERS",
        "OSRA__LOGGING__LEVEL",
        "OSRA__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.sequence.backend, SequenceBackend::Memory);
        assert_eq!(config.rules.age_of_eligibility_to_join, 22);
        assert_eq!(config.rules.valid_gestation_years, 1);
        assert_eq!(config.lookup.genders, vec!["Male", "Female"]);
        assert_eq!(config.logging.level, "info");
        assert!(config.redis.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OSRA__DATABASE__URL", "postgresql://osra@localhost/osra");
        env::set_var("OSRA__SEQUENCE__BACKEND", "postgres");
        env::set_var("OSRA__RULES__AGE_OF_ELIGIBILITY_TO_JOIN", "18");
        env::set_var("OSRA__LOOKUP__GENDERS", "Female,Male");
        env::set_var("OSRA__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url(), Some("postgresql://osra@localhost/osra"));
        assert_eq!(config.sequence.backend, SequenceBackend::Postgres);
        assert_eq!(config.rules.policy().age_of_eligibility_to_join, 18);
        assert_eq!(config.lookup.genders, vec!["Female", "Male"]);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_backend_requires_redis_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OSRA__SEQUENCE__BACKEND", "redis");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::SequenceBackendUnconfigured("redis"))
        );
    }

    #[test]
    fn test_redis_backend_with_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OSRA__SEQUENCE__BACKEND", "redis");
        env::set_var("OSRA__REDIS__URL", "redis://localhost:6379");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.redis.unwrap().key_prefix, "osra:sequence");
    }

    #[test]
    fn test_postgres_backend_requires_database_url() {
        let config = AppConfig {
            sequence: SequenceConfig {
                backend: SequenceBackend::Postgres,
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::SequenceBackendUnconfigured("postgres"))
        );
    }
}
