//! PostgreSQL settings for the stores and the `postgres` sequence backend.
//!
//! The section is optional: without a URL the process runs on the
//! in-memory adapters.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` URL. Unset or empty means no database.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection. Sequence allocation holds
    /// a connection only for one upsert, so waits stay short.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply the bundled schema when the pool opens.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// The configured URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Checks the URL scheme and pool size. An absent URL is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(url) = self.url() else {
            return Ok(());
        };
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn no_url_means_in_memory_and_is_valid() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url(), None);
        assert!(config.validate().is_ok());
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn blank_url_counts_as_unset() {
        assert_eq!(with_url("  ").url(), None);
    }

    #[test]
    fn url_must_be_postgres() {
        assert_eq!(
            with_url("mysql://localhost/osra").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
        assert!(with_url("postgres://osra@localhost/osra").validate().is_ok());
    }

    #[test]
    fn pool_needs_a_connection() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..with_url("postgresql://osra@localhost/osra")
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPoolSize));
    }
}
