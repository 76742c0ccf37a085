//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read lookup file {path}: {source}")]
    LookupFileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lookup file {path}: {source}")]
    LookupFileInvalid {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Database pool needs at least one connection")]
    InvalidPoolSize,

    #[error("Sequence backend '{0}' requires its connection settings")]
    SequenceBackendUnconfigured(&'static str),

    #[error("Eligibility age must be greater than zero")]
    InvalidEligibilityAge,

    #[error("Lookup list '{0}' is empty")]
    EmptyLookup(&'static str),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
