//! Redis-backed sequence allocator for multi-server deployments.
//!
//! Each scope is a Redis integer key advanced with INCR, which is atomic on
//! the server. A missing key counts as 0, so the first number is 1.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::config::RedisConfig;
use crate::domain::foundation::{DomainError, ErrorCode, SequenceScope};
use crate::ports::SequenceAllocator;

const DEFAULT_KEY_PREFIX: &str = "osra:sequence";

#[derive(Clone)]
pub struct RedisSequenceAllocator {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisSequenceAllocator {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(cache_error)?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(cache_error)?;
        Ok(Self::new(conn))
    }

    /// Connects within the configured timeout and applies the key prefix.
    pub async fn from_config(config: &RedisConfig) -> Result<Self, DomainError> {
        let allocator = tokio::time::timeout(config.timeout(), Self::connect(&config.url))
            .await
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::CacheError,
                    format!("Timed out connecting to Redis after {:?}", config.timeout()),
                )
            })??;
        Ok(allocator.with_key_prefix(config.key_prefix.clone()))
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    fn key_for(&self, scope: &SequenceScope) -> String {
        sequence_key(&self.key_prefix, scope)
    }
}

fn sequence_key(prefix: &str, scope: &SequenceScope) -> String {
    format!("{}:{}", prefix, scope)
}

fn cache_error(e: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Redis sequence error: {}", e))
}

#[async_trait]
impl SequenceAllocator for RedisSequenceAllocator {
    async fn next_sequence(&self, scope: &SequenceScope) -> Result<u32, DomainError> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.incr(self.key_for(scope), 1_i64).await.map_err(cache_error)?;
        u32::try_from(value).map_err(|_| {
            DomainError::new(
                ErrorCode::CacheError,
                format!("Sequence {} out of range: {}", scope, value),
            )
        })
    }
}
