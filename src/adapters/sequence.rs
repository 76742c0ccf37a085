//! Selection of the sequence allocator from configuration.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::{AppConfig, SequenceBackend};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SequenceAllocator;

use super::memory::InMemorySequenceAllocator;
use super::postgres::PostgresSequenceAllocator;
use super::redis::RedisSequenceAllocator;

/// Builds the allocator named by `config.sequence.backend`.
///
/// The Postgres backend shares `pool`; the Redis backend opens its own
/// connection.
pub async fn sequence_allocator(
    config: &AppConfig,
    pool: Option<PgPool>,
) -> Result<Arc<dyn SequenceAllocator>, DomainError> {
    let backend = config.sequence.backend;
    let allocator: Arc<dyn SequenceAllocator> = match backend {
        SequenceBackend::Memory => Arc::new(InMemorySequenceAllocator::new()),
        SequenceBackend::Postgres => {
            let pool = pool.ok_or_else(|| unconfigured(backend))?;
            Arc::new(PostgresSequenceAllocator::new(pool))
        }
        SequenceBackend::Redis => {
            let redis = config.redis.as_ref().ok_or_else(|| unconfigured(backend))?;
            Arc::new(RedisSequenceAllocator::from_config(redis).await?)
        }
    };
    tracing::info!(backend = backend.as_str(), "sequence allocator ready");
    Ok(allocator)
}

fn unconfigured(backend: SequenceBackend) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("Sequence backend '{}' is not configured", backend.as_str()),
    )
}
