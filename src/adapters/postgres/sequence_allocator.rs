//! PostgreSQL sequence allocator.
//!
//! A single upsert both creates a scope's counter (starting at 1) and
//! advances it; the row lock taken by `ON CONFLICT DO UPDATE` serializes
//! concurrent allocations in the same scope.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, SequenceScope};
use crate::ports::SequenceAllocator;

use super::read_error;

const NEXT_SEQUENCE_SQL: &str = r#"
    INSERT INTO osra_sequences (scope, last_value) VALUES ($1, 1)
    ON CONFLICT (scope) DO UPDATE SET last_value = osra_sequences.last_value + 1
    RETURNING last_value
"#;

pub struct PostgresSequenceAllocator {
    pool: PgPool,
}

impl PostgresSequenceAllocator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceAllocator for PostgresSequenceAllocator {
    async fn next_sequence(&self, scope: &SequenceScope) -> Result<u32, DomainError> {
        let value: i32 = sqlx::query_scalar(NEXT_SEQUENCE_SQL)
            .bind(scope.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(e, "allocate sequence"))?;

        tracing::debug!(scope = %scope, sequence = value, "allocated sequence");

        u32::try_from(value)
            .map_err(|_| DomainError::database(format!("Sequence {} out of range: {}", scope, value)))
    }
}
