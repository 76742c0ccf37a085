//! Sequence allocator port.
//!
//! Hands out sequence numbers for OSRA numbers, one independent counter per
//! [`SequenceScope`].
//!
//! # Contract
//!
//! - The first number of a scope is 1
//! - Numbers are strictly increasing within a scope and never reused
//! - Allocation is atomic: concurrent callers never receive the same number

use crate::domain::foundation::{DomainError, SequenceScope};
use async_trait::async_trait;

#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Allocate the next number in `scope`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` / `CacheError` if the backing store fails
    async fn next_sequence(&self, scope: &SequenceScope) -> Result<u32, DomainError>;
}
