//! OSRA number generation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OsraNumber, OsraNumberFormat};
use crate::ports::SequenceAllocator;

/// Draws the next sequence number for a format's scope and renders it.
///
/// Numbers are generated once per record, on create. Updates never call
/// this, so an assigned number is never regenerated.
#[derive(Clone)]
pub struct OsraNumberGenerator {
    allocator: Arc<dyn SequenceAllocator>,
}

impl OsraNumberGenerator {
    pub fn new(allocator: Arc<dyn SequenceAllocator>) -> Self {
        Self { allocator }
    }

    /// Returns the allocated sequence and the rendered number.
    pub async fn generate<F>(&self, format: &F) -> Result<(u32, OsraNumber), DomainError>
    where
        F: OsraNumberFormat + Sync,
    {
        let scope = format.scope();
        let sequence = self.allocator.next_sequence(&scope).await?;
        let number = format.render(sequence);
        tracing::debug!(scope = %scope, sequence, osra_number = %number, "allocated OSRA number");
        Ok((sequence, number))
    }
}
