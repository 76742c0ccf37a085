//! In-memory sequence allocator.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SequenceScope};
use crate::ports::SequenceAllocator;

/// Per-scope counters behind a single mutex; each allocation is one locked
/// read-increment-write.
#[derive(Debug, Clone, Default)]
pub struct InMemorySequenceAllocator {
    counters: Arc<Mutex<HashMap<SequenceScope, u32>>>,
}

impl InMemorySequenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `scope` after `last`, as when importing existing records.
    pub async fn seed(&self, scope: SequenceScope, last: u32) {
        self.counters.lock().await.insert(scope, last);
    }
}

#[async_trait]
impl SequenceAllocator for InMemorySequenceAllocator {
    async fn next_sequence(&self, scope: &SequenceScope) -> Result<u32, DomainError> {
        let mut counters = self.counters.lock().await;
        let counter = counters.entry(scope.clone()).or_insert(0);
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| DomainError::database(format!("Sequence {} exhausted", scope)))?;
        Ok(*counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn scopes_count_independently_from_one() {
        let allocator = InMemorySequenceAllocator::new();
        let ab = SequenceScope::new("orphan:AB");
        let cd = SequenceScope::new("orphan:CD");

        assert_eq!(allocator.next_sequence(&ab).await.unwrap(), 1);
        assert_eq!(allocator.next_sequence(&ab).await.unwrap(), 2);
        assert_eq!(allocator.next_sequence(&cd).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeded_scope_continues_after_seed() {
        let allocator = InMemorySequenceAllocator::new();
        let scope = SequenceScope::new("sponsor:503");
        allocator.seed(scope.clone(), 998).await;

        assert_eq!(allocator.next_sequence(&scope).await.unwrap(), 999);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_allocations_are_unique() {
        let allocator = InMemorySequenceAllocator::new();
        let scope = SequenceScope::new("orphan:AB");

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let allocator = allocator.clone();
                let scope = scope.clone();
                tokio::spawn(async move { allocator.next_sequence(&scope).await.unwrap() })
            })
            .collect();

        let mut seen = HashSet::new();
        for task in tasks {
            assert!(seen.insert(task.await.unwrap()));
        }
        assert_eq!(seen.len(), 50);
        assert_eq!(seen.iter().max(), Some(&50));
    }
}
