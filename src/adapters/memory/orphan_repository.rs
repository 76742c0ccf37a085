//! In-memory orphan repository.
//!
//! Records are kept in insertion order, which is the "store order" of
//! unordered searches. Identity and OSRA number uniqueness are enforced on
//! save the way a unique index would.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrphanId};
use crate::domain::orphan::{Orphan, OrphanIdentity, OrphanQuery};
use crate::ports::OrphanRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryOrphanRepository {
    pub(super) orphans: Arc<RwLock<Vec<Orphan>>>,
}

impl InMemoryOrphanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orphans.
    pub async fn len(&self) -> usize {
        self.orphans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orphans.read().await.is_empty()
    }
}

fn conflicts(stored: &Orphan, candidate: &Orphan) -> Option<DomainError> {
    if stored.id != candidate.id && stored.identity() == candidate.identity() {
        return Some(DomainError::new(
            ErrorCode::DuplicateOrphan,
            format!("Orphan identity already stored as {}", stored.id),
        ));
    }
    match (&stored.osra_number, &candidate.osra_number) {
        (Some(a), Some(b)) if stored.id != candidate.id && a == b => Some(DomainError::new(
            ErrorCode::OsraNumberConflict,
            format!("OSRA number {} already stored", b),
        )),
        _ => None,
    }
}

#[async_trait]
impl OrphanRepository for InMemoryOrphanRepository {
    async fn save(&self, orphan: &Orphan) -> Result<(), DomainError> {
        let mut orphans = self.orphans.write().await;
        if orphans.iter().any(|o| o.id == orphan.id) {
            return Err(DomainError::database(format!("Orphan {} already saved", orphan.id)));
        }
        if let Some(err) = orphans.iter().find_map(|o| conflicts(o, orphan)) {
            return Err(err);
        }
        orphans.push(orphan.clone());
        Ok(())
    }

    async fn update(&self, orphan: &Orphan) -> Result<(), DomainError> {
        let mut orphans = self.orphans.write().await;
        if let Some(err) = orphans.iter().find_map(|o| conflicts(o, orphan)) {
            return Err(err);
        }
        let slot = orphans
            .iter_mut()
            .find(|o| o.id == orphan.id)
            .ok_or_else(|| DomainError::new(ErrorCode::OrphanNotFound, "Orphan not found"))?;
        *slot = orphan.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &OrphanId) -> Result<Option<Orphan>, DomainError> {
        let orphans = self.orphans.read().await;
        Ok(orphans.iter().find(|o| &o.id == id).cloned())
    }

    async fn identity_taken(
        &self,
        identity: &OrphanIdentity,
        excluding: Option<&OrphanId>,
    ) -> Result<bool, DomainError> {
        let orphans = self.orphans.read().await;
        Ok(orphans
            .iter()
            .any(|o| Some(&o.id) != excluding && &o.identity() == identity))
    }

    async fn search(&self, query: &OrphanQuery) -> Result<Vec<Orphan>, DomainError> {
        let orphans = self.orphans.read().await;
        Ok(query.apply(orphans.iter().cloned()))
    }
}
