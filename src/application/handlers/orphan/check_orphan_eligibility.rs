//! CheckOrphanEligibilityHandler - Query handler for a single orphan.

use std::sync::Arc;

use crate::domain::foundation::OrphanId;
use crate::domain::orphan::OrphanError;
use crate::ports::OrphanRepository;

#[derive(Debug, Clone, Copy)]
pub struct CheckOrphanEligibilityQuery {
    pub orphan_id: OrphanId,
}

/// Answers whether an orphan can take a new sponsor right now.
///
/// The record is reloaded on every call; a caller's copy may be stale.
pub struct CheckOrphanEligibilityHandler {
    orphans: Arc<dyn OrphanRepository>,
}

impl CheckOrphanEligibilityHandler {
    pub fn new(orphans: Arc<dyn OrphanRepository>) -> Self {
        Self { orphans }
    }

    pub async fn handle(&self, query: CheckOrphanEligibilityQuery) -> Result<bool, OrphanError> {
        let orphan = self
            .orphans
            .find_by_id(&query.orphan_id)
            .await?
            .ok_or(OrphanError::NotFound(query.orphan_id))?;
        Ok(orphan.is_eligible_for_sponsorship())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::orphan::{OrphanStatus, SponsorshipStatus};

    #[tokio::test]
    async fn reflects_the_stored_record() {
        let stores = Stores::new();
        let mut orphan = stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let handler = CheckOrphanEligibilityHandler::new(stores.orphans.clone());
        let query = CheckOrphanEligibilityQuery { orphan_id: orphan.id };

        assert!(handler.handle(query).await.unwrap());

        orphan.sponsorship_status = SponsorshipStatus::Sponsored;
        stores.orphans.update(&orphan).await.unwrap();

        assert!(!handler.handle(query).await.unwrap());
    }

    #[tokio::test]
    async fn inactive_orphans_are_not_eligible() {
        let stores = Stores::new();
        let orphan = stores
            .persisted_orphan("Omar", OrphanStatus::UnderRevision, SponsorshipStatus::Unsponsored)
            .await;

        let eligible = CheckOrphanEligibilityHandler::new(stores.orphans.clone())
            .handle(CheckOrphanEligibilityQuery { orphan_id: orphan.id })
            .await
            .unwrap();

        assert!(!eligible);
    }

    #[tokio::test]
    async fn unknown_orphan_is_not_found() {
        let stores = Stores::new();
        let id = OrphanId::new();

        let err = CheckOrphanEligibilityHandler::new(stores.orphans.clone())
            .handle(CheckOrphanEligibilityQuery { orphan_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, OrphanError::NotFound(id));
    }
}
