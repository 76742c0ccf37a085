//! ListEligibleOrphansHandler - Query handler for orphans awaiting a sponsor.

use std::sync::Arc;

use crate::domain::orphan::{Orphan, OrphanError, OrphanQuery};
use crate::ports::OrphanRepository;

/// Query for active, currently unsponsored orphans in eligibility order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEligibleOrphansQuery {
    /// Restrict to high-priority orphans.
    pub high_priority_only: bool,
}

impl ListEligibleOrphansQuery {
    fn to_orphan_query(self) -> OrphanQuery {
        let query = OrphanQuery::sort_by_eligibility();
        if self.high_priority_only {
            query.high_priority()
        } else {
            query
        }
    }
}

/// Handler listing orphans ready to be matched with a sponsor.
pub struct ListEligibleOrphansHandler {
    orphans: Arc<dyn OrphanRepository>,
}

impl ListEligibleOrphansHandler {
    pub fn new(orphans: Arc<dyn OrphanRepository>) -> Self {
        Self { orphans }
    }

    pub async fn handle(&self, query: ListEligibleOrphansQuery) -> Result<Vec<Orphan>, OrphanError> {
        let orphans = self.orphans.search(&query.to_orphan_query()).await?;
        Ok(orphans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::orphan::{OrphanStatus, Priority, SponsorshipStatus};

    #[tokio::test]
    async fn lists_previously_sponsored_before_unsponsored() {
        let stores = Stores::new();
        let fresh = stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let returning = stores
            .persisted_orphan("Sami", OrphanStatus::Active, SponsorshipStatus::PreviouslySponsored)
            .await;
        stores
            .persisted_orphan("Rami", OrphanStatus::Active, SponsorshipStatus::Sponsored)
            .await;
        stores
            .persisted_orphan("Adel", OrphanStatus::OnHold, SponsorshipStatus::Unsponsored)
            .await;

        let listed = ListEligibleOrphansHandler::new(stores.orphans.clone())
            .handle(ListEligibleOrphansQuery::default())
            .await
            .unwrap();

        let ids: Vec<_> = listed.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![returning.id, fresh.id]);
    }

    #[tokio::test]
    async fn high_priority_filter_narrows_the_list() {
        let stores = Stores::new();
        stores
            .persisted_orphan("Omar", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        let mut urgent = stores
            .persisted_orphan("Sami", OrphanStatus::Active, SponsorshipStatus::Unsponsored)
            .await;
        urgent.priority = Some(Priority::High);
        stores.orphans.update(&urgent).await.unwrap();

        let listed = ListEligibleOrphansHandler::new(stores.orphans.clone())
            .handle(ListEligibleOrphansQuery { high_priority_only: true })
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, urgent.id);
    }
}
