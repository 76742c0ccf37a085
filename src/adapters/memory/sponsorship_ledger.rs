//! In-memory sponsorship ledger.
//!
//! Shares state with an [`InMemoryOrphanRepository`] and an
//! [`InMemorySponsorshipRepository`]. Both write locks are held for the
//! whole operation, always orphans first.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::orphan::SponsorshipStatus;
use crate::domain::sponsorship::Sponsorship;
use crate::ports::SponsorshipLedger;

use super::{InMemoryOrphanRepository, InMemorySponsorshipRepository};

#[derive(Debug, Clone)]
pub struct InMemorySponsorshipLedger {
    orphans: InMemoryOrphanRepository,
    sponsorships: InMemorySponsorshipRepository,
}

impl InMemorySponsorshipLedger {
    pub fn new(orphans: InMemoryOrphanRepository, sponsorships: InMemorySponsorshipRepository) -> Self {
        Self { orphans, sponsorships }
    }
}

#[async_trait]
impl SponsorshipLedger for InMemorySponsorshipLedger {
    async fn record_start(
        &self,
        sponsorship: &Sponsorship,
        updated_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut orphans = self.orphans.orphans.write().await;
        let mut sponsorships = self.sponsorships.sponsorships.write().await;

        let orphan = orphans
            .iter_mut()
            .find(|o| o.id == sponsorship.orphan_id)
            .ok_or_else(|| DomainError::new(ErrorCode::OrphanNotFound, "Orphan not found"))?;
        if !orphan.is_eligible_for_sponsorship() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Orphan {} is no longer eligible for sponsorship", orphan.id),
            ));
        }

        orphan.sponsorship_status = SponsorshipStatus::Sponsored;
        orphan.touch(updated_at);
        sponsorships.push(sponsorship.clone());
        Ok(())
    }

    async fn record_end(
        &self,
        sponsorship: &Sponsorship,
        orphan_status: SponsorshipStatus,
        updated_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut orphans = self.orphans.orphans.write().await;
        let mut sponsorships = self.sponsorships.sponsorships.write().await;

        let slot = sponsorships
            .iter_mut()
            .find(|s| s.id == sponsorship.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SponsorshipNotFound, "Sponsorship not found")
            })?;
        if !slot.active {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Sponsorship {} has already ended", sponsorship.id),
            ));
        }

        *slot = sponsorship.clone();
        if let Some(orphan) = orphans
            .iter_mut()
            .find(|o| o.id == sponsorship.orphan_id && o.is_active())
        {
            orphan.sponsorship_status = orphan_status;
            orphan.touch(updated_at);
        }
        Ok(())
    }
}
