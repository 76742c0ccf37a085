//! EndSponsorshipHandler - Command handler for ending a sponsorship.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::SponsorshipId;
use crate::domain::sponsorship::status_from_history;
use crate::ports::{Clock, OrphanRepository, SponsorshipLedger, SponsorshipRepository};

use super::{SponsorshipChange, SponsorshipError};

#[derive(Debug, Clone)]
pub struct EndSponsorshipCommand {
    pub sponsorship_id: SponsorshipId,
    /// Defaults to today.
    pub end_date: Option<NaiveDate>,
}

/// Ends a sponsorship and recomputes the orphan's sponsorship status.
///
/// Orphans that are not active keep `sponsorship_on_hold`; their status is
/// recomputed when they are reactivated. The ended sponsorship and the new
/// status are committed together through the [`SponsorshipLedger`].
pub struct EndSponsorshipHandler {
    orphans: Arc<dyn OrphanRepository>,
    sponsorships: Arc<dyn SponsorshipRepository>,
    ledger: Arc<dyn SponsorshipLedger>,
    clock: Arc<dyn Clock>,
}

impl EndSponsorshipHandler {
    pub fn new(
        orphans: Arc<dyn OrphanRepository>,
        sponsorships: Arc<dyn SponsorshipRepository>,
        ledger: Arc<dyn SponsorshipLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orphans,
            sponsorships,
            ledger,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: EndSponsorshipCommand,
    ) -> Result<SponsorshipChange, SponsorshipError> {
        // 1. Load
        let mut sponsorship = self
            .sponsorships
            .find_by_id(&cmd.sponsorship_id)
            .await?
            .ok_or(SponsorshipError::SponsorshipNotFound(cmd.sponsorship_id))?;
        let (orphan, mut history) = futures::try_join!(
            self.orphans.find_by_id(&sponsorship.orphan_id),
            self.sponsorships.find_by_orphan(&sponsorship.orphan_id),
        )?;
        let mut orphan = orphan.ok_or(SponsorshipError::OrphanNotFound(sponsorship.orphan_id))?;

        // 2. End and derive the status the history implies afterwards
        sponsorship.end(cmd.end_date.unwrap_or_else(|| self.clock.today()))?;
        for record in history.iter_mut().filter(|s| s.id == sponsorship.id) {
            *record = sponsorship.clone();
        }
        let resolved = status_from_history(&history);

        // 3. Commit both records
        let now = self.clock.now();
        self.ledger.record_end(&sponsorship, resolved, now).await?;
        if orphan.is_active() {
            orphan.sponsorship_status = resolved;
            orphan.touch(now);
        }

        tracing::info!(
            sponsorship_id = %sponsorship.id,
            orphan_osra_number = ?orphan.osra_number,
            sponsorship_status = %orphan.sponsorship_status,
            "sponsorship ended"
        );

        Ok(SponsorshipChange { sponsorship, orphan })
    }
}
