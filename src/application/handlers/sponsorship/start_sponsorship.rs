//! StartSponsorshipHandler - Command handler for matching a sponsor to an orphan.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::rules;
use crate::domain::foundation::{DateValue, ErrorCode, OrphanId, SponsorId, ValidationErrors};
use crate::domain::orphan::SponsorshipStatus;
use crate::domain::sponsorship::Sponsorship;
use crate::ports::{Clock, OrphanRepository, SponsorRepository, SponsorshipLedger};

use super::{SponsorshipChange, SponsorshipError};

#[derive(Debug, Clone)]
pub struct StartSponsorshipCommand {
    pub sponsor_id: SponsorId,
    pub orphan_id: OrphanId,
    /// Defaults to today. Cannot be in the future.
    pub start_date: Option<NaiveDate>,
}

/// Starts a sponsorship between an active sponsor and an eligible orphan,
/// marking the orphan sponsored.
///
/// The sponsorship and the orphan's new status are written together through
/// the [`SponsorshipLedger`], which re-checks eligibility against the stored
/// orphan. A start that loses a race to another one is refused as
/// `OrphanNotEligible`.
pub struct StartSponsorshipHandler {
    orphans: Arc<dyn OrphanRepository>,
    sponsors: Arc<dyn SponsorRepository>,
    ledger: Arc<dyn SponsorshipLedger>,
    clock: Arc<dyn Clock>,
}

impl StartSponsorshipHandler {
    pub fn new(
        orphans: Arc<dyn OrphanRepository>,
        sponsors: Arc<dyn SponsorRepository>,
        ledger: Arc<dyn SponsorshipLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orphans,
            sponsors,
            ledger,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartSponsorshipCommand,
    ) -> Result<SponsorshipChange, SponsorshipError> {
        // 1. Start date
        let today = self.clock.today();
        let start_date = cmd.start_date.unwrap_or(today);
        let mut errors = ValidationErrors::new();
        rules::require_past_date(
            &mut errors,
            "start_date",
            Some(&DateValue::Valid(start_date)),
            today,
        );
        if !errors.is_empty() {
            return Err(SponsorshipError::Invalid(errors));
        }

        // 2. Both parties must exist and be eligible
        let (orphan, sponsor) = futures::try_join!(
            self.orphans.find_by_id(&cmd.orphan_id),
            self.sponsors.find_by_id(&cmd.sponsor_id),
        )?;
        let mut orphan = orphan.ok_or(SponsorshipError::OrphanNotFound(cmd.orphan_id))?;
        let sponsor = sponsor.ok_or(SponsorshipError::SponsorNotFound(cmd.sponsor_id))?;

        if !orphan.is_eligible_for_sponsorship() {
            return Err(SponsorshipError::OrphanNotEligible(orphan.id));
        }
        if !sponsor.is_eligible_for_sponsorship() {
            return Err(SponsorshipError::SponsorNotEligible(sponsor.id));
        }

        // 3. Claim the orphan and record the sponsorship in one write
        let sponsorship = Sponsorship::start(sponsor.id, orphan.id, start_date);
        let now = self.clock.now();
        match self.ledger.record_start(&sponsorship, now).await {
            Ok(()) => {}
            Err(err) if err.code == ErrorCode::ConcurrencyConflict => {
                tracing::warn!(orphan_id = %orphan.id, "orphan claimed by another sponsorship");
                return Err(SponsorshipError::OrphanNotEligible(orphan.id));
            }
            Err(err) => return Err(err.into()),
        }

        orphan.sponsorship_status = SponsorshipStatus::Sponsored;
        orphan.touch(now);

        tracing::info!(
            sponsorship_id = %sponsorship.id,
            orphan_osra_number = ?orphan.osra_number,
            sponsor_osra_number = ?sponsor.osra_number,
            "sponsorship started"
        );

        Ok(SponsorshipChange { sponsorship, orphan })
    }
}
