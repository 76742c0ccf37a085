//! CreateSponsorHandler - Command handler for registering sponsors.

use std::sync::Arc;

use crate::application::{OsraNumberGenerator, RuleSettings};
use crate::domain::sponsor::validation;
use crate::domain::sponsor::{Sponsor, SponsorDraft, SponsorError, SponsorValidationContext};
use crate::ports::{Clock, SponsorRepository};

#[derive(Debug, Clone)]
pub struct CreateSponsorCommand {
    pub draft: SponsorDraft,
}

/// Handler for registering sponsors.
///
/// The OSRA number scope follows the sponsor's affiliation: `5` + branch
/// code for branch recruits, `8` + organization code otherwise.
pub struct CreateSponsorHandler {
    sponsors: Arc<dyn SponsorRepository>,
    numbers: OsraNumberGenerator,
    clock: Arc<dyn Clock>,
    settings: RuleSettings,
}

impl CreateSponsorHandler {
    pub fn new(
        sponsors: Arc<dyn SponsorRepository>,
        numbers: OsraNumberGenerator,
        clock: Arc<dyn Clock>,
        settings: RuleSettings,
    ) -> Self {
        Self {
            sponsors,
            numbers,
            clock,
            settings,
        }
    }

    pub async fn handle(&self, cmd: CreateSponsorCommand) -> Result<Sponsor, SponsorError> {
        let today = self.clock.today();
        let mut sponsor = Sponsor::new(cmd.draft, today, self.clock.now());

        let ctx = SponsorValidationContext::new(today, self.settings.genders.clone());
        let errors = validation::validate(&sponsor, &ctx);
        if !errors.is_empty() {
            tracing::warn!(
                sponsor_id = %sponsor.id,
                error_count = errors.len(),
                fields = ?errors.fields(),
                "sponsor rejected by validation"
            );
            return Err(SponsorError::Invalid(errors));
        }

        let numbering = sponsor.numbering().map_err(SponsorError::Invalid)?;
        let (sequence, number) = self.numbers.generate(&numbering).await?;
        sponsor.assign_osra_number(sequence, number)?;

        self.sponsors.save(&sponsor).await?;

        tracing::info!(
            sponsor_id = %sponsor.id,
            osra_number = ?sponsor.osra_number,
            affiliate = ?sponsor.affiliate(),
            "sponsor created"
        );

        Ok(sponsor)
    }
}
