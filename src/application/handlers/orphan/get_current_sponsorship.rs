//! GetCurrentSponsorshipHandler - Query handler for an orphan's sponsor.

use std::sync::Arc;

use crate::domain::foundation::OrphanId;
use crate::domain::orphan::OrphanError;
use crate::domain::sponsor::Sponsor;
use crate::domain::sponsorship::Sponsorship;
use crate::ports::{OrphanRepository, SponsorRepository, SponsorshipRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetCurrentSponsorshipQuery {
    pub orphan_id: OrphanId,
}

/// The sponsorship currently funding an orphan, with its sponsor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSponsorship {
    pub sponsorship: Sponsorship,
    pub sponsor: Sponsor,
}

/// Finds the current sponsorship of a sponsored orphan.
///
/// Returns `None` unless the orphan's sponsorship status is `sponsored`;
/// otherwise the first active sponsorship in start order.
pub struct GetCurrentSponsorshipHandler {
    orphans: Arc<dyn OrphanRepository>,
    sponsorships: Arc<dyn SponsorshipRepository>,
    sponsors: Arc<dyn SponsorRepository>,
}

impl GetCurrentSponsorshipHandler {
    pub fn new(
        orphans: Arc<dyn OrphanRepository>,
        sponsorships: Arc<dyn SponsorshipRepository>,
        sponsors: Arc<dyn SponsorRepository>,
    ) -> Self {
        Self {
            orphans,
            sponsorships,
            sponsors,
        }
    }

    pub async fn handle(
        &self,
        query: GetCurrentSponsorshipQuery,
    ) -> Result<Option<CurrentSponsorship>, OrphanError> {
        let orphan = self
            .orphans
            .find_by_id(&query.orphan_id)
            .await?
            .ok_or(OrphanError::NotFound(query.orphan_id))?;
        if !orphan.is_sponsored() {
            return Ok(None);
        }

        let history = self.sponsorships.find_by_orphan(&orphan.id).await?;
        let Some(sponsorship) = history.into_iter().find(|s| s.active) else {
            tracing::warn!(orphan_id = %orphan.id, "sponsored orphan has no active sponsorship");
            return Ok(None);
        };

        let sponsor = self
            .sponsors
            .find_by_id(&sponsorship.sponsor_id)
            .await?
            .ok_or_else(|| {
                OrphanError::infrastructure(format!(
                    "sponsorship {} references missing sponsor {}",
                    sponsorship.id, sponsorship.sponsor_id
                ))
            })?;

        Ok(Some(CurrentSponsorship {
            sponsorship,
            sponsor,
        }))
    }
}
