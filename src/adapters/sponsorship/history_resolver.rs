//! Sponsorship status resolver backed by sponsorship history.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::orphan::{Orphan, SponsorshipStatus};
use crate::domain::sponsorship::status_from_history;
use crate::ports::{SponsorshipRepository, SponsorshipStatusResolver};

/// Resolves an orphan's sponsorship status from its stored sponsorships.
pub struct HistoryStatusResolver {
    sponsorships: Arc<dyn SponsorshipRepository>,
}

impl HistoryStatusResolver {
    pub fn new(sponsorships: Arc<dyn SponsorshipRepository>) -> Self {
        Self { sponsorships }
    }
}

#[async_trait]
impl SponsorshipStatusResolver for HistoryStatusResolver {
    async fn resolve(&self, orphan: &Orphan) -> Result<SponsorshipStatus, DomainError> {
        let history = self.sponsorships.find_by_orphan(&orphan.id).await?;
        let status = status_from_history(&history);
        tracing::debug!(
            orphan_id = %orphan.id,
            sponsorships = history.len(),
            status = %status,
            "resolved sponsorship status from history"
        );
        Ok(status)
    }
}
