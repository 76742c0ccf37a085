//! Sponsorship repository port.
//!
//! Sponsorships are never deleted; ending one keeps it as history, which
//! drives an orphan's sponsorship status when it is reactivated.

use crate::domain::foundation::{DomainError, OrphanId, SponsorshipId};
use crate::domain::sponsorship::Sponsorship;
use async_trait::async_trait;

/// Repository port for Sponsorship persistence.
#[async_trait]
pub trait SponsorshipRepository: Send + Sync {
    async fn save(&self, sponsorship: &Sponsorship) -> Result<(), DomainError>;

    /// Update an existing sponsorship.
    ///
    /// # Errors
    ///
    /// - `SponsorshipNotFound` if the sponsorship doesn't exist
    async fn update(&self, sponsorship: &Sponsorship) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &SponsorshipId) -> Result<Option<Sponsorship>, DomainError>;

    /// Every sponsorship of the orphan, oldest start date first.
    async fn find_by_orphan(&self, orphan_id: &OrphanId) -> Result<Vec<Sponsorship>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sponsorship_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SponsorshipRepository) {}
    }
}
