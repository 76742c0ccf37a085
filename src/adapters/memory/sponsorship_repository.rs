//! In-memory sponsorship repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrphanId, SponsorshipId};
use crate::domain::sponsorship::Sponsorship;
use crate::ports::SponsorshipRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemorySponsorshipRepository {
    pub(super) sponsorships: Arc<RwLock<Vec<Sponsorship>>>,
}

impl InMemorySponsorshipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SponsorshipRepository for InMemorySponsorshipRepository {
    async fn save(&self, sponsorship: &Sponsorship) -> Result<(), DomainError> {
        self.sponsorships.write().await.push(sponsorship.clone());
        Ok(())
    }

    async fn update(&self, sponsorship: &Sponsorship) -> Result<(), DomainError> {
        let mut sponsorships = self.sponsorships.write().await;
        let slot = sponsorships
            .iter_mut()
            .find(|s| s.id == sponsorship.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SponsorshipNotFound, "Sponsorship not found")
            })?;
        *slot = sponsorship.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SponsorshipId) -> Result<Option<Sponsorship>, DomainError> {
        let sponsorships = self.sponsorships.read().await;
        Ok(sponsorships.iter().find(|s| &s.id == id).cloned())
    }

    async fn find_by_orphan(&self, orphan_id: &OrphanId) -> Result<Vec<Sponsorship>, DomainError> {
        let sponsorships = self.sponsorships.read().await;
        let mut found: Vec<Sponsorship> = sponsorships
            .iter()
            .filter(|s| &s.orphan_id == orphan_id)
            .cloned()
            .collect();
        found.sort_by_key(|s| s.start_date);
        Ok(found)
    }
}
