//! In-memory sponsor repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SponsorId};
use crate::domain::sponsor::Sponsor;
use crate::ports::SponsorRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemorySponsorRepository {
    sponsors: Arc<RwLock<HashMap<SponsorId, Sponsor>>>,
}

impl InMemorySponsorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SponsorRepository for InMemorySponsorRepository {
    async fn save(&self, sponsor: &Sponsor) -> Result<(), DomainError> {
        let mut sponsors = self.sponsors.write().await;
        let number_taken = sponsor.osra_number.is_some()
            && sponsors.values().any(|s| s.osra_number == sponsor.osra_number);
        if number_taken {
            return Err(DomainError::new(
                ErrorCode::OsraNumberConflict,
                "Sponsor OSRA number already stored",
            ));
        }
        sponsors.insert(sponsor.id, sponsor.clone());
        Ok(())
    }

    async fn update(&self, sponsor: &Sponsor) -> Result<(), DomainError> {
        let mut sponsors = self.sponsors.write().await;
        match sponsors.get_mut(&sponsor.id) {
            Some(slot) => {
                *slot = sponsor.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::SponsorNotFound, "Sponsor not found")),
        }
    }

    async fn find_by_id(&self, id: &SponsorId) -> Result<Option<Sponsor>, DomainError> {
        Ok(self.sponsors.read().await.get(id).cloned())
    }
}
