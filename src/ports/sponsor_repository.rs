//! Sponsor repository port.

use crate::domain::foundation::{DomainError, SponsorId};
use crate::domain::sponsor::Sponsor;
use async_trait::async_trait;

/// Repository port for Sponsor aggregate persistence.
#[async_trait]
pub trait SponsorRepository: Send + Sync {
    /// Save a new sponsor.
    ///
    /// # Errors
    ///
    /// - `OsraNumberConflict` if the OSRA number is already stored
    /// - `DatabaseError` on persistence failure
    async fn save(&self, sponsor: &Sponsor) -> Result<(), DomainError>;

    /// Update an existing sponsor.
    ///
    /// # Errors
    ///
    /// - `SponsorNotFound` if the sponsor doesn't exist
    async fn update(&self, sponsor: &Sponsor) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &SponsorId) -> Result<Option<Sponsor>, DomainError>;
}
