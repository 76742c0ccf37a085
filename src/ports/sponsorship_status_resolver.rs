//! Sponsorship status resolver port.
//!
//! Decides an orphan's sponsorship status from its sponsorship history when
//! the orphan becomes active again.

use crate::domain::foundation::DomainError;
use crate::domain::orphan::{Orphan, SponsorshipStatus};
use async_trait::async_trait;

#[async_trait]
pub trait SponsorshipStatusResolver: Send + Sync {
    async fn resolve(&self, orphan: &Orphan) -> Result<SponsorshipStatus, DomainError>;
}
