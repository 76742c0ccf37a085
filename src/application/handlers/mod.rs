//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod orphan;
pub mod sponsor;
pub mod sponsorship;

#[cfg(test)]
pub(crate) mod test_support;

pub use orphan::{
    CheckOrphanEligibilityHandler, CheckOrphanEligibilityQuery, CreateOrphanCommand,
    CreateOrphanHandler, CurrentSponsorship, GetCurrentSponsorshipHandler,
    GetCurrentSponsorshipQuery, ListEligibleOrphansHandler, ListEligibleOrphansQuery,
    UpdateOrphanCommand, UpdateOrphanHandler,
};
pub use sponsor::{CreateSponsorCommand, CreateSponsorHandler};
pub use sponsorship::{
    EndSponsorshipCommand, EndSponsorshipHandler, SponsorshipChange, SponsorshipError,
    StartSponsorshipCommand, StartSponsorshipHandler,
};
