//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, start/end sponsorship) are kept apart
//! from query handlers (eligibility listing and checks, current sponsorship).

pub mod handlers;
mod osra_number;
mod settings;

pub use handlers::{
    // Orphan handlers
    CheckOrphanEligibilityHandler, CheckOrphanEligibilityQuery, CreateOrphanCommand,
    CreateOrphanHandler, CurrentSponsorship, GetCurrentSponsorshipHandler,
    GetCurrentSponsorshipQuery, ListEligibleOrphansHandler, ListEligibleOrphansQuery,
    UpdateOrphanCommand, UpdateOrphanHandler,
    // Sponsor handlers
    CreateSponsorCommand, CreateSponsorHandler,
    // Sponsorship handlers
    EndSponsorshipCommand, EndSponsorshipHandler, SponsorshipChange, SponsorshipError,
    StartSponsorshipCommand, StartSponsorshipHandler,
};
pub use osra_number::OsraNumberGenerator;
pub use settings::RuleSettings;
