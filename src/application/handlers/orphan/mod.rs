//! Orphan command and query handlers.

// Command handlers
mod create_orphan;
mod update_orphan;

// Query handlers
mod check_orphan_eligibility;
mod get_current_sponsorship;
mod list_eligible_orphans;

pub use check_orphan_eligibility::{CheckOrphanEligibilityHandler, CheckOrphanEligibilityQuery};
pub use create_orphan::{CreateOrphanCommand, CreateOrphanHandler};
pub use get_current_sponsorship::{
    CurrentSponsorship, GetCurrentSponsorshipHandler, GetCurrentSponsorshipQuery,
};
pub use list_eligible_orphans::{ListEligibleOrphansHandler, ListEligibleOrphansQuery};
pub use update_orphan::{UpdateOrphanCommand, UpdateOrphanHandler};
