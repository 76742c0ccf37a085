//! Orphan domain module.
//!
//! Registration, validation and sponsorship eligibility of orphans.
//!
//! # Module Structure
//!
//! - `aggregate` - Orphan aggregate entity, draft and change set
//! - `status` - OrphanStatus, SponsorshipStatus and Priority
//! - `policy` - Configurable age and gestation limits
//! - `validation` - Ordered validation rule set
//! - `transition` - Sponsorship side effects of status changes
//! - `eligibility` - Queries and the eligibility ordering

mod aggregate;
mod eligibility;
mod errors;
mod policy;
mod status;
mod transition;
pub mod validation;

pub use aggregate::{Orphan, OrphanChanges, OrphanDraft, OrphanIdentity};
pub use eligibility::{eligibility_order, OrphanOrder, OrphanQuery};
pub use errors::OrphanError;
pub use policy::EligibilityPolicy;
pub use status::{OrphanStatus, Priority, SponsorshipStatus};
pub use transition::SponsorshipTransition;
pub use validation::{validate, RecordState, ValidationContext};
