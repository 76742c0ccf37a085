//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, dates, rules, errors)
//! - `orphan` - Orphan aggregate, validation, status transitions and eligibility
//! - `partner` - Partners, orphan lists and addresses
//! - `sponsor` - Sponsor aggregate and affiliation rules
//! - `sponsorship` - Sponsor/orphan links and their history

pub mod foundation;
pub mod orphan;
pub mod partner;
pub mod sponsor;
pub mod sponsorship;
