//! Sponsor domain module.
//!
//! Sponsors are recruited by either an OSRA branch or a sister organization;
//! the recruiting channel determines the layout of their OSRA number.

mod aggregate;
mod errors;
mod status;
pub mod validation;

pub use aggregate::{Branch, Organization, Sponsor, SponsorDraft};
pub use errors::SponsorError;
pub use status::{SponsorStatus, SponsorType};
pub use validation::SponsorValidationContext;
