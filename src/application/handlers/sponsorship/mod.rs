//! Sponsorship command handlers.
//!
//! Starting and ending sponsorships keeps the orphan's sponsorship status in
//! line with its history.

mod end_sponsorship;
mod errors;
mod start_sponsorship;

pub use end_sponsorship::{EndSponsorshipCommand, EndSponsorshipHandler};
pub use errors::SponsorshipError;
pub use start_sponsorship::{StartSponsorshipCommand, StartSponsorshipHandler};

use crate::domain::orphan::Orphan;
use crate::domain::sponsorship::Sponsorship;

/// A sponsorship after a change, with the orphan as stored afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorshipChange {
    pub sponsorship: Sponsorship,
    pub orphan: Orphan,
}
