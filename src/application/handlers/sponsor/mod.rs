//! Sponsor command handlers.

mod create_sponsor;

pub use create_sponsor::{CreateSponsorCommand, CreateSponsorHandler};
