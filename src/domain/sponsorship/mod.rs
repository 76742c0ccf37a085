//! Sponsorships link a sponsor to an orphan for a period of time.

mod entity;

pub use entity::{status_from_history, Sponsorship};
