//! Partner organizations, the orphan lists they submit, and addresses.
//!
//! A partner owns one or more orphan lists and supplies the province code that
//! prefixes every orphan OSRA number.

mod address;
mod entities;

pub use address::Address;
pub use entities::{OrphanList, Partner};
