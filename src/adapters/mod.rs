//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-process stores and ledger, used by tests and single-node setups
//! - `postgres` - sqlx-backed stores, the sponsorship ledger and the sequence table
//! - `redis` - INCR-backed sequence allocator
//! - `sponsorship` - status resolution from sponsorship history
//! - `clock` - system and fixed clocks
//! - `sequence` - allocator selection from configuration

pub mod clock;
pub mod memory;
pub mod postgres;
pub mod redis;
mod sequence;
pub mod sponsorship;

pub use clock::{FixedClock, SystemClock};
pub use memory::{
    InMemoryOrphanRepository, InMemoryPartnerDirectory, InMemorySequenceAllocator,
    InMemorySponsorRepository, InMemorySponsorshipLedger, InMemorySponsorshipRepository,
};
pub use sequence::sequence_allocator;
pub use sponsorship::HistoryStatusResolver;
