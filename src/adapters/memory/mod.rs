//! In-memory adapters for tests and single-process deployments.
//!
//! Every adapter keeps its state behind an async lock, so a single instance
//! can be shared between handlers through `Arc`.

mod orphan_repository;
mod partner_directory;
mod sequence_allocator;
mod sponsor_repository;
mod sponsorship_ledger;
mod sponsorship_repository;

pub use orphan_repository::InMemoryOrphanRepository;
pub use partner_directory::InMemoryPartnerDirectory;
pub use sequence_allocator::InMemorySequenceAllocator;
pub use sponsor_repository::InMemorySponsorRepository;
pub use sponsorship_ledger::InMemorySponsorshipLedger;
pub use sponsorship_repository::InMemorySponsorshipRepository;
