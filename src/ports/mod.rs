//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `OrphanRepository` - Orphan persistence, identity checks and search
//! - `SponsorRepository` - Sponsor persistence
//! - `SponsorshipRepository` - Sponsorship persistence and history
//! - `SponsorshipLedger` - Sponsorship writes committed with the orphan's status
//!
//! ## Collaborator Ports
//!
//! - `PartnerDirectory` - Province code of an orphan list's partner
//! - `SequenceAllocator` - Atomic per-scope counters for OSRA numbers
//! - `SponsorshipStatusResolver` - Sponsorship status from history
//! - `Clock` - Current time and day

mod clock;
mod orphan_repository;
mod partner_directory;
mod sequence_allocator;
mod sponsor_repository;
mod sponsorship_ledger;
mod sponsorship_repository;
mod sponsorship_status_resolver;

pub use clock::Clock;
pub use orphan_repository::OrphanRepository;
pub use partner_directory::PartnerDirectory;
pub use sequence_allocator::SequenceAllocator;
pub use sponsor_repository::SponsorRepository;
pub use sponsorship_ledger::SponsorshipLedger;
pub use sponsorship_repository::SponsorshipRepository;
pub use sponsorship_status_resolver::SponsorshipStatusResolver;
