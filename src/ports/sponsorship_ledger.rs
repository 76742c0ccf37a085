//! Sponsorship ledger port.
//!
//! Starting or ending a sponsorship changes two records: the sponsorship
//! itself and the orphan's sponsorship status. The ledger commits both
//! together, so a failure leaves neither written.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::orphan::SponsorshipStatus;
use crate::domain::sponsorship::Sponsorship;

/// Atomic sponsorship writes.
#[async_trait]
pub trait SponsorshipLedger: Send + Sync {
    /// Inserts `sponsorship` and marks its orphan sponsored.
    ///
    /// The orphan is claimed only while it is active and currently
    /// unsponsored, checked against the stored record at write time.
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if the stored orphan is no longer eligible
    /// - `DatabaseError` on storage failure
    async fn record_start(
        &self,
        sponsorship: &Sponsorship,
        updated_at: Timestamp,
    ) -> Result<(), DomainError>;

    /// Stores the ended `sponsorship` and, while its orphan is still active,
    /// sets the orphan's sponsorship status to `orphan_status`.
    ///
    /// Orphans that are not active keep their status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the stored sponsorship already ended
    /// - `SponsorshipNotFound` if the sponsorship doesn't exist
    async fn record_end(
        &self,
        sponsorship: &Sponsorship,
        orphan_status: SponsorshipStatus,
        updated_at: Timestamp,
    ) -> Result<(), DomainError>;
}
