//! Orphan repository port.
//!
//! Defines the contract for persisting, loading and searching Orphan
//! aggregates.
//!
//! # Design
//!
//! - **Never deletes**: orphans are retired through their status
//! - **Unique identity**: (`name`, `family_name`, `mother_name`,
//!   `father_given_name`) is unique; implementations report a lost race as
//!   `DuplicateOrphan`
//! - **Queries**: `search` honors every predicate and the order of an
//!   [`OrphanQuery`]
//!
//! # Example
//!
//! ```ignore
//! async fn eligible(repo: &dyn OrphanRepository) -> Result<Vec<Orphan>, DomainError> {
//!     repo.search(&OrphanQuery::sort_by_eligibility()).await
//! }
//! ```

use crate::domain::foundation::{DomainError, OrphanId};
use crate::domain::orphan::{Orphan, OrphanIdentity, OrphanQuery};
use async_trait::async_trait;

/// Repository port for Orphan aggregate persistence.
#[async_trait]
pub trait OrphanRepository: Send + Sync {
    /// Save a new orphan.
    ///
    /// # Errors
    ///
    /// - `DuplicateOrphan` if the identity tuple is already stored
    /// - `OsraNumberConflict` if the OSRA number is already stored
    /// - `DatabaseError` on persistence failure
    async fn save(&self, orphan: &Orphan) -> Result<(), DomainError>;

    /// Update an existing orphan.
    ///
    /// # Errors
    ///
    /// - `OrphanNotFound` if the orphan doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, orphan: &Orphan) -> Result<(), DomainError>;

    /// Find an orphan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrphanId) -> Result<Option<Orphan>, DomainError>;

    /// True if another orphan (other than `excluding`) has this identity.
    async fn identity_taken(
        &self,
        identity: &OrphanIdentity,
        excluding: Option<&OrphanId>,
    ) -> Result<bool, DomainError>;

    /// Orphans matching `query`, in the order it requests.
    async fn search(&self, query: &OrphanQuery) -> Result<Vec<Orphan>, DomainError>;
}
