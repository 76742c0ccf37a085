//! Partner directory port.
//!
//! Resolves the province code of the partner that submitted an orphan list.
//! New orphans inherit it when they carry none of their own.

use crate::domain::foundation::{DomainError, OrphanListId, ProvinceCode};
use async_trait::async_trait;

#[async_trait]
pub trait PartnerDirectory: Send + Sync {
    /// Province code of the partner owning `list_id`.
    ///
    /// Returns `None` if the list or its partner is unknown.
    async fn province_code_for_list(
        &self,
        list_id: &OrphanListId,
    ) -> Result<Option<ProvinceCode>, DomainError>;
}
