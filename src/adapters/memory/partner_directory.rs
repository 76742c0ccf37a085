//! In-memory partner directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrphanListId, PartnerId, ProvinceCode};
use crate::domain::partner::{OrphanList, Partner};
use crate::ports::PartnerDirectory;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPartnerDirectory {
    partners: Arc<RwLock<HashMap<PartnerId, Partner>>>,
    lists: Arc<RwLock<HashMap<OrphanListId, OrphanList>>>,
}

impl InMemoryPartnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_partner(&self, partner: Partner) {
        self.partners.write().await.insert(partner.id, partner);
    }

    pub async fn add_list(&self, list: OrphanList) {
        self.lists.write().await.insert(list.id, list);
    }

    /// Registers a partner with one orphan list and returns the list.
    pub async fn register(&self, partner: Partner) -> OrphanList {
        let list = OrphanList::for_partner(&partner);
        self.add_partner(partner).await;
        self.add_list(list.clone()).await;
        list
    }
}

#[async_trait]
impl PartnerDirectory for InMemoryPartnerDirectory {
    async fn province_code_for_list(
        &self,
        list_id: &OrphanListId,
    ) -> Result<Option<ProvinceCode>, DomainError> {
        let partner_id = match self.lists.read().await.get(list_id) {
            Some(list) => list.partner_id,
            None => return Ok(None),
        };
        let partners = self.partners.read().await;
        Ok(partners.get(&partner_id).map(|p| p.province_code.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_province_through_list_owner() {
        let directory = InMemoryPartnerDirectory::new();
        let list = directory
            .register(Partner::new("Aleppo Relief", ProvinceCode::new("AB").unwrap()))
            .await;

        let code = directory.province_code_for_list(&list.id).await.unwrap();

        assert_eq!(code.map(|c| c.as_str().to_string()), Some("AB".to_string()));
    }

    #[tokio::test]
    async fn unknown_list_resolves_to_none() {
        let directory = InMemoryPartnerDirectory::new();
        let code = directory
            .province_code_for_list(&OrphanListId::new())
            .await
            .unwrap();
        assert!(code.is_none());
    }
}
