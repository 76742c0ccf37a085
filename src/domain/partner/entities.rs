//! Partner and orphan list entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrphanListId, PartnerId, ProvinceCode};

/// Organization that collects orphan data in a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub province_code: ProvinceCode,
}

impl Partner {
    pub fn new(name: impl Into<String>, province_code: ProvinceCode) -> Self {
        Self {
            id: PartnerId::new(),
            name: name.into(),
            province_code,
        }
    }
}

/// Batch of orphans submitted by one partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanList {
    pub id: OrphanListId,
    pub partner_id: PartnerId,
    pub osra_num: Option<String>,
}

impl OrphanList {
    pub fn for_partner(partner: &Partner) -> Self {
        Self {
            id: OrphanListId::new(),
            partner_id: partner.id,
            osra_num: None,
        }
    }
}
