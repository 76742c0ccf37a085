//! Postal address owned by an orphan record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProvinceCode;

/// Where an orphan lives (current) or originally came from (original).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub province: ProvinceCode,
    pub city: String,
    pub neighborhood: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl Address {
    pub fn new(province: ProvinceCode, city: impl Into<String>, neighborhood: impl Into<String>) -> Self {
        Self {
            province,
            city: city.into(),
            neighborhood: neighborhood.into(),
            street: None,
            details: None,
        }
    }
}
