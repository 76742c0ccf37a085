//! Sponsor classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Administrative status of a sponsor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SponsorStatus {
    #[default]
    Active,
    OnHold,
    Inactive,
    UnderRevision,
}

impl SponsorStatus {
    pub const ALL: [SponsorStatus; 4] = [
        SponsorStatus::Active,
        SponsorStatus::OnHold,
        SponsorStatus::Inactive,
        SponsorStatus::UnderRevision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorStatus::Active => "Active",
            SponsorStatus::OnHold => "On Hold",
            SponsorStatus::Inactive => "Inactive",
            SponsorStatus::UnderRevision => "Under Revision",
        }
    }
}

impl fmt::Display for SponsorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SponsorStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown sponsor status '{}'", s))
            })
    }
}

/// Whether the sponsor is a person or an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SponsorType {
    Individual,
    Organization,
}

impl SponsorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorType::Individual => "Individual",
            SponsorType::Organization => "Organization",
        }
    }
}

impl fmt::Display for SponsorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(SponsorType::Individual),
            "Organization" => Ok(SponsorType::Organization),
            other => Err(ValidationError::invalid_format(
                "sponsor_type",
                format!("unknown sponsor type '{}'", other),
            )),
        }
    }
}
