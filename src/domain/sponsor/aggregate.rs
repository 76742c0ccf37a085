//! Sponsor aggregate entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BranchId, ChannelNumbering, DateValue, OrganizationId, OsraNumber, RecruitmentChannel,
    SponsorId, Timestamp, ValidationErrors,
};

use super::validation::messages;
use super::{SponsorError, SponsorStatus, SponsorType};

/// OSRA branch that recruits sponsors directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    /// Two-digit code embedded in sponsor numbers, at most
    /// [`MAX_CHANNEL_CODE`](crate::domain::foundation::MAX_CHANNEL_CODE).
    pub code: u32,
}

impl Branch {
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Self {
            id: BranchId::new(),
            name: name.into(),
            code,
        }
    }
}

/// Sister organization that recruits sponsors on OSRA's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub code: u32,
}

impl Organization {
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Self {
            id: OrganizationId::new(),
            name: name.into(),
            code,
        }
    }
}

/// Sponsor aggregate - a person or institution funding orphans.
///
/// # Invariants
///
/// - affiliated with exactly one of `branch` or `organization`
/// - `osra_number` is set once, before the first insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: SponsorId,
    pub osra_number: Option<OsraNumber>,
    pub sequential_id: Option<u32>,

    pub name: String,
    pub country: String,
    pub gender: Option<String>,
    pub requested_orphan_count: Option<i32>,
    pub sponsor_type: Option<SponsorType>,
    pub status: SponsorStatus,
    pub start_date: Option<DateValue>,

    pub branch: Option<Branch>,
    pub organization: Option<Organization>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attributes supplied when registering a sponsor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorDraft {
    pub name: String,
    pub country: String,
    pub gender: Option<String>,
    pub requested_orphan_count: Option<i32>,
    pub sponsor_type: Option<SponsorType>,
    pub status: Option<SponsorStatus>,
    pub start_date: Option<DateValue>,
    pub branch: Option<Branch>,
    pub organization: Option<Organization>,
}

impl Sponsor {
    /// Builds a new sponsor. Status defaults to active and the start date to
    /// `today` when not supplied.
    pub fn new(draft: SponsorDraft, today: NaiveDate, now: Timestamp) -> Self {
        Self {
            id: SponsorId::new(),
            osra_number: None,
            sequential_id: None,
            name: draft.name,
            country: draft.country,
            gender: draft.gender,
            requested_orphan_count: draft.requested_orphan_count,
            sponsor_type: draft.sponsor_type,
            status: draft.status.unwrap_or_default(),
            start_date: Some(draft.start_date.unwrap_or(DateValue::Valid(today))),
            branch: draft.branch,
            organization: draft.organization,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name of the branch or organization the sponsor belongs to.
    pub fn affiliate(&self) -> Option<&str> {
        match (&self.branch, &self.organization) {
            (Some(branch), None) => Some(&branch.name),
            (None, Some(organization)) => Some(&organization.name),
            _ => None,
        }
    }

    /// Numbering derived from the affiliation.
    ///
    /// # Errors
    ///
    /// Reported on `affiliation` unless exactly one affiliation is set, and on
    /// `branch` or `organization` when its code does not fit two digits.
    pub fn numbering(&self) -> Result<ChannelNumbering, ValidationErrors> {
        let (channel, field, code) = match (&self.branch, &self.organization) {
            (Some(branch), None) => (RecruitmentChannel::Branch, "branch", branch.code),
            (None, Some(org)) => (RecruitmentChannel::Organization, "organization", org.code),
            (None, None) => return Err(single_error("affiliation", messages::UNAFFILIATED)),
            (Some(_), Some(_)) => {
                return Err(single_error("affiliation", messages::DOUBLY_AFFILIATED))
            }
        };
        ChannelNumbering::new(channel, code)
            .map_err(|_| single_error(field, messages::CODE_OUT_OF_RANGE))
    }

    pub fn is_eligible_for_sponsorship(&self) -> bool {
        self.status == SponsorStatus::Active
    }

    /// Records the OSRA number and the sequence it was built from.
    ///
    /// # Errors
    ///
    /// `OsraNumberAlreadyAssigned` if the sponsor is already numbered.
    pub fn assign_osra_number(
        &mut self,
        sequential_id: u32,
        number: OsraNumber,
    ) -> Result<(), SponsorError> {
        if let Some(existing) = &self.osra_number {
            return Err(SponsorError::OsraNumberAlreadyAssigned(existing.clone()));
        }
        self.sequential_id = Some(sequential_id);
        self.osra_number = Some(number);
        Ok(())
    }
}

fn single_error(field: &str, message: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, message);
    errors
}
