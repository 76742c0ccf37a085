//! Orphan aggregate entity.
//!
//! # Design Decisions
//!
//! - **Raw inputs kept**: tri-state booleans stay `Option<bool>` and dates stay
//!   [`DateValue`] so validation can report unset or malformed input instead of
//!   the type system silently coercing it.
//! - **Defaults on construction only**: status, sponsorship status and
//!   priority are defaulted when a new record is built, never on reload.
//! - **OSRA number assigned once**: see [`Orphan::assign_osra_number`].

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DateValue, OrphanId, OrphanListId, OsraNumber, ProvinceCode, Timestamp,
};
use crate::domain::partner::Address;

use super::{OrphanError, OrphanStatus, Priority, SponsorshipStatus};

/// Orphan aggregate - a child registered with the charity.
///
/// # Invariants
///
/// - `osra_number` is set exactly once, before the first insert
/// - (`name`, `family_name`, `mother_name`, `father_given_name`) is unique
/// - never hard-deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orphan {
    pub id: OrphanId,
    pub osra_number: Option<OsraNumber>,
    pub sequential_id: Option<u32>,
    pub orphan_list_id: Option<OrphanListId>,
    pub province_code: Option<ProvinceCode>,

    pub name: String,
    pub father_given_name: String,
    pub family_name: String,
    pub mother_name: String,
    pub mother_alive: Option<bool>,
    pub date_of_birth: Option<DateValue>,
    pub gender: Option<String>,
    pub contact_number: String,

    pub father_deceased: Option<bool>,
    pub father_is_martyr: Option<bool>,
    pub father_date_of_death: Option<DateValue>,
    pub father_place_of_death: Option<String>,
    pub father_cause_of_death: Option<String>,

    pub minor_siblings_count: Option<i32>,
    pub sponsored_minor_siblings_count: Option<i32>,
    pub sponsored_by_another_org: Option<bool>,

    pub priority: Option<Priority>,
    pub status: OrphanStatus,
    pub sponsorship_status: SponsorshipStatus,

    pub original_address: Option<Address>,
    pub current_address: Option<Address>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attributes supplied when registering a new orphan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrphanDraft {
    pub orphan_list_id: Option<OrphanListId>,
    pub province_code: Option<ProvinceCode>,
    pub name: String,
    pub father_given_name: String,
    pub family_name: String,
    pub mother_name: String,
    pub mother_alive: Option<bool>,
    pub date_of_birth: Option<DateValue>,
    pub gender: Option<String>,
    pub contact_number: String,
    pub father_deceased: Option<bool>,
    pub father_is_martyr: Option<bool>,
    pub father_date_of_death: Option<DateValue>,
    pub father_place_of_death: Option<String>,
    pub father_cause_of_death: Option<String>,
    pub minor_siblings_count: Option<i32>,
    pub sponsored_minor_siblings_count: Option<i32>,
    pub sponsored_by_another_org: Option<bool>,
    pub priority: Option<Priority>,
    pub status: Option<OrphanStatus>,
    pub sponsorship_status: Option<SponsorshipStatus>,
    pub original_address: Option<Address>,
    pub current_address: Option<Address>,
}

/// Attributes changed by an update. `None` leaves a field untouched; for
/// nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrphanChanges {
    pub name: Option<String>,
    pub father_given_name: Option<String>,
    pub family_name: Option<String>,
    pub mother_name: Option<String>,
    pub mother_alive: Option<Option<bool>>,
    pub date_of_birth: Option<Option<DateValue>>,
    pub gender: Option<Option<String>>,
    pub contact_number: Option<String>,
    pub father_deceased: Option<Option<bool>>,
    pub father_is_martyr: Option<Option<bool>>,
    pub father_date_of_death: Option<Option<DateValue>>,
    pub father_place_of_death: Option<Option<String>>,
    pub father_cause_of_death: Option<Option<String>>,
    pub minor_siblings_count: Option<Option<i32>>,
    pub sponsored_minor_siblings_count: Option<Option<i32>>,
    pub sponsored_by_another_org: Option<Option<bool>>,
    pub priority: Option<Option<Priority>>,
    pub status: Option<OrphanStatus>,
    pub original_address: Option<Option<Address>>,
    pub current_address: Option<Option<Address>>,
    pub orphan_list_id: Option<Option<OrphanListId>>,
}

/// The attribute combination that must be unique across all orphans.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrphanIdentity {
    pub name: String,
    pub family_name: String,
    pub mother_name: String,
    pub father_given_name: String,
}

impl Orphan {
    /// Builds a new, not yet persisted orphan, defaulting sponsorship status
    /// to unsponsored, status to active and priority to Normal when unset.
    pub fn new(draft: OrphanDraft, now: Timestamp) -> Self {
        Self {
            id: OrphanId::new(),
            osra_number: None,
            sequential_id: None,
            orphan_list_id: draft.orphan_list_id,
            province_code: draft.province_code,
            name: draft.name,
            father_given_name: draft.father_given_name,
            family_name: draft.family_name,
            mother_name: draft.mother_name,
            mother_alive: draft.mother_alive,
            date_of_birth: draft.date_of_birth,
            gender: draft.gender,
            contact_number: draft.contact_number,
            father_deceased: draft.father_deceased,
            father_is_martyr: draft.father_is_martyr,
            father_date_of_death: draft.father_date_of_death,
            father_place_of_death: draft.father_place_of_death,
            father_cause_of_death: draft.father_cause_of_death,
            minor_siblings_count: draft.minor_siblings_count,
            sponsored_minor_siblings_count: draft.sponsored_minor_siblings_count,
            sponsored_by_another_org: draft.sponsored_by_another_org,
            priority: Some(draft.priority.unwrap_or_default()),
            status: draft.status.unwrap_or(OrphanStatus::Active),
            sponsorship_status: draft
                .sponsorship_status
                .unwrap_or(SponsorshipStatus::Unsponsored),
            original_address: draft.original_address,
            current_address: draft.current_address,
            created_at: now,
            updated_at: now,
        }
    }

    /// "{father_given_name} {family_name}"
    pub fn father_name(&self) -> String {
        format!("{} {}", self.father_given_name, self.family_name)
    }

    /// "{name} {father_given_name} {family_name}"
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name, self.father_given_name, self.family_name)
    }

    pub fn identity(&self) -> OrphanIdentity {
        OrphanIdentity {
            name: self.name.clone(),
            family_name: self.family_name.clone(),
            mother_name: self.mother_name.clone(),
            father_given_name: self.father_given_name.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_sponsored(&self) -> bool {
        self.sponsorship_status == SponsorshipStatus::Sponsored
    }

    pub fn is_father_deceased(&self) -> bool {
        self.father_deceased == Some(true)
    }

    /// Active and currently unsponsored, evaluated on this snapshot.
    pub fn is_eligible_for_sponsorship(&self) -> bool {
        self.is_active() && self.sponsorship_status.is_currently_unsponsored()
    }

    /// Copies the partner's province code unless one is already set.
    pub fn inherit_province_code(&mut self, code: Option<ProvinceCode>) {
        if self.province_code.is_none() {
            self.province_code = code;
        }
    }

    /// Records the OSRA number and the sequence it was built from.
    ///
    /// # Errors
    ///
    /// `OsraNumberAlreadyAssigned` if the record is already numbered; the
    /// existing number is left untouched.
    pub fn assign_osra_number(
        &mut self,
        sequential_id: u32,
        number: OsraNumber,
    ) -> Result<(), OrphanError> {
        if let Some(existing) = &self.osra_number {
            return Err(OrphanError::OsraNumberAlreadyAssigned(existing.clone()));
        }
        self.sequential_id = Some(sequential_id);
        self.osra_number = Some(number);
        Ok(())
    }

    /// Applies attribute changes. Status is applied like any other field;
    /// its sponsorship side effect is planned separately.
    pub fn apply_changes(&mut self, changes: OrphanChanges) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut self.name, changes.name);
        set(&mut self.father_given_name, changes.father_given_name);
        set(&mut self.family_name, changes.family_name);
        set(&mut self.mother_name, changes.mother_name);
        set(&mut self.mother_alive, changes.mother_alive);
        set(&mut self.date_of_birth, changes.date_of_birth);
        set(&mut self.gender, changes.gender);
        set(&mut self.contact_number, changes.contact_number);
        set(&mut self.father_deceased, changes.father_deceased);
        set(&mut self.father_is_martyr, changes.father_is_martyr);
        set(&mut self.father_date_of_death, changes.father_date_of_death);
        set(&mut self.father_place_of_death, changes.father_place_of_death);
        set(&mut self.father_cause_of_death, changes.father_cause_of_death);
        set(&mut self.minor_siblings_count, changes.minor_siblings_count);
        set(
            &mut self.sponsored_minor_siblings_count,
            changes.sponsored_minor_siblings_count,
        );
        set(&mut self.sponsored_by_another_org, changes.sponsored_by_another_org);
        set(&mut self.priority, changes.priority);
        set(&mut self.status, changes.status);
        set(&mut self.original_address, changes.original_address);
        set(&mut self.current_address, changes.current_address);
        set(&mut self.orphan_list_id, changes.orphan_list_id);
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}
