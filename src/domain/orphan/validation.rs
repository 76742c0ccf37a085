//! Orphan validation rules.
//!
//! [`validate`] runs the ordered rule set in [`RULES`] against an immutable
//! snapshot of the candidate record. Facts that need the store (identity
//! uniqueness) or the caller (today, previous status) travel in
//! [`ValidationContext`], so the rules themselves stay pure.
//!
//! Date-dependent rules (gestation, age) only run when every date they read
//! is a valid calendar day. Missing or malformed dates are reported once, by
//! the date-validity rule of the field itself.

use chrono::NaiveDate;

use crate::domain::foundation::rules::{self, always, evaluate, Rule};
use crate::domain::foundation::{born_within_years_of, reached_age_by, ValidationErrors};

use super::{EligibilityPolicy, Orphan, OrphanStatus};

/// Violation messages specific to orphans.
pub mod messages {
    pub use crate::domain::foundation::rules::messages::*;

    pub const IDENTITY_TAKEN: &str = "taken: an orphan with this name, father, mother & family name is already in the database.";
    pub const SIBLINGS_EXCEED: &str = "cannot exceed minor siblings count";
    pub const MARTYR_REQUIRES_DEATH: &str = "must be false unless the father is deceased";
    pub const CANNOT_INACTIVATE: &str = "Cannot inactivate orphan with active sponsorships";
}

/// Whether the record is being created or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    New,
    Persisted { previous_status: OrphanStatus },
}

/// Everything the rules need besides the record itself.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub today: NaiveDate,
    pub record: RecordState,
    /// Another orphan already has the same identity tuple.
    pub identity_taken: bool,
    pub genders: Vec<String>,
    pub policy: EligibilityPolicy,
}

impl ValidationContext {
    pub fn for_create(today: NaiveDate, genders: Vec<String>, policy: EligibilityPolicy) -> Self {
        Self {
            today,
            record: RecordState::New,
            identity_taken: false,
            genders,
            policy,
        }
    }

    pub fn for_update(
        today: NaiveDate,
        previous_status: OrphanStatus,
        genders: Vec<String>,
        policy: EligibilityPolicy,
    ) -> Self {
        Self {
            today,
            record: RecordState::Persisted { previous_status },
            identity_taken: false,
            genders,
            policy,
        }
    }

    pub fn with_identity_taken(mut self, taken: bool) -> Self {
        self.identity_taken = taken;
        self
    }

    pub fn is_new_record(&self) -> bool {
        self.record == RecordState::New
    }

    /// New records join today; existing ones joined when they were created.
    pub fn join_date(&self, orphan: &Orphan) -> NaiveDate {
        match self.record {
            RecordState::New => self.today,
            RecordState::Persisted { .. } => orphan.created_at.date(),
        }
    }

    /// Status before this update, if the update changes it.
    pub fn changed_from(&self, orphan: &Orphan) -> Option<OrphanStatus> {
        match self.record {
            RecordState::Persisted { previous_status } if previous_status != orphan.status => {
                Some(previous_status)
            }
            _ => None,
        }
    }
}

/// Runs every applicable rule and returns all violations found.
pub fn validate(orphan: &Orphan, ctx: &ValidationContext) -> ValidationErrors {
    evaluate(RULES, orphan, ctx)
}

type OrphanRule = Rule<Orphan, ValidationContext>;

/// The orphan rule set, in reporting order.
pub const RULES: &[OrphanRule] = &[
    Rule { name: "name_present", when: always, check: name_present },
    Rule { name: "identity_unique", when: always, check: identity_unique },
    Rule { name: "father_given_name_present", when: always, check: father_given_name_present },
    Rule { name: "family_name_present", when: always, check: family_name_present },
    Rule { name: "father_flags_set", when: always, check: father_flags_set },
    Rule { name: "father_death_recorded", when: father_deceased, check: father_death_recorded },
    Rule { name: "father_death_absent", when: father_not_deceased, check: father_death_absent },
    Rule { name: "mother_present", when: always, check: mother_present },
    Rule { name: "date_of_birth_valid", when: always, check: date_of_birth_valid },
    Rule { name: "gender_listed", when: always, check: gender_listed },
    Rule { name: "contact_number_present", when: always, check: contact_number_present },
    Rule { name: "sponsored_by_another_org_set", when: always, check: sponsored_by_another_org_set },
    Rule { name: "sibling_counts_non_negative", when: always, check: sibling_counts_non_negative },
    Rule { name: "addresses_present", when: always, check: addresses_present },
    Rule { name: "priority_present", when: always, check: priority_present },
    Rule { name: "orphan_list_present", when: always, check: orphan_list_present },
    Rule { name: "province_code_resolved", when: new_record_with_list, check: province_code_resolved },
    Rule { name: "sponsored_siblings_within_total", when: always, check: sponsored_siblings_within_total },
    Rule { name: "born_within_gestation", when: both_death_and_birth_dates_valid, check: born_within_gestation },
    Rule { name: "young_enough_to_join", when: birth_date_valid, check: young_enough_to_join },
    Rule { name: "can_be_inactivated", when: persisted, check: can_be_inactivated },
];

// Guards

fn father_deceased(o: &Orphan, _: &ValidationContext) -> bool {
    o.is_father_deceased()
}

fn father_not_deceased(o: &Orphan, _: &ValidationContext) -> bool {
    !o.is_father_deceased()
}

fn birth_date_valid(o: &Orphan, _: &ValidationContext) -> bool {
    o.date_of_birth.as_ref().and_then(|d| d.as_date()).is_some()
}

fn both_death_and_birth_dates_valid(o: &Orphan, ctx: &ValidationContext) -> bool {
    o.is_father_deceased()
        && birth_date_valid(o, ctx)
        && o.father_date_of_death.as_ref().and_then(|d| d.as_date()).is_some()
}

fn new_record_with_list(o: &Orphan, ctx: &ValidationContext) -> bool {
    ctx.is_new_record() && o.orphan_list_id.is_some()
}

fn persisted(_: &Orphan, ctx: &ValidationContext) -> bool {
    !ctx.is_new_record()
}

// Checks

fn name_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "name", &o.name);
}

fn identity_unique(_: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    if ctx.identity_taken {
        errors.add("name", messages::IDENTITY_TAKEN);
    }
}

fn father_given_name_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "father_given_name", &o.father_given_name);
}

fn family_name_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "family_name", &o.family_name);
}

fn father_flags_set(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_boolean(errors, "father_deceased", o.father_deceased);
    rules::require_boolean(errors, "father_is_martyr", o.father_is_martyr);
}

fn father_death_recorded(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_past_date(
        errors,
        "father_date_of_death",
        o.father_date_of_death.as_ref(),
        ctx.today,
    );
}

fn father_death_absent(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_absent(errors, "father_date_of_death", o.father_date_of_death.as_ref());
    rules::require_absent(errors, "father_place_of_death", o.father_place_of_death.as_ref());
    rules::require_absent(errors, "father_cause_of_death", o.father_cause_of_death.as_ref());
    if o.father_is_martyr == Some(true) {
        errors.add("father_is_martyr", messages::MARTYR_REQUIRES_DEATH);
    }
}

fn mother_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "mother_name", &o.mother_name);
    rules::require_boolean(errors, "mother_alive", o.mother_alive);
}

fn date_of_birth_valid(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_past_date(errors, "date_of_birth", o.date_of_birth.as_ref(), ctx.today);
}

fn gender_listed(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_listed(errors, "gender", o.gender.as_deref(), &ctx.genders);
}

fn contact_number_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "contact_number", &o.contact_number);
}

fn sponsored_by_another_org_set(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_boolean(errors, "sponsored_by_another_org", o.sponsored_by_another_org);
}

fn sibling_counts_non_negative(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_non_negative(errors, "minor_siblings_count", o.minor_siblings_count);
    rules::require_non_negative(
        errors,
        "sponsored_minor_siblings_count",
        o.sponsored_minor_siblings_count,
    );
}

fn addresses_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_present(errors, "original_address", o.original_address.as_ref());
    rules::require_present(errors, "current_address", o.current_address.as_ref());
}

fn priority_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_present(errors, "priority", o.priority.as_ref());
}

fn orphan_list_present(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_present(errors, "orphan_list", o.orphan_list_id.as_ref());
}

fn province_code_resolved(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    rules::require_present(errors, "province_code", o.province_code.as_ref());
}

fn sponsored_siblings_within_total(o: &Orphan, _: &ValidationContext, errors: &mut ValidationErrors) {
    let total = o.minor_siblings_count.unwrap_or(0);
    let sponsored = o.sponsored_minor_siblings_count.unwrap_or(0);
    if sponsored > total {
        errors.add("sponsored_minor_siblings_count", messages::SIBLINGS_EXCEED);
    }
}

fn born_within_gestation(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let dates = (
        o.date_of_birth.as_ref().and_then(|d| d.as_date()),
        o.father_date_of_death.as_ref().and_then(|d| d.as_date()),
    );
    if let (Some(born), Some(died)) = dates {
        if !born_within_years_of(born, died, ctx.policy.valid_gestation_years) {
            errors.add("date_of_birth", ctx.policy.gestation_message());
        }
    }
}

fn young_enough_to_join(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    if let Some(born) = o.date_of_birth.as_ref().and_then(|d| d.as_date()) {
        let join_date = ctx.join_date(o);
        if reached_age_by(born, ctx.policy.age_of_eligibility_to_join, join_date) {
            errors.add("date_of_birth", ctx.policy.too_old_message());
        }
    }
}

/// Reads the sponsorship status as it stands before any status-driven
/// recomputation of this update.
fn can_be_inactivated(o: &Orphan, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    if o.is_sponsored() && ctx.changed_from(o) == Some(OrphanStatus::Active) {
        errors.add("status", messages::CANNOT_INACTIVATE);
    }
}
