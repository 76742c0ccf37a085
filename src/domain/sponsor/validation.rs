//! Sponsor validation rules.

use chrono::NaiveDate;

use crate::domain::foundation::rules::{self, always, evaluate, Rule};
use crate::domain::foundation::ValidationErrors;

use super::Sponsor;

pub mod messages {
    pub use crate::domain::foundation::rules::messages::*;

    pub const UNAFFILIATED: &str = "must belong to a branch or an organization";
    pub const DOUBLY_AFFILIATED: &str = "cannot belong to both a branch and an organization";
    pub const CODE_OUT_OF_RANGE: &str = "code must be between 00 and 99";
}

#[derive(Debug, Clone)]
pub struct SponsorValidationContext {
    pub today: NaiveDate,
    pub genders: Vec<String>,
}

impl SponsorValidationContext {
    pub fn new(today: NaiveDate, genders: Vec<String>) -> Self {
        Self { today, genders }
    }
}

pub fn validate(sponsor: &Sponsor, ctx: &SponsorValidationContext) -> ValidationErrors {
    evaluate(RULES, sponsor, ctx)
}

type SponsorRule = Rule<Sponsor, SponsorValidationContext>;

pub const RULES: &[SponsorRule] = &[
    Rule { name: "name_present", when: always, check: name_present },
    Rule { name: "country_present", when: always, check: country_present },
    Rule { name: "sponsor_type_present", when: always, check: sponsor_type_present },
    Rule { name: "requested_orphan_count_positive", when: always, check: requested_orphan_count_positive },
    Rule { name: "gender_listed", when: always, check: gender_listed },
    Rule { name: "start_date_valid", when: always, check: start_date_valid },
    Rule { name: "affiliation_numbered", when: always, check: affiliation_numbered },
];

fn name_present(s: &Sponsor, _: &SponsorValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "name", &s.name);
}

fn country_present(s: &Sponsor, _: &SponsorValidationContext, errors: &mut ValidationErrors) {
    rules::require_text(errors, "country", &s.country);
}

fn sponsor_type_present(s: &Sponsor, _: &SponsorValidationContext, errors: &mut ValidationErrors) {
    rules::require_present(errors, "sponsor_type", s.sponsor_type.as_ref());
}

fn requested_orphan_count_positive(
    s: &Sponsor,
    _: &SponsorValidationContext,
    errors: &mut ValidationErrors,
) {
    match s.requested_orphan_count {
        None => errors.add("requested_orphan_count", messages::BLANK),
        Some(n) if n <= 0 => errors.add("requested_orphan_count", messages::NOT_POSITIVE),
        Some(_) => {}
    }
}

fn gender_listed(s: &Sponsor, ctx: &SponsorValidationContext, errors: &mut ValidationErrors) {
    rules::require_listed(errors, "gender", s.gender.as_deref(), &ctx.genders);
}

fn start_date_valid(s: &Sponsor, ctx: &SponsorValidationContext, errors: &mut ValidationErrors) {
    rules::require_past_date(errors, "start_date", s.start_date.as_ref(), ctx.today);
}

fn affiliation_numbered(s: &Sponsor, _: &SponsorValidationContext, errors: &mut ValidationErrors) {
    if let Err(found) = s.numbering() {
        for error in found {
            errors.add(error.field, error.message);
        }
    }
}
