//! Declarative validation rules.
//!
//! A rule set is an ordered slice of [`Rule`]s, each pairing a guard with a
//! check. Every rule whose guard holds is run against the same immutable
//! subject and context; violations accumulate and nothing short-circuits.

use chrono::NaiveDate;

use super::{is_in_future, DateValue, ValidationErrors};

/// Standard violation messages shared by every record type.
pub mod messages {
    pub const BLANK: &str = "can't be blank";
    pub const MUST_BE_BLANK: &str = "must be blank";
    pub const NOT_IN_LIST: &str = "is not included in the list";
    pub const NOT_BOOLEAN: &str = "must be true or false";
    pub const INVALID_DATE: &str = "is not a valid date";
    pub const FUTURE_DATE: &str = "can't be in the future";
    pub const NEGATIVE: &str = "must be greater than or equal to 0";
    pub const NOT_POSITIVE: &str = "must be greater than 0";
}

/// One guarded validation rule over subject `S` in context `C`.
pub struct Rule<S, C> {
    pub name: &'static str,
    pub when: fn(&S, &C) -> bool,
    pub check: fn(&S, &C, &mut ValidationErrors),
}

/// Runs every applicable rule in declaration order.
pub fn evaluate<S, C>(rules: &[Rule<S, C>], subject: &S, ctx: &C) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        if (rule.when)(subject, ctx) {
            let before = errors.len();
            (rule.check)(subject, ctx, &mut errors);
            if errors.len() > before {
                tracing::trace!(rule = rule.name, "validation rule failed");
            }
        }
    }
    errors
}

/// Guard for unconditional rules.
pub fn always<S, C>(_: &S, _: &C) -> bool {
    true
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Text must contain something other than whitespace.
pub fn require_text(errors: &mut ValidationErrors, field: &str, value: &str) {
    if is_blank(value) {
        errors.add(field, messages::BLANK);
    }
}

/// Optional text must be present and non-blank.
pub fn require_optional_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if value.map_or(true, is_blank) {
        errors.add(field, messages::BLANK);
    }
}

pub fn require_present<T>(errors: &mut ValidationErrors, field: &str, value: Option<&T>) {
    if value.is_none() {
        errors.add(field, messages::BLANK);
    }
}

/// Optional values must be absent.
pub fn require_absent<T>(errors: &mut ValidationErrors, field: &str, value: Option<&T>) {
    if value.is_some() {
        errors.add(field, messages::MUST_BE_BLANK);
    }
}

/// Tri-state flags must be explicitly true or false.
pub fn require_boolean(errors: &mut ValidationErrors, field: &str, value: Option<bool>) {
    if value.is_none() {
        errors.add(field, messages::NOT_BOOLEAN);
    }
}

/// Date must be present, a real calendar day, and not after `today`.
pub fn require_past_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&DateValue>,
    today: NaiveDate,
) {
    match value {
        None => errors.add(field, messages::BLANK),
        Some(DateValue::Invalid(_)) => errors.add(field, messages::INVALID_DATE),
        Some(DateValue::Valid(date)) if is_in_future(*date, today) => {
            errors.add(field, messages::FUTURE_DATE)
        }
        Some(DateValue::Valid(_)) => {}
    }
}

/// Optional integer must be zero or more when present.
pub fn require_non_negative(errors: &mut ValidationErrors, field: &str, value: Option<i32>) {
    if matches!(value, Some(n) if n < 0) {
        errors.add(field, messages::NEGATIVE);
    }
}

/// Value must belong to the configured lookup list.
pub fn require_listed(errors: &mut ValidationErrors, field: &str, value: Option<&str>, allowed: &[String]) {
    match value {
        None => errors.add(field, messages::BLANK),
        Some(v) if is_blank(v) => errors.add(field, messages::BLANK),
        Some(v) if !allowed.iter().any(|a| a == v) => errors.add(field, messages::NOT_IN_LIST),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Subject {
        count: i32,
        flag: bool,
    }

    fn count_positive(s: &Subject, _: &(), errors: &mut ValidationErrors) {
        if s.count <= 0 {
            errors.add("count", messages::NOT_POSITIVE);
        }
    }

    fn only_when_flagged(s: &Subject, _: &()) -> bool {
        s.flag
    }

    fn flag_must_be_off(_: &Subject, _: &(), errors: &mut ValidationErrors) {
        errors.add("flag", "must be off");
    }

    const RULES: &[Rule<Subject, ()>] = &[
        Rule {
            name: "count_positive",
            when: always,
            check: count_positive,
        },
        Rule {
            name: "flag_must_be_off",
            when: only_when_flagged,
            check: flag_must_be_off,
        },
    ];

    #[test]
    fn evaluate_accumulates_every_failing_rule() {
        let errors = evaluate(RULES, &Subject { count: 0, flag: true }, &());
        assert_eq!(errors.fields(), vec!["count", "flag"]);
    }

    #[test]
    fn evaluate_skips_rules_whose_guard_fails() {
        let errors = evaluate(RULES, &Subject { count: 3, flag: false }, &());
        assert!(errors.is_empty());
    }

    #[test]
    fn require_past_date_reports_one_message_per_problem() {
        let today = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        let mut errors = ValidationErrors::new();

        require_past_date(&mut errors, "missing", None, today);
        require_past_date(&mut errors, "garbage", Some(&DateValue::parse("yes")), today);
        require_past_date(
            &mut errors,
            "tomorrow",
            Some(&DateValue::from(today.succ_opt().unwrap())),
            today,
        );
        require_past_date(&mut errors, "today", Some(&DateValue::from(today)), today);

        assert_eq!(errors.on("missing"), vec![messages::BLANK]);
        assert_eq!(errors.on("garbage"), vec![messages::INVALID_DATE]);
        assert_eq!(errors.on("tomorrow"), vec![messages::FUTURE_DATE]);
        assert!(errors.on("today").is_empty());
    }

    #[test]
    fn require_listed_distinguishes_blank_from_unknown() {
        let allowed = vec!["Male".to_string(), "Female".to_string()];
        let mut errors = ValidationErrors::new();

        require_listed(&mut errors, "a", None, &allowed);
        require_listed(&mut errors, "b", Some("Other"), &allowed);
        require_listed(&mut errors, "c", Some("Female"), &allowed);

        assert_eq!(errors.on("a"), vec![messages::BLANK]);
        assert_eq!(errors.on("b"), vec![messages::NOT_IN_LIST]);
        assert!(errors.on("c").is_empty());
    }

    #[test]
    fn require_non_negative_ignores_absent_values() {
        let mut errors = ValidationErrors::new();
        require_non_negative(&mut errors, "n", None);
        require_non_negative(&mut errors, "n", Some(0));
        assert!(errors.is_empty());
        require_non_negative(&mut errors, "n", Some(-1));
        assert_eq!(errors.on("n"), vec![messages::NEGATIVE]);
    }
}
