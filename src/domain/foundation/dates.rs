//! Calendar date inputs and the pure date predicates the eligibility rules use.
//!
//! Dates reach the domain as raw admin input. A value that cannot be read as
//! a calendar day is kept as [`DateValue::Invalid`] so the date-validity rule
//! can report it once, while every date-dependent rule simply skips it.

use chrono::{Months, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted textual layout for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date attribute as submitted: either a real calendar day or the raw
/// input that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Valid(NaiveDate),
    Invalid(String),
}

impl DateValue {
    /// Parses `raw` as an ISO-8601 calendar date.
    pub fn parse(raw: &str) -> Self {
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => DateValue::Valid(date),
            Err(_) => DateValue::Invalid(raw.to_string()),
        }
    }

    /// The calendar day, when the input was valid.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Valid(date) => Some(*date),
            DateValue::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateValue::Valid(_))
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Valid(date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Valid(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            DateValue::Invalid(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DateValueVisitor;

impl<'de> Visitor<'de> for DateValueVisitor {
    type Value = DateValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a date string or scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DateValue, E> {
        Ok(DateValue::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DateValue, E> {
        Ok(DateValue::Invalid(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DateValue, E> {
        Ok(DateValue::Invalid(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<DateValue, E> {
        Ok(DateValue::Invalid(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<DateValue, E> {
        Ok(DateValue::Invalid(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateValueVisitor)
    }
}

/// Adds whole calendar years, clamping Feb 29 to Feb 28 in common years.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.saturating_mul(12)))
}

/// True if `date` falls strictly after `today`.
pub fn is_in_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// True once someone born on `date_of_birth` has reached `max_age` years by
/// `join_date`.
pub fn reached_age_by(date_of_birth: NaiveDate, max_age: u32, join_date: NaiveDate) -> bool {
    match add_years(date_of_birth, max_age) {
        Some(limit) => limit <= join_date,
        None => false,
    }
}

/// True if `date_of_birth` is no later than `years` after `father_date_of_death`.
pub fn born_within_years_of(
    date_of_birth: NaiveDate,
    father_date_of_death: NaiveDate,
    years: u32,
) -> bool {
    match add_years(father_date_of_death, years) {
        Some(limit) => date_of_birth <= limit,
        None => true,
    }
}
