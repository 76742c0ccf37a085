//! Tunable thresholds of the orphan eligibility rules.

use serde::{Deserialize, Serialize};

/// Age and gestation limits applied when validating orphans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// Orphans must be younger than this many years on the day they join.
    pub age_of_eligibility_to_join: u32,

    /// Maximum years between the father's death and the orphan's birth.
    pub valid_gestation_years: u32,
}

impl EligibilityPolicy {
    pub fn too_old_message(&self) -> String {
        format!(
            "Orphan must be younger than {} years old to join OSRA.",
            self.age_of_eligibility_to_join
        )
    }

    pub fn gestation_message(&self) -> String {
        format!(
            "must be within {} year(s) of father's death",
            self.valid_gestation_years
        )
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            age_of_eligibility_to_join: 22,
            valid_gestation_years: 1,
        }
    }
}
