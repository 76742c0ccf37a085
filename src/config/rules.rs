//! Eligibility rule thresholds

use serde::Deserialize;

use crate::domain::orphan::EligibilityPolicy;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Orphans must be younger than this on the day they join
    #[serde(default = "default_age_of_eligibility")]
    pub age_of_eligibility_to_join: u32,

    /// Maximum years between the father's death and the orphan's birth
    #[serde(default = "default_valid_gestation")]
    pub valid_gestation_years: u32,
}

impl RulesConfig {
    pub fn policy(&self) -> EligibilityPolicy {
        EligibilityPolicy {
            age_of_eligibility_to_join: self.age_of_eligibility_to_join,
            valid_gestation_years: self.valid_gestation_years,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age_of_eligibility_to_join == 0 {
            return Err(ValidationError::InvalidEligibilityAge);
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            age_of_eligibility_to_join: default_age_of_eligibility(),
            valid_gestation_years: default_valid_gestation(),
        }
    }
}

fn default_age_of_eligibility() -> u32 {
    22
}

fn default_valid_gestation() -> u32 {
    1
}
