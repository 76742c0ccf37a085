//! Rule inputs shared by the handlers.

use crate::config::{LookupConfig, RulesConfig};
use crate::domain::orphan::EligibilityPolicy;

/// Lookup lists and thresholds the validation rules read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSettings {
    pub genders: Vec<String>,
    pub policy: EligibilityPolicy,
}

impl RuleSettings {
    pub fn new(genders: Vec<String>, policy: EligibilityPolicy) -> Self {
        Self { genders, policy }
    }

    /// Expects `lookup` to be resolved already (see [`LookupConfig::resolve`]).
    pub fn from_config(rules: &RulesConfig, lookup: &LookupConfig) -> Self {
        Self {
            genders: lookup.genders.clone(),
            policy: rules.policy(),
        }
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default(), &LookupConfig::default())
    }
}
