//! Orphan classification enums: activity status, sponsorship status, priority.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Whether the charity is actively working with an orphan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanStatus {
    Active,
    Inactive,
    OnHold,
    UnderRevision,
}

impl OrphanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrphanStatus::Active => "active",
            OrphanStatus::Inactive => "inactive",
            OrphanStatus::OnHold => "on_hold",
            OrphanStatus::UnderRevision => "under_revision",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, OrphanStatus::Active)
    }
}

impl fmt::Display for OrphanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrphanStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(OrphanStatus::Active),
            "inactive" => Ok(OrphanStatus::Inactive),
            "on_hold" => Ok(OrphanStatus::OnHold),
            "under_revision" => Ok(OrphanStatus::UnderRevision),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown orphan status '{}'", other),
            )),
        }
    }
}

/// Where an orphan stands with respect to sponsorship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorshipStatus {
    Unsponsored,
    Sponsored,
    PreviouslySponsored,
    SponsorshipOnHold,
}

impl SponsorshipStatus {
    pub const ALL: [SponsorshipStatus; 4] = [
        SponsorshipStatus::Unsponsored,
        SponsorshipStatus::Sponsored,
        SponsorshipStatus::PreviouslySponsored,
        SponsorshipStatus::SponsorshipOnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorshipStatus::Unsponsored => "unsponsored",
            SponsorshipStatus::Sponsored => "sponsored",
            SponsorshipStatus::PreviouslySponsored => "previously_sponsored",
            SponsorshipStatus::SponsorshipOnHold => "sponsorship_on_hold",
        }
    }

    /// True for orphans without a running sponsorship who may be matched
    /// with a new sponsor.
    pub fn is_currently_unsponsored(&self) -> bool {
        matches!(
            self,
            SponsorshipStatus::Unsponsored | SponsorshipStatus::PreviouslySponsored
        )
    }

    /// Position in the new-sponsorship queue. Orphans who lost a sponsor are
    /// placed ahead of those who never had one; other statuses are not queued.
    pub fn eligibility_rank(&self) -> Option<u8> {
        match self {
            SponsorshipStatus::PreviouslySponsored => Some(1),
            SponsorshipStatus::Unsponsored => Some(2),
            SponsorshipStatus::Sponsored | SponsorshipStatus::SponsorshipOnHold => None,
        }
    }
}

impl fmt::Display for SponsorshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorshipStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SponsorshipStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "sponsorship_status",
                    format!("unknown sponsorship status '{}'", s),
                )
            })
    }
}

/// Handling priority of an orphan's case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Stored label. Queue ordering compares these labels as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Priority::Normal),
            "High" => Ok(Priority::High),
            other => Err(ValidationError::invalid_format(
                "priority",
                format!("'{}' is not one of Normal, High", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currently_unsponsored_covers_unsponsored_and_previously_sponsored() {
        assert!(SponsorshipStatus::Unsponsored.is_currently_unsponsored());
        assert!(SponsorshipStatus::PreviouslySponsored.is_currently_unsponsored());
        assert!(!SponsorshipStatus::Sponsored.is_currently_unsponsored());
        assert!(!SponsorshipStatus::SponsorshipOnHold.is_currently_unsponsored());
    }

    #[test]
    fn previously_sponsored_ranks_ahead_of_unsponsored() {
        let previously = SponsorshipStatus::PreviouslySponsored.eligibility_rank();
        let never = SponsorshipStatus::Unsponsored.eligibility_rank();
        assert_eq!(previously, Some(1));
        assert_eq!(never, Some(2));
        assert_eq!(SponsorshipStatus::Sponsored.eligibility_rank(), None);
    }

    #[test]
    fn ranked_statuses_are_exactly_the_currently_unsponsored_ones() {
        for status in SponsorshipStatus::ALL {
            assert_eq!(
                status.eligibility_rank().is_some(),
                status.is_currently_unsponsored(),
                "{:?}",
                status
            );
        }
    }

    #[test]
    fn statuses_parse_from_stored_labels() {
        assert_eq!("on_hold".parse::<OrphanStatus>().unwrap(), OrphanStatus::OnHold);
        assert_eq!(
            "sponsorship_on_hold".parse::<SponsorshipStatus>().unwrap(),
            SponsorshipStatus::SponsorshipOnHold
        );
        assert!("retired".parse::<OrphanStatus>().is_err());
    }

    #[test]
    fn priority_accepts_only_normal_and_high() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("Urgent".parse::<Priority>().is_err());
        assert!("high".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_serializes_with_capitalized_labels() {
        assert_eq!(serde_json::to_string(&Priority::Normal).unwrap(), "\"Normal\"");
        assert_eq!(
            serde_json::to_string(&SponsorshipStatus::PreviouslySponsored).unwrap(),
            "\"previously_sponsored\""
        );
    }
}
