//! Sponsorship entity and history rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, OrphanId, SponsorId, SponsorshipId};
use crate::domain::orphan::SponsorshipStatus;

/// A sponsor funding an orphan. Ended sponsorships are kept as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsorship {
    pub id: SponsorshipId,
    pub sponsor_id: SponsorId,
    pub orphan_id: OrphanId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl Sponsorship {
    pub fn start(sponsor_id: SponsorId, orphan_id: OrphanId, start_date: NaiveDate) -> Self {
        Self {
            id: SponsorshipId::new(),
            sponsor_id,
            orphan_id,
            start_date,
            end_date: None,
            active: true,
        }
    }

    /// Ends the sponsorship on `end_date`.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if it already ended or `end_date` is before
    /// the start date.
    pub fn end(&mut self, end_date: NaiveDate) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Sponsorship {} has already ended", self.id),
            ));
        }
        if end_date < self.start_date {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Sponsorship cannot end before it starts",
            ));
        }
        self.active = false;
        self.end_date = Some(end_date);
        Ok(())
    }
}

/// Sponsorship status implied by an orphan's sponsorship records.
pub fn status_from_history(history: &[Sponsorship]) -> SponsorshipStatus {
    if history.iter().any(|s| s.active) {
        SponsorshipStatus::Sponsored
    } else if history.is_empty() {
        SponsorshipStatus::Unsponsored
    } else {
        SponsorshipStatus::PreviouslySponsored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn started() -> Sponsorship {
        Sponsorship::start(SponsorId::new(), OrphanId::new(), date(2014, 1, 1))
    }

    #[test]
    fn ending_records_the_end_date() {
        let mut sponsorship = started();
        sponsorship.end(date(2015, 1, 1)).unwrap();
        assert!(!sponsorship.active);
        assert_eq!(sponsorship.end_date, Some(date(2015, 1, 1)));
    }

    #[test]
    fn cannot_end_twice_or_before_start() {
        let mut sponsorship = started();
        assert!(sponsorship.end(date(2013, 12, 31)).is_err());
        sponsorship.end(date(2015, 1, 1)).unwrap();
        let err = sponsorship.end(date(2015, 2, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn history_determines_status() {
        assert_eq!(status_from_history(&[]), SponsorshipStatus::Unsponsored);

        let mut ended = started();
        ended.end(date(2015, 1, 1)).unwrap();
        assert_eq!(
            status_from_history(&[ended.clone()]),
            SponsorshipStatus::PreviouslySponsored
        );

        assert_eq!(
            status_from_history(&[ended, started()]),
            SponsorshipStatus::Sponsored
        );
    }
}
