//! Sponsorship side effects of an orphan status change.

use super::{OrphanStatus, SponsorshipStatus};

/// What an update must do to `sponsorship_status` after a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorshipTransition {
    /// Leave sponsorship status as it is.
    Unchanged,

    /// Recompute sponsorship status from the orphan's sponsorship history.
    ResolveFromHistory,

    /// Suspend sponsorship while the orphan is not active.
    PlaceOnHold,
}

impl SponsorshipTransition {
    pub fn plan(previous: OrphanStatus, next: OrphanStatus) -> Self {
        if previous == next {
            return Self::Unchanged;
        }
        if next.is_active() {
            Self::ResolveFromHistory
        } else if previous.is_active() {
            Self::PlaceOnHold
        } else {
            Self::Unchanged
        }
    }

    /// The status to store when no history lookup is needed.
    pub fn fixed_status(&self) -> Option<SponsorshipStatus> {
        match self {
            Self::PlaceOnHold => Some(SponsorshipStatus::SponsorshipOnHold),
            Self::Unchanged | Self::ResolveFromHistory => None,
        }
    }

    pub fn needs_history(&self) -> bool {
        matches!(self, Self::ResolveFromHistory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrphanStatus::*;

    #[test]
    fn same_status_changes_nothing() {
        for status in [Active, Inactive, OnHold, UnderRevision] {
            assert_eq!(
                SponsorshipTransition::plan(status, status),
                SponsorshipTransition::Unchanged
            );
        }
    }

    #[test]
    fn reactivation_resolves_from_history() {
        for previous in [Inactive, OnHold, UnderRevision] {
            let plan = SponsorshipTransition::plan(previous, Active);
            assert_eq!(plan, SponsorshipTransition::ResolveFromHistory);
            assert!(plan.needs_history());
        }
    }

    #[test]
    fn leaving_active_places_sponsorship_on_hold() {
        for next in [Inactive, OnHold, UnderRevision] {
            let plan = SponsorshipTransition::plan(Active, next);
            assert_eq!(plan, SponsorshipTransition::PlaceOnHold);
            assert_eq!(plan.fixed_status(), Some(SponsorshipStatus::SponsorshipOnHold));
        }
    }

    #[test]
    fn moves_between_inactive_states_change_nothing() {
        assert_eq!(
            SponsorshipTransition::plan(OnHold, UnderRevision),
            SponsorshipTransition::Unchanged
        );
        assert_eq!(
            SponsorshipTransition::plan(Inactive, OnHold),
            SponsorshipTransition::Unchanged
        );
    }
}
