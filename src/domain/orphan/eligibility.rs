//! Composable orphan queries and the sponsorship eligibility ordering.
//!
//! An [`OrphanQuery`] is a conjunction of predicates plus an optional order.
//! In-memory adapters evaluate it with [`OrphanQuery::apply`]; the Postgres
//! adapter translates the same query to SQL, building its ranking clause from
//! [`SponsorshipStatus::eligibility_rank`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Orphan, Priority, SponsorshipStatus};

/// Result ordering of an orphan search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanOrder {
    /// Store order.
    #[default]
    Unordered,

    /// Previously sponsored first, then unsponsored; within each, by priority.
    Eligibility,
}

/// Filter and order over orphans. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanQuery {
    pub active: bool,
    pub currently_unsponsored: bool,
    pub high_priority: bool,
    pub order: OrphanOrder,
}

impl OrphanQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn currently_unsponsored(mut self) -> Self {
        self.currently_unsponsored = true;
        self
    }

    pub fn high_priority(mut self) -> Self {
        self.high_priority = true;
        self
    }

    /// Active, currently unsponsored orphans in eligibility order.
    pub fn sort_by_eligibility() -> Self {
        Self {
            active: true,
            currently_unsponsored: true,
            high_priority: false,
            order: OrphanOrder::Eligibility,
        }
    }

    pub fn matches(&self, orphan: &Orphan) -> bool {
        (!self.active || orphan.is_active())
            && (!self.currently_unsponsored || orphan.sponsorship_status.is_currently_unsponsored())
            && (!self.high_priority || orphan.priority.is_some_and(|p| p.is_high()))
    }

    /// Filters and orders `orphans`. Sorting is stable, so ties keep their
    /// input order.
    pub fn apply(&self, orphans: impl IntoIterator<Item = Orphan>) -> Vec<Orphan> {
        let mut matched: Vec<Orphan> = orphans.into_iter().filter(|o| self.matches(o)).collect();
        if self.order == OrphanOrder::Eligibility {
            matched.sort_by(eligibility_order);
        }
        matched
    }
}

/// Compares two orphans by eligibility rank, then by priority text
/// ascending. Unranked statuses and missing priorities sort last.
pub fn eligibility_order(a: &Orphan, b: &Orphan) -> Ordering {
    rank_key(a.sponsorship_status)
        .cmp(&rank_key(b.sponsorship_status))
        .then_with(|| priority_key(a.priority).cmp(&priority_key(b.priority)))
}

fn rank_key(status: SponsorshipStatus) -> (bool, u8) {
    match status.eligibility_rank() {
        Some(rank) => (false, rank),
        None => (true, 0),
    }
}

fn priority_key(priority: Option<Priority>) -> (bool, &'static str) {
    match priority {
        Some(p) => (false, p.as_str()),
        None => (true, ""),
    }
}
