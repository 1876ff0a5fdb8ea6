use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Grant, GrantCategory, GrantStatus};
use super::urgency;

/// Declarative query constraints. Empty category and status sets pass every
/// grant; `max_amount: None` leaves the award window unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub categories: Vec<GrantCategory>,
    pub min_amount: u64,
    pub max_amount: Option<u64>,
    pub deadline_within_days: i64,
    pub min_score: u8,
    pub statuses: Vec<GrantStatus>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            min_amount: 0,
            max_amount: None,
            deadline_within_days: 365,
            min_score: 0,
            statuses: Vec::new(),
        }
    }
}

impl FilterState {
    /// Everything except archived grants.
    pub fn active() -> Self {
        Self {
            statuses: vec![
                GrantStatus::New,
                GrantStatus::Reviewing,
                GrantStatus::Applying,
                GrantStatus::Submitted,
            ],
            ..Self::default()
        }
    }

    /// Grants whose deadline falls within the next three weeks.
    pub fn urgent() -> Self {
        Self {
            deadline_within_days: 21,
            ..Self::active()
        }
    }

    /// Grants with an application currently being worked.
    pub fn in_progress() -> Self {
        Self {
            statuses: vec![GrantStatus::Reviewing, GrantStatus::Applying],
            ..Self::default()
        }
    }

    /// Whether the grant survives every active filter dimension. Dimensions
    /// are independent predicates combined with AND.
    pub fn matches(&self, grant: &Grant, today: NaiveDate) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&grant.category) {
            return false;
        }

        // The lower bound is checked against the grant's maximum award and
        // the upper bound against its minimum, so any grant whose range
        // overlaps the filter window passes, not just contained ranges.
        if grant.award.max < self.min_amount {
            return false;
        }
        if let Some(cap) = self.max_amount {
            if grant.award.min > cap {
                return false;
            }
        }

        if urgency::days_until(grant.deadline, today) > self.deadline_within_days {
            return false;
        }

        if grant.scores.overall < self.min_score {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&grant.status) {
            return false;
        }

        true
    }

    /// Number of dimensions that deviate from the defaults, for badge-style
    /// summaries of how constrained a query is.
    pub fn active_dimensions(&self) -> usize {
        let mut count = self.categories.len();
        if self.min_amount > 0 {
            count += 1;
        }
        if self.max_amount.is_some() {
            count += 1;
        }
        if self.deadline_within_days < 365 {
            count += 1;
        }
        if self.min_score > 0 {
            count += 1;
        }
        count += self.statuses.len();
        count
    }
}
