use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::Grant;
use super::filter::FilterState;

/// Comparator selection for ordering a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Descending composite score.
    #[default]
    Score,
    /// Ascending deadline, soonest first.
    Deadline,
    /// Descending maximum award.
    Amount,
}

impl SortStrategy {
    pub const fn ordered() -> [Self; 3] {
        [Self::Score, Self::Deadline, Self::Amount]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Score => "Match Score",
            Self::Deadline => "Deadline",
            Self::Amount => "Award Amount",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Deadline => "deadline",
            Self::Amount => "amount",
        }
    }
}

impl FromStr for SortStrategy {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|strategy| strategy.slug() == value.trim().to_ascii_lowercase())
            .ok_or_else(|| QueryError::UnknownSortStrategy(value.to_owned()))
    }
}

/// A bad sort selector is a programming mistake at the call site, not a data
/// issue, so it surfaces as an error instead of a silent default.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    UnknownSortStrategy(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::UnknownSortStrategy(value) => {
                write!(
                    f,
                    "unknown sort strategy '{}', expected one of: score, deadline, amount",
                    value
                )
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Grants surviving every filter dimension, in input order.
pub fn filter_grants(grants: &[Grant], filters: &FilterState, today: NaiveDate) -> Vec<Grant> {
    grants
        .iter()
        .filter(|grant| filters.matches(grant, today))
        .cloned()
        .collect()
}

/// A new ordering of the input under the selected strategy. The sort is
/// stable, so ties keep their relative input order; the input itself is
/// never mutated.
pub fn sort_grants(grants: &[Grant], strategy: SortStrategy) -> Vec<Grant> {
    let mut ordered = grants.to_vec();
    match strategy {
        SortStrategy::Score => {
            ordered.sort_by(|a, b| b.scores.overall.cmp(&a.scores.overall));
        }
        SortStrategy::Deadline => {
            ordered.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        }
        SortStrategy::Amount => {
            ordered.sort_by(|a, b| b.award.max.cmp(&a.award.max));
        }
    }
    ordered
}

/// Filter then sort: the full query pipeline. Each call is a fresh snapshot
/// over caller-supplied records; an empty or fully filtered input yields an
/// empty result, never an error.
pub fn run_query(
    grants: &[Grant],
    filters: &FilterState,
    strategy: SortStrategy,
    today: NaiveDate,
) -> Vec<Grant> {
    let surviving = filter_grants(grants, filters, today);
    sort_grants(&surviving, strategy)
}
