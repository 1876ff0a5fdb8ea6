use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Temporal alert tier derived from the days remaining before a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Classification thresholds are inclusive upper bounds. A deadline that
    /// has already passed still classifies as `Critical`; there is no
    /// distinct expired tier (kept intentionally, see the pipeline tests).
    pub const fn from_days_until(days: i64) -> Self {
        if days <= 7 {
            Self::Critical
        } else if days <= 21 {
            Self::High
        } else if days <= 45 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Whole days from `today` to the deadline. Negative once the deadline has
/// passed.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Days remaining plus the derived tier for one deadline evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineOutlook {
    pub days_until: i64,
    pub tier: UrgencyTier,
}

/// Classify a deadline against an explicit reference date. The reference is
/// captured once per call so a single evaluation cannot straddle a day
/// boundary.
pub fn classify(deadline: NaiveDate, today: NaiveDate) -> DeadlineOutlook {
    let days_until = days_until(deadline, today);
    DeadlineOutlook {
        days_until,
        tier: UrgencyTier::from_days_until(days_until),
    }
}

/// Classify against the current local date. Callers that need
/// reproducibility pass an explicit date to [`classify`] instead.
pub fn classify_now(deadline: NaiveDate) -> DeadlineOutlook {
    classify(deadline, Local::now().date_naive())
}
