use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Grant, GrantStatus};
use super::urgency;

/// Deadlines inside this window count toward the urgent-deadline stat.
pub const URGENT_WINDOW_DAYS: i64 = 14;
/// Composite score from which a grant counts as a high match.
pub const HIGH_MATCH_THRESHOLD: u8 = 75;

/// Aggregate counters shown on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_grants: usize,
    pub new_grants: usize,
    pub urgent_deadlines: usize,
    pub high_match: usize,
    pub in_progress: usize,
    pub average_score: u8,
    pub potential_funding: u64,
}

impl DashboardStats {
    pub fn from_grants(grants: &[Grant], today: NaiveDate) -> Self {
        let urgent_deadlines = grants
            .iter()
            .filter(|grant| urgency::days_until(grant.deadline, today) <= URGENT_WINDOW_DAYS)
            .count();
        let high_match = grants
            .iter()
            .filter(|grant| grant.scores.overall >= HIGH_MATCH_THRESHOLD)
            .count();
        let new_grants = grants
            .iter()
            .filter(|grant| grant.status == GrantStatus::New)
            .count();
        let in_progress = grants
            .iter()
            .filter(|grant| grant.status == GrantStatus::Applying)
            .count();
        let potential_funding = grants.iter().map(|grant| grant.award.max).sum();

        let average_score = if grants.is_empty() {
            0
        } else {
            let sum: u32 = grants
                .iter()
                .map(|grant| u32::from(grant.scores.overall))
                .sum();
            (sum as f32 / grants.len() as f32).round() as u8
        };

        Self {
            total_grants: grants.len(),
            new_grants,
            urgent_deadlines,
            high_match,
            in_progress,
            average_score,
            potential_funding,
        }
    }
}
