use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{EligibilityCriteria, Grant, GrantCategory, GrantId, GrantStatus};
use super::scoring::{ScoreBand, ScoreComponent, ScoringWeights};
use super::stats::DashboardStats;
use super::urgency::{self, UrgencyTier};

/// Zero-decimal USD with thousands separators, e.g. `$1,234,567`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

/// Card-level projection of one grant for list rendering.
#[derive(Debug, Clone, Serialize)]
pub struct GrantSummaryView {
    pub id: GrantId,
    pub title: String,
    pub funder: String,
    pub category: GrantCategory,
    pub category_label: String,
    pub status: GrantStatus,
    pub status_label: String,
    pub deadline: NaiveDate,
    pub days_until: i64,
    pub urgency: UrgencyTier,
    pub urgency_label: String,
    pub award_min: u64,
    pub award_max: u64,
    pub award_label: String,
    pub overall_score: u8,
    pub score_band: ScoreBand,
    pub score_band_label: String,
}

impl GrantSummaryView {
    pub fn for_grant(grant: &Grant, today: NaiveDate) -> Self {
        let outlook = urgency::classify(grant.deadline, today);
        let band = ScoreBand::from_score(grant.scores.overall);
        Self {
            id: grant.id.clone(),
            title: grant.title.clone(),
            funder: grant.funder.clone(),
            category: grant.category,
            category_label: grant.category.label().to_string(),
            status: grant.status,
            status_label: grant.status.label().to_string(),
            deadline: grant.deadline,
            days_until: outlook.days_until,
            urgency: outlook.tier,
            urgency_label: outlook.tier.label().to_string(),
            award_min: grant.award.min,
            award_max: grant.award.max,
            award_label: format!(
                "{} - {}",
                format_usd(grant.award.min),
                format_usd(grant.award.max)
            ),
            overall_score: grant.scores.overall,
            score_band: band,
            score_band_label: band.label().to_string(),
        }
    }
}

/// Full projection of one grant for the detail surface, including the
/// weighted score breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct GrantDetailView {
    #[serde(flatten)]
    pub summary: GrantSummaryView,
    pub description: String,
    pub source_url: String,
    pub source_reliability_label: String,
    pub last_updated: NaiveDate,
    pub eligibility: EligibilityCriteria,
    pub score_breakdown: Vec<ScoreComponent>,
}

impl GrantDetailView {
    pub fn for_grant(grant: &Grant, weights: &ScoringWeights, today: NaiveDate) -> Self {
        Self {
            summary: GrantSummaryView::for_grant(grant, today),
            description: grant.description.clone(),
            source_url: grant.source_url.clone(),
            source_reliability_label: grant.source_reliability.label().to_string(),
            last_updated: grant.last_updated,
            eligibility: grant.eligibility.clone(),
            score_breakdown: grant.scores.components(weights),
        }
    }
}

/// Dashboard counters with the funding total pre-formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatsView {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub potential_funding_label: String,
}

impl DashboardStatsView {
    pub fn for_stats(stats: DashboardStats) -> Self {
        let potential_funding_label = format_usd(stats.potential_funding);
        Self {
            stats,
            potential_funding_label,
        }
    }
}
