//! Scoring and filtering engine for the grant catalog.
//!
//! Everything in here is a pure, synchronous computation over
//! caller-supplied records: the engine never performs I/O, never mutates
//! its inputs, and holds no state between calls, so concurrent queries need
//! no coordination.

pub mod domain;
pub mod filter;
pub mod import;
pub mod query;
pub mod sample;
pub mod scoring;
pub mod stats;
pub mod urgency;
pub mod views;

pub use domain::{
    AwardRange, EligibilityCriteria, Grant, GrantCategory, GrantId, GrantStatus, SourceReliability,
};
pub use filter::FilterState;
pub use import::{GrantCsvImporter, GrantImportError};
pub use query::{filter_grants, run_query, sort_grants, QueryError, SortStrategy};
pub use scoring::{
    compute_overall_score, GrantScores, ScoreBand, ScoreComponent, ScoreFactor, ScoringWeights,
    SubScores,
};
pub use stats::DashboardStats;
pub use urgency::{classify, classify_now, days_until, DeadlineOutlook, UrgencyTier};
pub use views::{format_usd, DashboardStatsView, GrantDetailView, GrantSummaryView};
