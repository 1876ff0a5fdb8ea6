use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scoring::GrantScores;

/// Identifier wrapper for catalogued funding opportunities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantId(pub String);

/// Closed set of funding domains tracked by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantCategory {
    Research,
    Nonprofit,
    Education,
    Technology,
    Healthcare,
    Environment,
    Arts,
    Community,
}

impl GrantCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Research,
            Self::Nonprofit,
            Self::Education,
            Self::Technology,
            Self::Healthcare,
            Self::Environment,
            Self::Arts,
            Self::Community,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Nonprofit => "Nonprofit",
            Self::Education => "Education",
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Environment => "Environment",
            Self::Arts => "Arts",
            Self::Community => "Community",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Nonprofit => "nonprofit",
            Self::Education => "education",
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Environment => "environment",
            Self::Arts => "arts",
            Self::Community => "community",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.slug() == value.trim().to_ascii_lowercase())
    }
}

/// Lifecycle state of a grant within the discovery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantStatus {
    New,
    Reviewing,
    Applying,
    Submitted,
    Archived,
}

impl GrantStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::Reviewing,
            Self::Applying,
            Self::Submitted,
            Self::Archived,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Reviewing => "Reviewing",
            Self::Applying => "Applying",
            Self::Submitted => "Submitted",
            Self::Archived => "Archived",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Reviewing => "reviewing",
            Self::Applying => "applying",
            Self::Submitted => "submitted",
            Self::Archived => "archived",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.slug() == value.trim().to_ascii_lowercase())
    }
}

/// Trust tier of the upstream listing the grant was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceReliability {
    Official,
    Verified,
    Unverified,
}

impl SourceReliability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Official => "Official",
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Verified => "verified",
            Self::Unverified => "unverified",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        [Self::Official, Self::Verified, Self::Unverified]
            .into_iter()
            .find(|tier| tier.slug() == value.trim().to_ascii_lowercase())
    }
}

/// Advertised award window in whole currency units. The engine never
/// validates `min <= max`; malformed ranges flow through as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRange {
    pub min: u64,
    pub max: u64,
}

/// Structured eligibility constraints published by the funder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub organization_types: Vec<String>,
    pub geographic_restrictions: Vec<String>,
    pub funding_uses: Vec<String>,
    pub requirements: Vec<String>,
    pub matching_funds_required: bool,
}

/// One funding opportunity as supplied by the external data source. Records
/// are read-only for the duration of a query; the engine only derives
/// filtered and sorted views from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub id: GrantId,
    pub title: String,
    pub funder: String,
    pub description: String,
    pub source_url: String,
    pub source_reliability: SourceReliability,
    pub award: AwardRange,
    pub deadline: NaiveDate,
    pub last_updated: NaiveDate,
    pub category: GrantCategory,
    pub status: GrantStatus,
    pub eligibility: EligibilityCriteria,
    pub scores: GrantScores,
}
