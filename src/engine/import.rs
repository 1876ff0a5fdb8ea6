use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::domain::{
    AwardRange, EligibilityCriteria, Grant, GrantCategory, GrantId, GrantStatus, SourceReliability,
};
use super::scoring::{GrantScores, ScoringWeights, SubScores};

#[derive(Debug)]
pub enum GrantImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidField {
        row: u64,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for GrantImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrantImportError::Io(err) => write!(f, "failed to read grant catalog: {}", err),
            GrantImportError::Csv(err) => write!(f, "invalid grant catalog CSV: {}", err),
            GrantImportError::InvalidField { row, field, value } => {
                write!(f, "row {}: invalid {} value '{}'", row, field, value)
            }
        }
    }
}

impl std::error::Error for GrantImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrantImportError::Io(err) => Some(err),
            GrantImportError::Csv(err) => Some(err),
            GrantImportError::InvalidField { .. } => None,
        }
    }
}

impl From<std::io::Error> for GrantImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for GrantImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct GrantRow {
    id: String,
    title: String,
    funder: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source_url: String,
    source_reliability: String,
    award_min: u64,
    award_max: u64,
    deadline: String,
    last_updated: String,
    category: String,
    status: String,
    #[serde(default)]
    organization_types: String,
    #[serde(default)]
    geographic_restrictions: String,
    #[serde(default)]
    funding_uses: String,
    #[serde(default)]
    requirements: String,
    #[serde(default)]
    matching_funds: String,
    eligibility_fit: u8,
    deadline_urgency: u8,
    award_size: u8,
    effort_level: u8,
    strategic_fit: u8,
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "0" => Some(false),
        "true" | "yes" | "1" => Some(true),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Maps grant catalog CSV exports onto [`Grant`] records. The composite
/// score is always recomputed from the imported sub-scores under the active
/// weight set; any composite column in the export is ignored.
pub struct GrantCsvImporter;

impl GrantCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        weights: &ScoringWeights,
    ) -> Result<Vec<Grant>, GrantImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, weights)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        weights: &ScoringWeights,
    ) -> Result<Vec<Grant>, GrantImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut grants = Vec::new();
        for (index, record) in csv_reader.deserialize::<GrantRow>().enumerate() {
            let row = record?;
            // Header occupies line 1, so data rows start at 2.
            grants.push(Self::convert(row, (index + 2) as u64, weights)?);
        }

        Ok(grants)
    }

    fn convert(
        row: GrantRow,
        line: u64,
        weights: &ScoringWeights,
    ) -> Result<Grant, GrantImportError> {
        let invalid = |field: &'static str, value: &str| GrantImportError::InvalidField {
            row: line,
            field,
            value: value.to_owned(),
        };

        let category = GrantCategory::from_slug(&row.category)
            .ok_or_else(|| invalid("category", &row.category))?;
        let status =
            GrantStatus::from_slug(&row.status).ok_or_else(|| invalid("status", &row.status))?;
        let source_reliability = SourceReliability::from_slug(&row.source_reliability)
            .ok_or_else(|| invalid("source_reliability", &row.source_reliability))?;
        let deadline =
            parse_date(&row.deadline).ok_or_else(|| invalid("deadline", &row.deadline))?;
        let last_updated = parse_date(&row.last_updated)
            .ok_or_else(|| invalid("last_updated", &row.last_updated))?;
        let matching_funds_required = parse_flag(&row.matching_funds)
            .ok_or_else(|| invalid("matching_funds", &row.matching_funds))?;

        let subs = SubScores {
            eligibility_fit: row.eligibility_fit,
            deadline_urgency: row.deadline_urgency,
            award_size: row.award_size,
            effort_level: row.effort_level,
            strategic_fit: row.strategic_fit,
        };

        Ok(Grant {
            id: GrantId(row.id),
            title: row.title,
            funder: row.funder,
            description: row.description,
            source_url: row.source_url,
            source_reliability,
            award: AwardRange {
                min: row.award_min,
                max: row.award_max,
            },
            deadline,
            last_updated,
            category,
            status,
            eligibility: EligibilityCriteria {
                organization_types: split_list(&row.organization_types),
                geographic_restrictions: split_list(&row.geographic_restrictions),
                funding_uses: split_list(&row.funding_uses),
                requirements: split_list(&row.requirements),
                matching_funds_required,
            },
            scores: GrantScores::weighted(subs, weights),
        })
    }
}
