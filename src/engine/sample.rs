use chrono::{Duration, NaiveDate};

use super::domain::{
    AwardRange, EligibilityCriteria, Grant, GrantCategory, GrantId, GrantStatus, SourceReliability,
};
use super::scoring::{GrantScores, ScoringWeights, SubScores};

struct SampleSpec {
    id: &'static str,
    title: &'static str,
    funder: &'static str,
    description: &'static str,
    source_url: &'static str,
    source_reliability: SourceReliability,
    award: AwardRange,
    deadline_in_days: i64,
    category: GrantCategory,
    status: GrantStatus,
    organization_types: &'static [&'static str],
    geographic_restrictions: &'static [&'static str],
    funding_uses: &'static [&'static str],
    requirements: &'static [&'static str],
    matching_funds_required: bool,
    subs: SubScores,
}

/// Built-in demonstration catalog used by the CLI and the query endpoint
/// when no external data source is supplied. Deadlines are anchored to the
/// supplied reference date so every urgency tier stays represented.
pub fn sample_grants(today: NaiveDate, weights: &ScoringWeights) -> Vec<Grant> {
    sample_specs()
        .into_iter()
        .map(|spec| {
            let SampleSpec {
                id,
                title,
                funder,
                description,
                source_url,
                source_reliability,
                award,
                deadline_in_days,
                category,
                status,
                organization_types,
                geographic_restrictions,
                funding_uses,
                requirements,
                matching_funds_required,
                subs,
            } = spec;

            Grant {
                id: GrantId(id.to_owned()),
                title: title.to_owned(),
                funder: funder.to_owned(),
                description: description.to_owned(),
                source_url: source_url.to_owned(),
                source_reliability,
                award,
                deadline: today + Duration::days(deadline_in_days),
                last_updated: today - Duration::days(3),
                category,
                status,
                eligibility: EligibilityCriteria {
                    organization_types: to_strings(organization_types),
                    geographic_restrictions: to_strings(geographic_restrictions),
                    funding_uses: to_strings(funding_uses),
                    requirements: to_strings(requirements),
                    matching_funds_required,
                },
                scores: GrantScores::weighted(subs, weights),
            }
        })
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn sample_specs() -> Vec<SampleSpec> {
    vec![
        SampleSpec {
            id: "grant-stem-pipeline",
            title: "Rural STEM Education Pipeline",
            funder: "Hollis Family Foundation",
            description: "Multi-year support for after-school STEM programming in rural school districts, including instructor stipends and lab equipment.",
            source_url: "https://hollisfoundation.example.org/grants/stem-pipeline",
            source_reliability: SourceReliability::Official,
            award: AwardRange {
                min: 50_000,
                max: 150_000,
            },
            deadline_in_days: 5,
            category: GrantCategory::Education,
            status: GrantStatus::Applying,
            organization_types: &["nonprofit", "school district"],
            geographic_restrictions: &["US", "rural counties"],
            funding_uses: &["program staff", "equipment"],
            requirements: &[
                "501(c)(3) determination letter",
                "Two years of audited financials",
            ],
            matching_funds_required: false,
            subs: SubScores {
                eligibility_fit: 92,
                deadline_urgency: 95,
                award_size: 70,
                effort_level: 60,
                strategic_fit: 88,
            },
        },
        SampleSpec {
            id: "grant-community-clinic",
            title: "Community Clinic Capacity Building",
            funder: "State Health Access Office",
            description: "Operating support for federally qualified health centers expanding primary care hours in underserved neighborhoods.",
            source_url: "https://health.example.gov/funding/clinic-capacity",
            source_reliability: SourceReliability::Official,
            award: AwardRange {
                min: 200_000,
                max: 500_000,
            },
            deadline_in_days: 15,
            category: GrantCategory::Healthcare,
            status: GrantStatus::Reviewing,
            organization_types: &["nonprofit", "FQHC"],
            geographic_restrictions: &["statewide"],
            funding_uses: &["operations", "staffing"],
            requirements: &["Current FQHC designation", "Sliding-fee schedule on file"],
            matching_funds_required: true,
            subs: SubScores {
                eligibility_fit: 78,
                deadline_urgency: 82,
                award_size: 90,
                effort_level: 40,
                strategic_fit: 75,
            },
        },
        SampleSpec {
            id: "grant-watershed",
            title: "Urban Watershed Restoration",
            funder: "Bluestem Conservation Trust",
            description: "Project grants for riparian buffer plantings, stormwater retrofits, and volunteer monitoring programs.",
            source_url: "https://bluestemtrust.example.org/watershed",
            source_reliability: SourceReliability::Verified,
            award: AwardRange {
                min: 25_000,
                max: 75_000,
            },
            deadline_in_days: 34,
            category: GrantCategory::Environment,
            status: GrantStatus::New,
            organization_types: &["nonprofit", "municipality"],
            geographic_restrictions: &["Midwest"],
            funding_uses: &["restoration", "monitoring"],
            requirements: &["Site control documentation"],
            matching_funds_required: false,
            subs: SubScores {
                eligibility_fit: 85,
                deadline_urgency: 55,
                award_size: 45,
                effort_level: 80,
                strategic_fit: 70,
            },
        },
        SampleSpec {
            id: "grant-open-data",
            title: "Open Civic Data Infrastructure",
            funder: "Meridian Digital Futures Fund",
            description: "Seed funding for open-source tooling that makes municipal datasets accessible to residents and journalists.",
            source_url: "https://meridianfund.example.com/open-civic-data",
            source_reliability: SourceReliability::Verified,
            award: AwardRange {
                min: 100_000,
                max: 250_000,
            },
            deadline_in_days: 60,
            category: GrantCategory::Technology,
            status: GrantStatus::New,
            organization_types: &["nonprofit", "civic tech collective"],
            geographic_restrictions: &[],
            funding_uses: &["software development", "community outreach"],
            requirements: &["Open-source license commitment", "Letter of support from a partner city"],
            matching_funds_required: false,
            subs: SubScores {
                eligibility_fit: 88,
                deadline_urgency: 35,
                award_size: 75,
                effort_level: 55,
                strategic_fit: 92,
            },
        },
        SampleSpec {
            id: "grant-arts-residency",
            title: "Neighborhood Arts Residency",
            funder: "Calloway Arts Council",
            description: "Stipends for teaching artists running year-long residencies in community centers.",
            source_url: "https://callowayarts.example.org/residency",
            source_reliability: SourceReliability::Unverified,
            award: AwardRange {
                min: 10_000,
                max: 30_000,
            },
            deadline_in_days: 90,
            category: GrantCategory::Arts,
            status: GrantStatus::Submitted,
            organization_types: &["nonprofit"],
            geographic_restrictions: &["county"],
            funding_uses: &["artist stipends"],
            requirements: &["Portfolio review", "Community partner agreement"],
            matching_funds_required: false,
            subs: SubScores {
                eligibility_fit: 60,
                deadline_urgency: 20,
                award_size: 25,
                effort_level: 90,
                strategic_fit: 50,
            },
        },
        SampleSpec {
            id: "grant-food-security",
            title: "Regional Food Security Research",
            funder: "National Agriculture Institute",
            description: "Applied research into distribution networks connecting small producers with food banks.",
            source_url: "https://aginstitute.example.gov/food-security",
            source_reliability: SourceReliability::Official,
            award: AwardRange {
                min: 300_000,
                max: 750_000,
            },
            deadline_in_days: -4,
            category: GrantCategory::Research,
            status: GrantStatus::Archived,
            organization_types: &["university", "nonprofit"],
            geographic_restrictions: &["US"],
            funding_uses: &["research", "data collection"],
            requirements: &["IRB approval plan", "Federal indirect rate agreement"],
            matching_funds_required: true,
            subs: SubScores {
                eligibility_fit: 45,
                deadline_urgency: 100,
                award_size: 95,
                effort_level: 20,
                strategic_fit: 55,
            },
        },
    ]
}
