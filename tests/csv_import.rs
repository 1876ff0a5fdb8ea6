use std::io::Cursor;

use chrono::NaiveDate;
use grant_spotter::engine::{
    GrantCategory, GrantCsvImporter, GrantId, GrantImportError, GrantStatus, ScoringWeights,
    SourceReliability,
};

const HEADER: &str = "id,title,funder,description,source_url,source_reliability,award_min,award_max,deadline,last_updated,category,status,organization_types,geographic_restrictions,funding_uses,requirements,matching_funds,eligibility_fit,deadline_urgency,award_size,effort_level,strategic_fit";

fn catalog(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

#[test]
fn imports_rows_and_recomputes_composite_scores() {
    let csv = catalog(&[
        "g-1,STEM Pipeline,Hollis Foundation,After-school STEM,https://example.org/stem,official,50000,150000,2026-04-01,2026-02-20,education,applying,nonprofit;school district,US,program staff;equipment,501(c)(3) letter,false,80,50,60,90,70",
        "g-2,Clinic Capacity,Health Office,Primary care expansion,https://example.gov/clinic,verified,200000,500000,2026-03-15,2026-02-25,healthcare,new,nonprofit,statewide,operations,,yes,78,82,90,40,75",
    ]);

    let grants = GrantCsvImporter::from_reader(Cursor::new(csv), &ScoringWeights::default())
        .expect("catalog imports");

    assert_eq!(grants.len(), 2);

    let first = &grants[0];
    assert_eq!(first.id, GrantId("g-1".to_owned()));
    assert_eq!(first.category, GrantCategory::Education);
    assert_eq!(first.status, GrantStatus::Applying);
    assert_eq!(first.source_reliability, SourceReliability::Official);
    assert_eq!(first.award.min, 50_000);
    assert_eq!(first.award.max, 150_000);
    assert_eq!(
        first.deadline,
        NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid date")
    );
    assert_eq!(
        first.eligibility.organization_types,
        vec!["nonprofit".to_owned(), "school district".to_owned()]
    );
    assert!(!first.eligibility.matching_funds_required);
    // Composite recomputed from sub-scores under the default weights.
    assert_eq!(first.scores.overall, 71);

    let second = &grants[1];
    assert!(second.eligibility.matching_funds_required);
    assert!(second.eligibility.requirements.is_empty());
}

#[test]
fn rejects_unknown_category_with_row_context() {
    let csv = catalog(&[
        "g-1,Bad Row,Funder,,,official,0,1000,2026-04-01,2026-02-20,aerospace,new,,,,,false,50,50,50,50,50",
    ]);

    let err = GrantCsvImporter::from_reader(Cursor::new(csv), &ScoringWeights::default())
        .expect_err("unknown category rejected");

    match err {
        GrantImportError::InvalidField { field, value, .. } => {
            assert_eq!(field, "category");
            assert_eq!(value, "aerospace");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_malformed_deadline() {
    let csv = catalog(&[
        "g-1,Bad Date,Funder,,,official,0,1000,04/01/2026,2026-02-20,arts,new,,,,,false,50,50,50,50,50",
    ]);

    let err = GrantCsvImporter::from_reader(Cursor::new(csv), &ScoringWeights::default())
        .expect_err("malformed deadline rejected");
    assert!(matches!(
        err,
        GrantImportError::InvalidField {
            field: "deadline",
            ..
        }
    ));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = GrantCsvImporter::from_path("/nonexistent/catalog.csv", &ScoringWeights::default())
        .expect_err("missing file rejected");
    assert!(matches!(err, GrantImportError::Io(_)));
}
