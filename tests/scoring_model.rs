use chrono::{Duration, Local, NaiveDate};
use grant_spotter::engine::{
    classify, classify_now, compute_overall_score, days_until, format_usd, ScoreBand,
    ScoringWeights, SubScores, UrgencyTier,
};

fn subs(values: [u8; 5]) -> SubScores {
    SubScores {
        eligibility_fit: values[0],
        deadline_urgency: values[1],
        award_size: values[2],
        effort_level: values[3],
        strategic_fit: values[4],
    }
}

#[test]
fn default_weights_compose_expected_score() {
    let score = compute_overall_score(&subs([80, 50, 60, 90, 70]), &ScoringWeights::default());
    // 24 + 7.5 + 12 + 13.5 + 14
    assert_eq!(score, 71);
}

#[test]
fn exact_half_rounds_up() {
    // 25.5 + 7.5 + 12 + 13.5 + 14 = 72.5
    let score = compute_overall_score(&subs([85, 50, 60, 90, 70]), &ScoringWeights::default());
    assert_eq!(score, 73);
}

#[test]
fn zero_subscores_yield_zero() {
    assert_eq!(
        compute_overall_score(&subs([0, 0, 0, 0, 0]), &ScoringWeights::default()),
        0
    );
}

#[test]
fn composite_stays_in_range_for_in_range_inputs() {
    let weights = ScoringWeights::default();
    for vector in [
        [100, 100, 100, 100, 100],
        [0, 100, 0, 100, 0],
        [1, 2, 3, 4, 5],
        [99, 1, 50, 25, 75],
    ] {
        let score = compute_overall_score(&subs(vector), &weights);
        assert!(score <= 100, "score {score} out of range for {vector:?}");
    }
    assert_eq!(
        compute_overall_score(&subs([100, 100, 100, 100, 100]), &weights),
        100
    );
}

#[test]
fn weights_scale_without_renormalization() {
    let flat = subs([50, 50, 50, 50, 50]);
    assert_eq!(compute_overall_score(&flat, &ScoringWeights::default()), 50);

    let doubled = ScoringWeights {
        eligibility_fit: 0.60,
        deadline_urgency: 0.30,
        award_size: 0.40,
        effort_level: 0.30,
        strategic_fit: 0.40,
    };
    assert_eq!(compute_overall_score(&flat, &doubled), 100);

    let half = ScoringWeights {
        eligibility_fit: 0.1,
        deadline_urgency: 0.1,
        award_size: 0.1,
        effort_level: 0.1,
        strategic_fit: 0.1,
    };
    assert_eq!(
        compute_overall_score(&subs([100, 100, 100, 100, 100]), &half),
        50
    );
}

#[test]
fn urgency_tier_boundaries() {
    let cases = [
        (7, UrgencyTier::Critical),
        (8, UrgencyTier::High),
        (21, UrgencyTier::High),
        (22, UrgencyTier::Medium),
        (45, UrgencyTier::Medium),
        (46, UrgencyTier::Low),
    ];
    for (days, expected) in cases {
        assert_eq!(
            UrgencyTier::from_days_until(days),
            expected,
            "daysUntil={days}"
        );
    }
}

#[test]
fn expired_deadline_classifies_critical() {
    // Intentional policy: there is no distinct expired tier, a passed
    // deadline stays in the critical bucket.
    assert_eq!(UrgencyTier::from_days_until(-3), UrgencyTier::Critical);
    assert_eq!(UrgencyTier::from_days_until(0), UrgencyTier::Critical);
}

#[test]
fn classify_reports_days_and_tier_together() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
    let deadline = NaiveDate::from_ymd_opt(2026, 3, 17).expect("valid date");

    assert_eq!(days_until(deadline, today), 15);

    let outlook = classify(deadline, today);
    assert_eq!(outlook.days_until, 15);
    assert_eq!(outlook.tier, UrgencyTier::High);

    let passed = classify(today, deadline);
    assert_eq!(passed.days_until, -15);
    assert_eq!(passed.tier, UrgencyTier::Critical);
}

#[test]
fn classify_now_uses_the_current_date() {
    // Stay far from every tier boundary so a date flip mid-test cannot
    // change the outcome.
    let deadline = Local::now().date_naive() + Duration::days(100);
    assert_eq!(classify_now(deadline).tier, UrgencyTier::Low);
}

#[test]
fn score_band_thresholds() {
    assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
    assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(65), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(64), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(50), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(49), ScoreBand::Low);
}

#[test]
fn usd_formatting_groups_thousands() {
    assert_eq!(format_usd(0), "$0");
    assert_eq!(format_usd(500), "$500");
    assert_eq!(format_usd(7_500), "$7,500");
    assert_eq!(format_usd(1_234_567), "$1,234,567");
}
