use serde::{Deserialize, Serialize};

/// Rubric inputs supplied by the upstream fit analysis. Each sub-score is
/// expected in 0-100 but the scorer does not validate or clamp; out-of-range
/// inputs produce out-of-range composites (garbage in, garbage out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub eligibility_fit: u8,
    pub deadline_urgency: u8,
    pub award_size: u8,
    pub effort_level: u8,
    pub strategic_fit: u8,
}

/// Weight applied to each sub-score when deriving the composite. Weights
/// conventionally sum to 1.0; the scorer does not renormalize, so other sums
/// simply scale the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub eligibility_fit: f32,
    pub deadline_urgency: f32,
    pub award_size: f32,
    pub effort_level: f32,
    pub strategic_fit: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            eligibility_fit: 0.30,
            deadline_urgency: 0.15,
            award_size: 0.20,
            effort_level: 0.15,
            strategic_fit: 0.20,
        }
    }
}

/// Weighted composite of the five sub-scores, rounded half away from zero.
pub fn compute_overall_score(scores: &SubScores, weights: &ScoringWeights) -> u8 {
    let weighted = f32::from(scores.eligibility_fit) * weights.eligibility_fit
        + f32::from(scores.deadline_urgency) * weights.deadline_urgency
        + f32::from(scores.award_size) * weights.award_size
        + f32::from(scores.effort_level) * weights.effort_level
        + f32::from(scores.strategic_fit) * weights.strategic_fit;

    weighted.round() as u8
}

/// Sub-scores plus the derived composite. The composite is a projection of
/// the sub-scores under the active weight set, never set independently;
/// ingest paths call [`GrantScores::weighted`] or [`GrantScores::rescore`]
/// so a stale value cannot survive a sub-score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantScores {
    #[serde(flatten)]
    pub subs: SubScores,
    #[serde(default)]
    pub overall: u8,
}

impl GrantScores {
    pub fn weighted(subs: SubScores, weights: &ScoringWeights) -> Self {
        Self {
            subs,
            overall: compute_overall_score(&subs, weights),
        }
    }

    pub fn rescore(&mut self, weights: &ScoringWeights) {
        self.overall = compute_overall_score(&self.subs, weights);
    }

    /// Discrete weighted contributions, allowing transparent audits of a
    /// composite score.
    pub fn components(&self, weights: &ScoringWeights) -> Vec<ScoreComponent> {
        ScoreFactor::ordered()
            .into_iter()
            .map(|factor| ScoreComponent {
                factor,
                label: factor.label().to_string(),
                score: factor.pick(&self.subs),
                weight: factor.pick_weight(weights),
            })
            .collect()
    }
}

/// Factors permitted in the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    EligibilityFit,
    DeadlineUrgency,
    AwardSize,
    EffortLevel,
    StrategicFit,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EligibilityFit,
            Self::DeadlineUrgency,
            Self::AwardSize,
            Self::EffortLevel,
            Self::StrategicFit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EligibilityFit => "Eligibility Fit",
            Self::DeadlineUrgency => "Deadline Urgency",
            Self::AwardSize => "Award Size",
            Self::EffortLevel => "Effort Level",
            Self::StrategicFit => "Strategic Fit",
        }
    }

    fn pick(self, subs: &SubScores) -> u8 {
        match self {
            Self::EligibilityFit => subs.eligibility_fit,
            Self::DeadlineUrgency => subs.deadline_urgency,
            Self::AwardSize => subs.award_size,
            Self::EffortLevel => subs.effort_level,
            Self::StrategicFit => subs.strategic_fit,
        }
    }

    fn pick_weight(self, weights: &ScoringWeights) -> f32 {
        match self {
            Self::EligibilityFit => weights.eligibility_fit,
            Self::DeadlineUrgency => weights.deadline_urgency,
            Self::AwardSize => weights.award_size,
            Self::EffortLevel => weights.effort_level,
            Self::StrategicFit => weights.strategic_fit,
        }
    }
}

/// Discrete contribution to a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub label: String,
    pub score: u8,
    pub weight: f32,
}

/// Qualitative band used when presenting a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Low,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 65 {
            Self::Good
        } else if score >= 50 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Low => "Low",
        }
    }
}
