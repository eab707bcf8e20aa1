use serde::{Deserialize, Serialize};

use crate::helpers::{clamp_score, round1};
use crate::models::{
    CategoryScores, EnvironmentalConfidence, FactorKind, NormalizedFactor, RiskCategory, SignalTag,
};
use crate::signals::summarize;

use super::weights::WeightTable;

/// Output of one scoring pass. Every number is in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub scores: CategoryScores,
    pub environmental_stress_index: f64,
    /// Coverage of the factors the index was computed from.
    pub confidence: EnvironmentalConfidence,
}

/// Combine tags and normalized factors into category risks and the
/// environmental stress index.
///
/// Tags are folded by kind first, so a kind counts once at its highest
/// confidence, scaled by the corroboration multiplier for its hit count.
/// Factor contributions are `severity × weight`. Sums saturate at 100.
pub fn score(tags: &[SignalTag], factors: &[NormalizedFactor], weights: &WeightTable) -> RiskScores {
    let summaries = summarize(tags);
    let mut scores = CategoryScores::default();

    for category in RiskCategory::ALL {
        let from_tags = summaries.iter().fold(0.0, |acc, s| {
            acc + s.confidence
                * weights.tag_weight(s.kind, category)
                * weights.corroboration.multiplier(s.hits)
        });
        let from_factors = factors.iter().fold(0.0, |acc, f| {
            acc + clamp_score(f.severity) * weights.factor_weight(f.kind, category)
        });
        scores.set(category, round1(clamp_score(from_tags + from_factors)));
    }

    let (environmental_stress_index, confidence) = environmental_index(factors);

    tracing::debug!(
        tag_kinds = summaries.len(),
        factor_count = factors.len(),
        max_score = scores.max(),
        confidence = %confidence,
        "Risk scores computed"
    );

    RiskScores {
        scores,
        environmental_stress_index,
        confidence,
    }
}

/// Mean severity over the factors that are present, with a coverage flag.
/// No factors gives 0 with `Insufficient` confidence.
pub fn environmental_index(factors: &[NormalizedFactor]) -> (f64, EnvironmentalConfidence) {
    if factors.is_empty() {
        return (0.0, EnvironmentalConfidence::Insufficient);
    }

    let sum = factors.iter().fold(0.0, |acc, f| acc + clamp_score(f.severity));
    let mean = round1(clamp_score(sum / factors.len() as f64));

    let covered = FactorKind::ALL
        .iter()
        .filter(|kind| factors.iter().any(|f| f.kind == **kind))
        .count();
    let confidence = if covered == FactorKind::ALL.len() {
        EnvironmentalConfidence::Full
    } else {
        EnvironmentalConfidence::Partial
    };

    (mean, confidence)
}
