use crate::models::{
    CategoryScores, Priority, Recommendation, RiskCategory, RiskLevel, SignalKind, SignalTag,
};
use crate::scoring::RiskThresholds;
use crate::signals::summarize;

use super::messages::RecommendationTemplatesI18n;

/// Recommendation type emitted for a signal. Also the dedup key.
pub fn signal_recommendation_type(kind: SignalKind) -> &'static str {
    match kind {
        SignalKind::StressMarker => "stress_management",
        SignalKind::SleepDisturbance => "sleep_hygiene",
        SignalKind::RespiratoryStress => "air_quality",
        SignalKind::HeavyMetalToxicity => "toxic_exposure",
        SignalKind::CognitiveFragmentation => "cognitive_check",
    }
}

/// Recommendation type emitted for a high category with no matching signal.
pub fn category_recommendation_type(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::ChronicStress => "stress_management",
        RiskCategory::Respiratory => "air_quality",
        RiskCategory::SleepDisorder => "sleep_hygiene",
    }
}

/// Derive the ranked recommendation list.
///
/// 1. One message per distinct signal kind, in first-match order, priority
///    from the score of the signal's category.
/// 2. One high-priority message per high category that no signal maps to.
/// 3. Same type emitted twice keeps the higher priority, in the first slot.
/// 4. Stable sort: high, medium, low.
pub fn recommend(
    tags: &[SignalTag],
    scores: &CategoryScores,
    thresholds: &RiskThresholds,
    lang: &str,
) -> Vec<Recommendation> {
    let summaries = summarize(tags);
    let mut recommendations: Vec<Recommendation> = Vec::new();

    for summary in &summaries {
        let priority = thresholds.priority(scores.get(summary.kind.category()));
        push_unique(
            &mut recommendations,
            Recommendation {
                rec_type: signal_recommendation_type(summary.kind).to_string(),
                message: RecommendationTemplatesI18n::signal(lang, summary.kind).to_string(),
                priority,
            },
        );
    }

    for category in RiskCategory::ALL {
        if thresholds.level(scores.get(category)) != RiskLevel::High {
            continue;
        }
        if summaries.iter().any(|s| s.kind.category() == category) {
            continue;
        }
        push_unique(
            &mut recommendations,
            Recommendation {
                rec_type: category_recommendation_type(category).to_string(),
                message: RecommendationTemplatesI18n::category(lang, category).to_string(),
                priority: Priority::High,
            },
        );
    }

    recommendations.sort_by_key(|r| r.priority.rank());

    tracing::debug!(
        count = recommendations.len(),
        high = recommendations.iter().filter(|r| r.priority == Priority::High).count(),
        "Recommendations derived"
    );

    recommendations
}

/// Insert, or upgrade an existing entry of the same type in place.
fn push_unique(recommendations: &mut Vec<Recommendation>, candidate: Recommendation) {
    match recommendations
        .iter_mut()
        .find(|r| r.rec_type == candidate.rec_type)
    {
        Some(existing) => {
            if candidate.priority.rank() < existing.priority.rank() {
                *existing = candidate;
            }
        }
        None => recommendations.push(candidate),
    }
}
