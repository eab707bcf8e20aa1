//! Assessment orchestration: extraction and normalization, then scoring,
//! then recommendations, sealed into one immutable record.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::environment::normalize_optional;
use crate::models::assessment::AssessmentParts;
use crate::models::{
    AssessmentStatus, CategoryRisk, CategoryScores, EnvironmentalReading, FactorKind, GeoPoint,
    RiskAssessment, RiskCategory, RiskLevel, SignalTag, SymptomReport,
};
use crate::recommendations::{recommend, RecommendationTemplatesI18n};
use crate::scoring::{score, RiskThresholds};
use crate::signals::extract_with;

use super::types::AssessmentError;

/// Namespace for content-derived assessment ids.
const ASSESSMENT_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_29d4_8b3e_5a70_9c21_4e0d_b7a8_3f56);

pub const DEFAULT_LANGUAGE: &str = "en";

/// Sole entry point of the engine. Holds only immutable configuration, so a
/// single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct AssessmentAssembler {
    config: EngineConfig,
    lang: String,
}

impl Default for AssessmentAssembler {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AssessmentAssembler {
    /// Build an assembler over a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self, AssessmentError> {
        config.validate()?;
        Ok(Self {
            config,
            lang: DEFAULT_LANGUAGE.to_string(),
        })
    }

    /// Language for messages and summary ("en", "ru"). Unknown codes fall
    /// back to English.
    pub fn with_language(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Produce the assessment for one report and an optional reading.
    ///
    /// Fails only when the report has no usable text. A missing reading is
    /// not an error: the assessment carries no factors and an insufficient
    /// environmental confidence.
    pub fn assemble(
        &self,
        report: &SymptomReport,
        reading: Option<&EnvironmentalReading>,
    ) -> Result<RiskAssessment, AssessmentError> {
        let span = tracing::info_span!("assemble", lang = %self.lang);
        let _guard = span.enter();

        let Some(text) = report.usable_text() else {
            tracing::warn!(outcome = "rejected", "Report has no symptom text");
            return Err(AssessmentError::InvalidInput(
                "symptom text is required".into(),
            ));
        };

        let tags = extract_with(text, &self.config.extraction);
        let factors = normalize_optional(reading, &self.config.curves);
        let risk = score(&tags, &factors, &self.config.weights);

        let thresholds = &self.config.thresholds;
        let recommendations = recommend(&tags, &risk.scores, thresholds, &self.lang);

        let status = derive_status(&risk.scores, thresholds, tags.is_empty() && factors.is_empty());
        let summary = match status {
            AssessmentStatus::InsufficientData => {
                RecommendationTemplatesI18n::insufficient_data(&self.lang)
            }
            _ => RecommendationTemplatesI18n::summary(&self.lang, thresholds.level(risk.scores.max())),
        };

        let id = assessment_id(report, reading);

        tracing::info!(
            status = %status,
            tag_count = tags.len(),
            factor_count = factors.len(),
            recommendation_count = recommendations.len(),
            confidence = %risk.confidence,
            "Assessment complete"
        );

        Ok(RiskAssessment::from_parts(AssessmentParts {
            id,
            scores: risk.scores,
            environmental_stress_index: risk.environmental_stress_index,
            environmental_confidence: risk.confidence,
            status,
            risk_levels: risk_levels(&risk.scores, thresholds),
            summary: summary.to_string(),
            signals: dedup_signals(tags),
            factors,
            recommendations,
            calculated_at: Utc::now(),
        }))
    }
}

/// Assess with the reference calibration and English messages.
pub fn assemble(
    report: &SymptomReport,
    reading: Option<&EnvironmentalReading>,
) -> Result<RiskAssessment, AssessmentError> {
    AssessmentAssembler::default().assemble(report, reading)
}

/// Status ladder over the highest category score. Nothing to go on at all
/// is reported as insufficient data, never as stable.
fn derive_status(
    scores: &CategoryScores,
    thresholds: &RiskThresholds,
    no_evidence: bool,
) -> AssessmentStatus {
    if no_evidence {
        return AssessmentStatus::InsufficientData;
    }
    match thresholds.level(scores.max()) {
        RiskLevel::High => AssessmentStatus::Critical,
        RiskLevel::Moderate => AssessmentStatus::Elevated,
        RiskLevel::Low => AssessmentStatus::Stable,
    }
}

fn risk_levels(scores: &CategoryScores, thresholds: &RiskThresholds) -> Vec<CategoryRisk> {
    RiskCategory::ALL
        .iter()
        .map(|category| CategoryRisk {
            category: *category,
            level: thresholds.level(scores.get(*category)),
        })
        .collect()
}

/// One tag per kind: first marker kept, highest confidence kept.
fn dedup_signals(tags: Vec<SignalTag>) -> Vec<SignalTag> {
    let mut out: Vec<SignalTag> = Vec::new();
    for tag in tags {
        match out.iter_mut().find(|t| t.kind == tag.kind) {
            Some(existing) => existing.confidence = existing.confidence.max(tag.confidence),
            None => out.push(tag),
        }
    }
    out
}

/// Content-derived id. Every input field is written as fixed-width bytes,
/// floats by bit pattern, so infinities and NaN never alias "unknown".
fn assessment_id(report: &SymptomReport, reading: Option<&EnvironmentalReading>) -> Uuid {
    let mut bytes = Vec::with_capacity(256);

    match &report.text {
        Some(text) => {
            bytes.push(1);
            bytes.extend_from_slice(&(text.len() as u64).to_le_bytes());
            bytes.extend_from_slice(text.as_bytes());
        }
        None => bytes.push(0),
    }
    push_point(&mut bytes, &report.location);
    push_instant(&mut bytes, &report.reported_at);

    match reading {
        Some(r) => {
            bytes.push(1);
            push_point(&mut bytes, &r.location);
            push_instant(&mut bytes, &r.measured_at);
            for kind in FactorKind::ALL {
                match r.measurement(kind) {
                    Some(v) => {
                        bytes.push(1);
                        push_f64(&mut bytes, v);
                    }
                    None => bytes.push(0),
                }
            }
        }
        None => bytes.push(0),
    }

    Uuid::new_v5(&ASSESSMENT_NAMESPACE, &bytes)
}

fn push_f64(bytes: &mut Vec<u8>, value: f64) {
    // All NaN payloads are the same input.
    let value = if value.is_nan() { f64::NAN } else { value };
    bytes.extend_from_slice(&value.to_bits().to_le_bytes());
}

fn push_point(bytes: &mut Vec<u8>, point: &GeoPoint) {
    push_f64(bytes, point.latitude);
    push_f64(bytes, point.longitude);
}

fn push_instant(bytes: &mut Vec<u8>, at: &DateTime<Utc>) {
    bytes.extend_from_slice(&at.timestamp().to_le_bytes());
    bytes.extend_from_slice(&at.timestamp_subsec_nanos().to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnvironmentalConfidence, Priority, SignalKind};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    fn moscow() -> GeoPoint {
        GeoPoint::new(55.75, 37.61)
    }

    fn report(text: &str) -> SymptomReport {
        SymptomReport::new(text, moscow(), at())
    }

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading::empty(moscow(), at())
    }

    fn healthy_reading() -> EnvironmentalReading {
        EnvironmentalReading {
            pm2_5: Some(3.0),
            no2: Some(5.0),
            noise_db: Some(38.0),
            heat_index: Some(22.0),
            light_pollution: Some(2.0),
            green_space_distance: Some(150.0),
            ..reading()
        }
    }

    // --- Scenarios ---

    #[test]
    fn stress_text_with_polluted_air() {
        let r = EnvironmentalReading {
            pm2_5: Some(60.0),
            ..reading()
        };
        let a = assemble(&report("у меня болит голова и тошнит"), Some(&r)).unwrap();

        assert!(a.chronic_stress_risk() >= 70.0, "chronic {}", a.chronic_stress_risk());
        assert!(a.respiratory_risk() >= 70.0, "respiratory {}", a.respiratory_risk());
        assert_eq!(a.status(), AssessmentStatus::Critical);

        let recs = a.recommendations();
        assert_eq!(recs[0].rec_type, "stress_management");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].rec_type, "air_quality");
        assert_eq!(recs[1].priority, Priority::High);
        let first_non_high = recs.iter().position(|r| r.priority != Priority::High);
        if let Some(pos) = first_non_high {
            assert!(recs[pos..].iter().all(|r| r.priority != Priority::High));
        }
    }

    #[test]
    fn empty_text_without_reading_is_rejected() {
        let err = assemble(&report(""), None).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
    }

    #[test]
    fn absent_text_is_rejected() {
        let r = SymptomReport {
            text: None,
            location: moscow(),
            reported_at: at(),
        };
        let err = assemble(&r, Some(&healthy_reading())).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(assemble(&report("  \n\t "), None).is_err());
    }

    #[test]
    fn healthy_sentence_in_healthy_place_is_stable() {
        let a = assemble(&report("I am feeling fine today"), Some(&healthy_reading())).unwrap();
        assert!(a.chronic_stress_risk() < 40.0);
        assert!(a.respiratory_risk() < 40.0);
        assert!(a.sleep_disorder_risk() < 40.0);
        assert!(a.recommendations().is_empty());
        assert_eq!(a.status(), AssessmentStatus::Stable);
        assert_eq!(a.environmental_confidence(), EnvironmentalConfidence::Full);
        assert!(a.signals().is_empty());
        assert!(a.summary().starts_with("Mild"));
    }

    #[test]
    fn single_word_is_fragmented() {
        let a = assemble(&report("fine"), Some(&healthy_reading())).unwrap();
        assert_eq!(a.signals().len(), 1);
        assert_eq!(a.signals()[0].kind, SignalKind::CognitiveFragmentation);
        assert_eq!(a.recommendations().len(), 1);
        assert_eq!(a.recommendations()[0].rec_type, "cognitive_check");
    }

    #[test]
    fn no_signals_no_reading_is_insufficient_data() {
        let a = assemble(&report("I am feeling fine today"), None).unwrap();
        assert_eq!(a.scores(), CategoryScores::default());
        assert_eq!(a.environmental_stress_index(), 0.0);
        assert!(a.is_low_confidence());
        assert!(a.is_insufficient_data());
        assert!(a.recommendations().is_empty());
        assert_eq!(a.summary(), RecommendationTemplatesI18n::insufficient_data("en"));
    }

    #[test]
    fn empty_reading_counts_as_no_factors() {
        let a = assemble(&report("I am feeling fine today"), Some(&reading())).unwrap();
        assert!(a.factors().is_empty());
        assert!(a.is_insufficient_data());
    }

    #[test]
    fn missing_reading_still_scores_text() {
        let a = assemble(&report("headache and cough all week long"), None).unwrap();
        assert!(a.is_low_confidence());
        assert!(!a.is_insufficient_data());
        assert!(a.chronic_stress_risk() > 0.0);
        assert!(a.respiratory_risk() > 0.0);
    }

    #[test]
    fn environment_alone_raises_recommendation() {
        let r = EnvironmentalReading {
            noise_db: Some(95.0),
            light_pollution: Some(9.0),
            ..reading()
        };
        let a = assemble(&report("nothing special to report today"), Some(&r)).unwrap();
        assert_eq!(a.risk_level(RiskCategory::SleepDisorder), Some(RiskLevel::High));
        assert_eq!(a.recommendations()[0].rec_type, "sleep_hygiene");
        assert_eq!(a.recommendations()[0].priority, Priority::High);
        assert_eq!(a.environmental_confidence(), EnvironmentalConfidence::Partial);
    }

    #[test]
    fn signals_are_deduplicated_by_kind() {
        let a = assemble(&report("у меня болит голова и тошнит"), None).unwrap();
        assert_eq!(a.signals().len(), 1);
        assert_eq!(a.signals()[0].marker.as_deref(), Some("болит"));
    }

    #[test]
    fn risk_levels_cover_every_category() {
        let a = assemble(&report("headache"), None).unwrap();
        assert_eq!(a.risk_levels().len(), 3);
        assert_eq!(a.risk_level(RiskCategory::ChronicStress), Some(RiskLevel::High));
        assert_eq!(a.risk_level(RiskCategory::Respiratory), Some(RiskLevel::Low));
    }

    // --- Idempotency ---

    #[test]
    fn identical_inputs_give_identical_outcome() {
        let r = EnvironmentalReading {
            pm2_5: Some(60.0),
            ..reading()
        };
        let text = report("у меня болит голова и тошнит");
        let a = assemble(&text, Some(&r)).unwrap();
        let b = assemble(&text, Some(&r)).unwrap();
        assert_eq!(a.id(), b.id());
        assert!(a.same_outcome(&b));
    }

    #[test]
    fn different_inputs_give_different_ids() {
        let a = assemble(&report("headache today"), None).unwrap();
        let b = assemble(&report("headache yesterday"), None).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn infinite_measurement_id_differs_from_unknown() {
        let text = report("I am feeling fine today");
        let infinite = EnvironmentalReading {
            pm2_5: Some(f64::INFINITY),
            ..reading()
        };
        let negative = EnvironmentalReading {
            pm2_5: Some(f64::NEG_INFINITY),
            ..reading()
        };
        let unknown = reading();
        let a = assemble(&text, Some(&infinite)).unwrap();
        let b = assemble(&text, Some(&negative)).unwrap();
        let c = assemble(&text, Some(&unknown)).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(c.id(), assemble(&text, None).unwrap().id());
    }

    #[test]
    fn nearby_locations_give_different_ids() {
        let a = report("headache today");
        let b = SymptomReport::new("headache today", GeoPoint::new(55.75, 37.610_000_1), at());
        assert_ne!(
            assemble(&a, None).unwrap().id(),
            assemble(&b, None).unwrap().id()
        );
    }

    #[test]
    fn zero_scores_serialize_as_positive_zero() {
        let assessment = assemble(&report("I am feeling fine today"), None).unwrap();
        let json = serde_json::to_value(&assessment).unwrap();
        let obj = json.as_object().unwrap();
        let mut checked = 0;
        for (key, value) in obj {
            if let Some(v) = value.as_f64() {
                assert!(v.is_sign_positive(), "{key} = {v:?}");
                checked += 1;
            }
        }
        assert!(checked >= 4, "{json}");
    }

    // --- Configuration and language ---

    #[test]
    fn russian_language_localizes_output() {
        let assembler = AssessmentAssembler::default().with_language("ru");
        let a = assembler
            .assemble(&report("у меня болит голова и тошнит"), None)
            .unwrap();
        assert_eq!(
            a.recommendations()[0].message,
            RecommendationTemplatesI18n::signal("ru", SignalKind::StressMarker)
        );
        assert_eq!(assembler.language(), "ru");
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let mut config = EngineConfig::default();
        config.thresholds.moderate = 90.0;
        let err = AssessmentAssembler::new(config).unwrap_err();
        assert!(matches!(err, AssessmentError::Config(_)));
    }

    #[test]
    fn custom_thresholds_flow_through() {
        let mut config = EngineConfig::default();
        config.thresholds.high = 95.0;
        config.thresholds.moderate = 80.0;
        let assembler = AssessmentAssembler::new(config).unwrap();
        let a = assembler.assemble(&report("headache"), None).unwrap();
        // 70 + fragmentation 20 = 90: moderate under the stricter table.
        assert_eq!(a.status(), AssessmentStatus::Elevated);
        assert_eq!(a.recommendations()[0].priority, Priority::Medium);
    }

    // --- Concurrency ---

    #[test]
    fn concurrent_assessments_agree() {
        let assembler = AssessmentAssembler::default();
        let r = EnvironmentalReading {
            pm2_5: Some(60.0),
            noise_db: Some(72.0),
            ..reading()
        };
        let text = report("I can't sleep and feel tired all the time");
        let expected = assembler.assemble(&text, Some(&r)).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| assembler.assemble(&text, Some(&r)).unwrap()))
                .collect();
            for handle in handles {
                let got = handle.join().unwrap();
                assert!(got.same_outcome(&expected));
            }
        });
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::models::{GeoPoint, Priority};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn arb_measurement() -> impl Strategy<Value = Option<f64>> {
        proptest::option::of(-100.0..10_000.0f64)
    }

    proptest! {
        /// Same (report, reading) pair, same outcome.
        #[test]
        fn assemble_is_idempotent(
            text in "[a-zа-я ]{1,60}",
            pm in arb_measurement(),
            noise in arb_measurement(),
            green in arb_measurement(),
        ) {
            let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
            let report = SymptomReport::new(text, GeoPoint::new(55.75, 37.61), at);
            let reading = EnvironmentalReading {
                pm2_5: pm,
                noise_db: noise,
                green_space_distance: green,
                ..EnvironmentalReading::empty(GeoPoint::new(55.75, 37.61), at)
            };
            let assembler = AssessmentAssembler::default();
            match (assembler.assemble(&report, Some(&reading)), assembler.assemble(&report, Some(&reading))) {
                (Ok(a), Ok(b)) => {
                    prop_assert!(a.same_outcome(&b));
                    for v in [a.chronic_stress_risk(), a.respiratory_risk(), a.sleep_disorder_risk(), a.environmental_stress_index()] {
                        prop_assert!((0.0..=100.0).contains(&v));
                    }
                    for pair in a.recommendations().windows(2) {
                        prop_assert!(pair[0].priority.rank() <= pair[1].priority.rank());
                    }
                    if a.status() == AssessmentStatus::Critical {
                        prop_assert!(a.recommendations().iter().any(|r| r.priority == Priority::High));
                    }
                }
                (Err(_), Err(_)) => prop_assert!(report.usable_text().is_none()),
                _ => prop_assert!(false, "non-deterministic outcome"),
            }
        }
    }
}
