use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{
    AssessmentStatus, EnvironmentalConfidence, Priority, RiskCategory, RiskLevel,
};
use super::factor::NormalizedFactor;
use super::signal::SignalTag;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// One actionable message. `rec_type` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub rec_type: String,
    pub message: String,
    pub priority: Priority,
}

// ---------------------------------------------------------------------------
// CategoryScores
// ---------------------------------------------------------------------------

/// The three category risks, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    pub chronic_stress: f64,
    pub respiratory: f64,
    pub sleep_disorder: f64,
}

impl CategoryScores {
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::ChronicStress => self.chronic_stress,
            RiskCategory::Respiratory => self.respiratory,
            RiskCategory::SleepDisorder => self.sleep_disorder,
        }
    }

    pub fn set(&mut self, category: RiskCategory, value: f64) {
        match category {
            RiskCategory::ChronicStress => self.chronic_stress = value,
            RiskCategory::Respiratory => self.respiratory = value,
            RiskCategory::SleepDisorder => self.sleep_disorder = value,
        }
    }

    /// Highest of the three category scores.
    pub fn max(&self) -> f64 {
        self.chronic_stress
            .max(self.respiratory)
            .max(self.sleep_disorder)
    }
}

/// Category label derived from the shared threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRisk {
    pub category: RiskCategory,
    pub level: RiskLevel,
}

// ---------------------------------------------------------------------------
// RiskAssessment
// ---------------------------------------------------------------------------

/// The immutable result of one assessment run.
///
/// Fields are private: the record is built once by the assembler and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    id: Uuid,
    chronic_stress_risk: f64,
    respiratory_risk: f64,
    sleep_disorder_risk: f64,
    environmental_stress_index: f64,
    environmental_confidence: EnvironmentalConfidence,
    status: AssessmentStatus,
    risk_levels: Vec<CategoryRisk>,
    summary: String,
    signals: Vec<SignalTag>,
    factors: Vec<NormalizedFactor>,
    recommendations: Vec<Recommendation>,
    calculated_at: DateTime<Utc>,
}

/// Everything the assembler computed, handed over in one piece.
pub(crate) struct AssessmentParts {
    pub id: Uuid,
    pub scores: CategoryScores,
    pub environmental_stress_index: f64,
    pub environmental_confidence: EnvironmentalConfidence,
    pub status: AssessmentStatus,
    pub risk_levels: Vec<CategoryRisk>,
    pub summary: String,
    pub signals: Vec<SignalTag>,
    pub factors: Vec<NormalizedFactor>,
    pub recommendations: Vec<Recommendation>,
    pub calculated_at: DateTime<Utc>,
}

impl RiskAssessment {
    pub(crate) fn from_parts(parts: AssessmentParts) -> Self {
        Self {
            id: parts.id,
            chronic_stress_risk: parts.scores.chronic_stress,
            respiratory_risk: parts.scores.respiratory,
            sleep_disorder_risk: parts.scores.sleep_disorder,
            environmental_stress_index: parts.environmental_stress_index,
            environmental_confidence: parts.environmental_confidence,
            status: parts.status,
            risk_levels: parts.risk_levels,
            summary: parts.summary,
            signals: parts.signals,
            factors: parts.factors,
            recommendations: parts.recommendations,
            calculated_at: parts.calculated_at,
        }
    }

    /// Content-derived id: equal inputs give equal ids.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn chronic_stress_risk(&self) -> f64 {
        self.chronic_stress_risk
    }

    pub fn respiratory_risk(&self) -> f64 {
        self.respiratory_risk
    }

    pub fn sleep_disorder_risk(&self) -> f64 {
        self.sleep_disorder_risk
    }

    pub fn scores(&self) -> CategoryScores {
        CategoryScores {
            chronic_stress: self.chronic_stress_risk,
            respiratory: self.respiratory_risk,
            sleep_disorder: self.sleep_disorder_risk,
        }
    }

    pub fn environmental_stress_index(&self) -> f64 {
        self.environmental_stress_index
    }

    pub fn environmental_confidence(&self) -> EnvironmentalConfidence {
        self.environmental_confidence
    }

    /// True when the stress index was computed without any measurement.
    pub fn is_low_confidence(&self) -> bool {
        self.environmental_confidence == EnvironmentalConfidence::Insufficient
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn is_insufficient_data(&self) -> bool {
        self.status == AssessmentStatus::InsufficientData
    }

    pub fn risk_levels(&self) -> &[CategoryRisk] {
        &self.risk_levels
    }

    pub fn risk_level(&self, category: RiskCategory) -> Option<RiskLevel> {
        self.risk_levels
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.level)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn signals(&self) -> &[SignalTag] {
        &self.signals
    }

    pub fn factors(&self) -> &[NormalizedFactor] {
        &self.factors
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn calculated_at(&self) -> DateTime<Utc> {
        self.calculated_at
    }

    /// Equality that ignores the calculation timestamp.
    pub fn same_outcome(&self, other: &RiskAssessment) -> bool {
        let mut other = other.clone();
        other.calculated_at = self.calculated_at;
        *self == other
    }
}
