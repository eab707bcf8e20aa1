use serde::{Deserialize, Serialize};

use crate::models::{Priority, RiskLevel};

/// The one threshold table behind risk labels, recommendation priority
/// and assessment status. Scores at or above `high` are high, at or above
/// `moderate` are moderate, anything lower is low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: f64,
    pub moderate: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            moderate: 40.0,
        }
    }
}

impl RiskThresholds {
    pub fn level(&self, score: f64) -> RiskLevel {
        if score >= self.high {
            RiskLevel::High
        } else if score >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn priority(&self, score: f64) -> Priority {
        Priority::from(self.level(score))
    }

    /// 0 < moderate < high <= 100.
    pub fn check(&self) -> Result<(), String> {
        if !self.high.is_finite() || !self.moderate.is_finite() {
            return Err("thresholds must be finite".into());
        }
        if self.moderate <= 0.0 || self.moderate >= self.high || self.high > 100.0 {
            return Err(format!(
                "thresholds must satisfy 0 < moderate < high <= 100, got moderate={} high={}",
                self.moderate, self.high
            ));
        }
        Ok(())
    }
}
