use serde::{Deserialize, Serialize};

use crate::models::{FactorKind, RiskCategory, SignalKind};

/// Contribution of one input to each of the three category risks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryWeights {
    #[serde(default)]
    pub chronic_stress: f64,
    #[serde(default)]
    pub respiratory: f64,
    #[serde(default)]
    pub sleep_disorder: f64,
}

impl CategoryWeights {
    pub const fn new(chronic_stress: f64, respiratory: f64, sleep_disorder: f64) -> Self {
        Self {
            chronic_stress,
            respiratory,
            sleep_disorder,
        }
    }

    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::ChronicStress => self.chronic_stress,
            RiskCategory::Respiratory => self.respiratory,
            RiskCategory::SleepDisorder => self.sleep_disorder,
        }
    }

    fn all_valid(&self) -> bool {
        [self.chronic_stress, self.respiratory, self.sleep_disorder]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Points a fully confident tag adds to each category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagWeight {
    pub kind: SignalKind,
    pub weights: CategoryWeights,
}

/// Share of a factor's severity added to each category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub kind: FactorKind,
    pub weights: CategoryWeights,
}

/// Repeated distinct markers of one tag kind strengthen it:
/// multiplier = `1 + step * (hits - 1)`, capped at `max_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorroborationBonus {
    pub step: f64,
    pub max_multiplier: f64,
}

impl Default for CorroborationBonus {
    fn default() -> Self {
        Self {
            step: 0.1,
            max_multiplier: 1.3,
        }
    }
}

impl CorroborationBonus {
    pub fn multiplier(&self, hits: usize) -> f64 {
        if hits <= 1 {
            return 1.0;
        }
        (1.0 + self.step * (hits - 1) as f64).min(self.max_multiplier)
    }
}

/// Tag→category and factor→category weight tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub tags: Vec<TagWeight>,
    pub factors: Vec<FactorWeight>,
    #[serde(default)]
    pub corroboration: CorroborationBonus,
}

impl Default for WeightTable {
    fn default() -> Self {
        use FactorKind::*;
        use SignalKind::*;

        let tag = |kind, chronic, resp, sleep| TagWeight {
            kind,
            weights: CategoryWeights::new(chronic, resp, sleep),
        };
        let factor = |kind, chronic, resp, sleep| FactorWeight {
            kind,
            weights: CategoryWeights::new(chronic, resp, sleep),
        };

        Self {
            tags: vec![
                tag(StressMarker, 70.0, 0.0, 20.0),
                tag(CognitiveFragmentation, 40.0, 0.0, 0.0),
                tag(SleepDisturbance, 15.0, 0.0, 60.0),
                tag(RespiratoryStress, 10.0, 60.0, 0.0),
                tag(HeavyMetalToxicity, 20.0, 50.0, 0.0),
            ],
            // Chronic stress draws on every factor at a reduced weight.
            factors: vec![
                factor(Pm25, 0.15, 0.8, 0.0),
                factor(No2, 0.15, 0.6, 0.0),
                factor(Noise, 0.15, 0.0, 0.7),
                factor(Heat, 0.15, 0.15, 0.2),
                factor(LightPollution, 0.15, 0.0, 0.5),
                factor(GreenSpaceDeficit, 0.15, 0.1, 0.0),
            ],
            corroboration: CorroborationBonus::default(),
        }
    }
}

impl WeightTable {
    /// Weight of a tag for a category; kinds missing from the table weigh 0.
    pub fn tag_weight(&self, kind: SignalKind, category: RiskCategory) -> f64 {
        self.tags
            .iter()
            .find(|t| t.kind == kind)
            .map_or(0.0, |t| t.weights.get(category))
    }

    /// Weight of a factor for a category; kinds missing from the table weigh 0.
    pub fn factor_weight(&self, kind: FactorKind, category: RiskCategory) -> f64 {
        self.factors
            .iter()
            .find(|f| f.kind == kind)
            .map_or(0.0, |f| f.weights.get(category))
    }

    pub fn check(&self) -> Result<(), String> {
        for t in &self.tags {
            if !t.weights.all_valid() {
                return Err(format!("tag weight for {} must be finite and non-negative", t.kind));
            }
        }
        for f in &self.factors {
            if !f.weights.all_valid() {
                return Err(format!(
                    "factor weight for {} must be finite and non-negative",
                    f.kind
                ));
            }
        }
        let c = &self.corroboration;
        if !c.step.is_finite() || c.step < 0.0 {
            return Err("corroboration step must be finite and non-negative".into());
        }
        if !c.max_multiplier.is_finite() || c.max_multiplier < 1.0 {
            return Err("corroboration max_multiplier must be at least 1".into());
        }
        Ok(())
    }
}
