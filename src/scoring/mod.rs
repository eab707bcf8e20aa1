pub mod scorer;
pub mod thresholds;
pub mod weights;

pub use scorer::{environmental_index, score, RiskScores};
pub use thresholds::RiskThresholds;
pub use weights::{CategoryWeights, CorroborationBonus, FactorWeight, TagWeight, WeightTable};
