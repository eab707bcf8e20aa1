pub mod assessment;
pub mod enums;
pub mod factor;
pub mod reading;
pub mod report;
pub mod signal;

pub use assessment::{CategoryRisk, CategoryScores, Recommendation, RiskAssessment};
pub use enums::{
    AssessmentStatus, EnvironmentalConfidence, FactorKind, ParseEnumError, Priority,
    RiskCategory, RiskLevel, SignalKind,
};
pub use factor::NormalizedFactor;
pub use reading::EnvironmentalReading;
pub use report::{GeoPoint, SymptomReport};
pub use signal::SignalTag;
