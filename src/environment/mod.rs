pub mod curve;
pub mod normalizer;

pub use curve::{default_curves, Breakpoint, FactorCurve};
pub use normalizer::{normalize, normalize_measurement, normalize_optional};
