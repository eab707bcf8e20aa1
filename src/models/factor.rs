use serde::{Deserialize, Serialize};

use super::enums::FactorKind;

/// Severity of one environmental factor on a 0-100 scale.
///
/// Unknown measurements never produce a `NormalizedFactor`; absence of the
/// factor is the unknown sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFactor {
    pub kind: FactorKind,
    pub severity: f64,
    /// Measurement the severity was derived from (after clamping non-finite input).
    pub raw_value: f64,
}
