use serde::{Deserialize, Serialize};

use super::enums::SignalKind;

/// One weak signal found in report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalTag {
    pub kind: SignalKind,
    /// Weight in [0, 1].
    pub confidence: f64,
    /// Lexicon marker that produced the tag, `None` for structural cues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl SignalTag {
    pub fn lexical(kind: SignalKind, confidence: f64, marker: &str) -> Self {
        Self {
            kind,
            confidence: confidence.clamp(0.0, 1.0),
            marker: Some(marker.to_string()),
        }
    }

    pub fn structural(kind: SignalKind, confidence: f64) -> Self {
        Self {
            kind,
            confidence: confidence.clamp(0.0, 1.0),
            marker: None,
        }
    }
}
