use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WGS84 coordinates of the place a report or reading refers to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A free-text self-report as submitted by the collaborator UI.
///
/// `text` is optional on the wire so that a missing field can be told apart
/// from a present one; the assembler rejects a missing or blank text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomReport {
    #[serde(default)]
    pub text: Option<String>,
    pub location: GeoPoint,
    pub reported_at: DateTime<Utc>,
}

impl SymptomReport {
    pub fn new(text: impl Into<String>, location: GeoPoint, reported_at: DateTime<Utc>) -> Self {
        Self {
            text: Some(text.into()),
            location,
            reported_at,
        }
    }

    /// Report text if present and not blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}
