use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::environment::{default_curves, FactorCurve};
use crate::scoring::{RiskThresholds, WeightTable};
use crate::signals::ExtractionSettings;

/// Application-level constants
pub const APP_NAME: &str = "weaksignal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at an engine configuration file.
pub const CONFIG_ENV_VAR: &str = "WEAKSIGNAL_CONFIG";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "weaksignal_lib=info"
}

/// Where the engine looks for its calibration file.
/// `$WEAKSIGNAL_CONFIG` wins, then `<config dir>/weaksignal/engine.json`.
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn resolve_config_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| dirs::config_dir().map(|d| d.join(APP_NAME).join("engine.json")))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse config {0}: {1}")]
    Parse(String, String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

// ═══════════════════════════════════════════════════════════
// EngineConfig
// ═══════════════════════════════════════════════════════════

/// Every calibration table the engine reads. `Default` is the reference
/// calibration; a JSON file may override any section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub curves: Vec<FactorCurve>,
    pub weights: WeightTable,
    pub thresholds: RiskThresholds,
    pub extraction: ExtractionSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            curves: default_curves(),
            weights: WeightTable::default(),
            thresholds: RiskThresholds::default(),
            extraction: ExtractionSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(path.display().to_string(), e.to_string()))?;
        let config: EngineConfig = serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        tracing::info!(path = %path.display(), curves = config.curves.len(), "Engine config loaded");
        Ok(config)
    }

    /// Load from [`config_path`], falling back to the reference calibration.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No engine config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Engine config rejected, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, curve) in self.curves.iter().enumerate() {
            curve.check().map_err(ConfigError::Invalid)?;
            if self.curves[..i].iter().any(|c| c.kind == curve.kind) {
                return Err(ConfigError::Invalid(format!(
                    "curve {} defined more than once",
                    curve.kind
                )));
            }
        }
        self.weights.check().map_err(ConfigError::Invalid)?;
        self.thresholds.check().map_err(ConfigError::Invalid)?;

        let x = &self.extraction;
        if x.fragmentation_token_threshold == 0 {
            return Err(ConfigError::Invalid(
                "fragmentation_token_threshold must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("fragmentation_confidence", x.fragmentation_confidence),
            ("lexical_confidence", x.lexical_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must be within [0, 1]")));
            }
        }
        Ok(())
    }
}
