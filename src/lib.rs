pub mod assessment; // Sole entry point: report + reading -> RiskAssessment
pub mod config; // Calibration tables, file loading and validation
pub mod environment; // Raw measurements -> 0-100 severities
pub mod helpers; // Score clamping and rounding
pub mod models; // Shared report, reading and assessment types
pub mod recommendations; // Ranked, deduplicated advice
pub mod scoring; // Category risks + environmental stress index
pub mod signals; // Weak-signal extraction from symptom text

pub use assessment::{assemble, AssessmentAssembler, AssessmentError};
pub use config::{ConfigError, EngineConfig};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber for host binaries and tools.
/// Honours RUST_LOG; a second call is a no-op.
pub fn init_tracing() {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("{} engine v{}", config::APP_NAME, config::APP_VERSION);
    }
}
