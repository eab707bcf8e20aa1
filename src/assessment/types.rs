use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AssessmentError {
    /// The report carries no usable symptom text. Fatal: no assessment.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
