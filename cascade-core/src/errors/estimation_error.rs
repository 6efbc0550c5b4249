//! Top-level estimation errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::CascadeErrorCode;
use super::{ConfigError, ForestError, ValidationError};

/// Errors that can surface from a cascade estimation run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("forest invariant violated: {0}")]
    Forest(#[from] ForestError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CascadeErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Forest(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
