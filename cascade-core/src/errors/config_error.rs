//! Configuration errors.

use super::error_code::{self, CascadeErrorCode};

/// Errors raised while parsing or validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TOML: {message}")]
    ParseError { message: String },

    #[error("interaction weight `{name}` must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("parallel_threshold must be at least 1")]
    ZeroParallelThreshold,
}

impl CascadeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
