//! Error handling for the cascade engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod estimation_error;
pub mod forest_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::CascadeErrorCode;
pub use estimation_error::EstimationError;
pub use forest_error::ForestError;
pub use validation_error::ValidationError;
