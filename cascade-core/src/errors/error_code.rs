//! Stable machine-readable error codes.
//!
//! Codes are part of the reporting contract: they never change once
//! published, even if the display message does.

pub const VALIDATION_ERROR: &str = "CASCADE_VALIDATION";
pub const FOREST_ERROR: &str = "CASCADE_FOREST_INVARIANT";
pub const CONFIG_ERROR: &str = "CASCADE_CONFIG";

/// Trait implemented by every subsystem error enum.
pub trait CascadeErrorCode {
    /// Stable code identifying the error class.
    fn error_code(&self) -> &'static str;
}
