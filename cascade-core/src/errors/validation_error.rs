//! Input-contract violations raised by callers handing in malformed data.
//!
//! Degenerate-but-valid data (no interaction signal, no friendship link,
//! earliest retweeter) is never an error; it resolves to a disconnected node.

use super::error_code::{self, CascadeErrorCode};
use crate::types::UserId;

/// Errors in the records supplied by the dataset loader.
/// Surfaced immediately; never retried, never silently repaired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate retweet event for user {user}")]
    DuplicateUser { user: UserId },

    #[error("user {user} referenced in {table} data has no retweet event in this cascade")]
    UnknownUser { user: UserId, table: &'static str },

    #[error("negative interaction strength {strength} for pair ({user_a}, {user_b})")]
    NegativeStrength {
        user_a: UserId,
        user_b: UserId,
        strength: f64,
    },
}

impl CascadeErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
