//! Structural invariant violations in a built forest.
//!
//! These indicate a resolver bug, not a data problem: the candidate pool
//! already enforces causality at the source, so a correct resolver can never
//! produce any of them. The builder checks anyway and fails fast.

use super::error_code::{self, CascadeErrorCode};
use crate::types::UserId;

/// Defensive checks on the assembled forest. Fatal, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("user {user} resolved to itself as parent")]
    SelfParent { user: UserId },

    #[error("non-causal link: parent {parent} does not strictly precede child {child}")]
    NonCausalParent { child: UserId, parent: UserId },

    #[error("child {child} resolved to parent {parent} with no retweet event")]
    UnknownParent { child: UserId, parent: UserId },

    #[error("duplicate assignment for user {user}")]
    DuplicateAssignment { user: UserId },

    #[error("assignment count mismatch: expected {expected}, got {actual}")]
    AssignmentCountMismatch { expected: usize, actual: usize },

    #[error("cycle detected through user {user}")]
    CycleDetected { user: UserId },
}

impl CascadeErrorCode for ForestError {
    fn error_code(&self) -> &'static str {
        error_code::FOREST_ERROR
    }
}
