//! Flat-table reporting boundary.
//!
//! The forest stays the internal representation; callers that want the
//! published source/target edge-table shape flatten here, at the boundary
//! only.

use cascade_core::types::UserId;
use serde::{Deserialize, Serialize};

use super::types::CascadeForest;

/// One row of the flat cascade table: `source` retweeted through `target`.
/// Disconnected nodes carry `target = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeRow {
    pub source: UserId,
    pub target: Option<UserId>,
}

/// Flatten a forest into rows, one per assignment, in forest order.
pub fn rows(forest: &CascadeForest) -> Vec<CascadeRow> {
    forest
        .assignments()
        .iter()
        .map(|a| CascadeRow {
            source: a.child.clone(),
            target: a.parent.clone(),
        })
        .collect()
}
