//! # cascade-analysis
//!
//! Reconstructs the most likely propagation tree ("cascade") of a single
//! original message from its retweet events, and summarizes that tree.
//!
//! Two mutually exclusive strategies resolve, for every retweeter, the one
//! user they most probably retweeted from:
//! - **interaction-based**: the strictly-earlier retweeter with the highest
//!   historical interaction strength;
//! - **friendship-based**: the most recent strictly-earlier retweeter the
//!   user is friendship-linked to.
//!
//! Both produce the same output shape: a [`CascadeForest`] of per-user
//! parent assignments, where `parent = None` marks a disconnected node.
//! The [`analyze`] step derives depth, per-level counts, disconnected-node
//! count, and per-influencer contributions from a built forest.
//!
//! The crate is pure batch computation over immutable snapshots: no I/O,
//! no shared state, and deterministic output including all tie-breaks.
//!
//! ```
//! use cascade_analysis::{analyze, resolve_by_interaction};
//! use cascade_analysis::model::InteractionTable;
//! use cascade_core::types::{InteractionRecord, RetweetEvent, Timestamp};
//!
//! let events = vec![
//!     RetweetEvent::new("a", Timestamp::from_millis(0)),
//!     RetweetEvent::new("b", Timestamp::from_millis(1)),
//! ];
//! let table = InteractionTable::from_records(&[
//!     InteractionRecord::new("b", "a", 5.0),
//! ]).unwrap();
//!
//! let forest = resolve_by_interaction(&events, &table).unwrap();
//! let summary = analyze(&forest).unwrap();
//! assert_eq!(summary.depth, 1);
//! assert_eq!(summary.disconnected_count, 1);
//! ```

pub mod forest;
pub mod model;
pub mod resolve;

pub use forest::analyzer::{analyze_forest, CascadeSummary, Contribution};
pub use forest::builder::{build_forest, build_forest_with_config};
pub use forest::report::{rows, CascadeRow};
pub use forest::types::{CascadeAssignment, CascadeForest, CascadeGraph};
pub use model::{EventLog, FriendshipGraph, InteractionTable};
pub use resolve::{FriendshipResolver, InfluenceResolver, InteractionResolver};

use cascade_core::config::EstimationConfig;
use cascade_core::errors::EstimationError;
use cascade_core::types::{FriendshipEdge, InteractionCounts, RetweetEvent, UserId};
use tracing::debug;

/// Estimate a cascade with the interaction-based strategy.
///
/// Convenience wrapper: normalizes `events` into an [`EventLog`] and runs
/// the [`InteractionResolver`] through the forest builder.
pub fn resolve_by_interaction(
    events: &[RetweetEvent],
    interactions: &InteractionTable,
) -> Result<CascadeForest, EstimationError> {
    let log = EventLog::new(events.to_vec())?;
    build_forest(&log, &InteractionResolver::new(interactions))
}

/// Estimate a cascade with the friendship-based strategy.
///
/// An empty friendship graph is valid and yields an all-disconnected forest.
pub fn resolve_by_friendship(
    events: &[RetweetEvent],
    friendships: &FriendshipGraph,
) -> Result<CascadeForest, EstimationError> {
    let log = EventLog::new(events.to_vec())?;
    build_forest(&log, &FriendshipResolver::new(friendships))
}

/// Estimate a cascade from raw per-kind interaction counts, folding them
/// with the configured weights.
///
/// This is the fully config-driven path: `config.weights` decides the
/// strength folding and `config.parallel_threshold` the resolution mode.
pub fn resolve_by_interaction_with_config(
    events: &[RetweetEvent],
    counts: &[(UserId, UserId, InteractionCounts)],
    config: &EstimationConfig,
) -> Result<CascadeForest, EstimationError> {
    config.validate()?;
    let log = EventLog::new(events.to_vec())?;
    let table = InteractionTable::from_counts(counts, &config.weights);
    build_forest_with_config(&log, &InteractionResolver::new(&table), config)
}

/// Estimate a cascade from raw follow edges, oriented per
/// `config.orientation`.
pub fn resolve_by_friendship_with_config(
    events: &[RetweetEvent],
    edges: &[FriendshipEdge],
    config: &EstimationConfig,
) -> Result<CascadeForest, EstimationError> {
    config.validate()?;
    debug!(
        orientation = config.orientation.as_str(),
        edges = edges.len(),
        "orienting friendship graph"
    );
    let log = EventLog::new(events.to_vec())?;
    let graph = FriendshipGraph::from_edges(edges, config.orientation);
    build_forest_with_config(&log, &FriendshipResolver::new(&graph), config)
}

/// Summarize a built forest: disconnected count, depth, nodes per level,
/// and per-influencer contributions.
pub fn analyze(forest: &CascadeForest) -> Result<CascadeSummary, EstimationError> {
    Ok(analyze_forest(forest)?)
}
