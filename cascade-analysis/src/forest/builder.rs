//! Forest assembly: run a resolver over every event, validate, return.

use cascade_core::config::EstimationConfig;
use cascade_core::errors::{EstimationError, ForestError};
use cascade_core::types::collections::FxHashMap;
use cascade_core::types::RetweetEvent;
use rayon::prelude::*;
use tracing::debug;

use crate::model::EventLog;
use crate::resolve::{candidates, InfluenceResolver};

use super::types::{CascadeAssignment, CascadeForest, CascadeGraph};

/// Build a forest with default configuration.
pub fn build_forest<R>(log: &EventLog, resolver: &R) -> Result<CascadeForest, EstimationError>
where
    R: InfluenceResolver + Sync,
{
    build_forest_with_config(log, resolver, &EstimationConfig::default())
}

/// Build a forest: validate the resolver's inputs, resolve every event,
/// assemble assignments in log order, then check the structural invariants
/// and fail fast on violation.
///
/// Resolution is data-parallel above the configured threshold; per-user
/// resolution is independent and deterministic, so the parallel path is
/// bit-identical to the serial one.
pub fn build_forest_with_config<R>(
    log: &EventLog,
    resolver: &R,
    config: &EstimationConfig,
) -> Result<CascadeForest, EstimationError>
where
    R: InfluenceResolver + Sync,
{
    config.validate()?;
    resolver.validate(log)?;

    debug!(
        strategy = resolver.name(),
        events = log.len(),
        "building cascade forest"
    );

    let resolve_one = |event: &RetweetEvent| {
        // Empty pool short-circuits: the earliest (or tied-earliest)
        // retweeter is disconnected without consulting the resolver.
        let parent = if candidates(log, event).is_empty() {
            None
        } else {
            resolver.resolve(log, event)
        };
        CascadeAssignment {
            child: event.user.clone(),
            parent,
        }
    };

    let assignments: Vec<CascadeAssignment> =
        if log.len() >= config.effective_parallel_threshold() {
            log.events().par_iter().map(resolve_one).collect()
        } else {
            log.events().iter().map(resolve_one).collect()
        };

    let timestamps: FxHashMap<_, _> = log
        .events()
        .iter()
        .map(|e| (e.user.clone(), e.timestamp))
        .collect();

    let forest = CascadeForest::from_parts(assignments, timestamps, resolver.name());
    validate_forest(&forest, log)?;

    debug!(
        strategy = resolver.name(),
        nodes = forest.len(),
        disconnected = forest.disconnected_count(),
        "cascade forest built"
    );
    Ok(forest)
}

/// Defensive invariant check. Violations indicate a resolver bug, never a
/// data problem, and are fatal.
fn validate_forest(forest: &CascadeForest, log: &EventLog) -> Result<(), ForestError> {
    if forest.len() != log.len() {
        return Err(ForestError::AssignmentCountMismatch {
            expected: log.len(),
            actual: forest.len(),
        });
    }
    // Graph construction checks the per-edge invariants: duplicates,
    // self-parents, unknown parents, strict causality.
    CascadeGraph::from_forest(forest)?;
    Ok(())
}
