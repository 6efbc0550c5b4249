//! Forest analysis: depth, level counts, disconnected nodes, contributions.

use std::collections::VecDeque;

use cascade_core::errors::ForestError;
use cascade_core::types::UserId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CascadeForest, CascadeGraph};

/// One influencer's contribution: how many users retweeted directly
/// through them (out-degree in the forest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub influencer: UserId,
    pub count: u32,
}

/// Summary statistics of a cascade forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeSummary {
    /// Nodes with no resolved parent.
    pub disconnected_count: usize,
    /// Maximum level over all nodes; roots are level 0.
    pub depth: u32,
    /// Node count per level; `level_counts[0]` is the root count.
    /// Empty for an empty forest.
    pub level_counts: Vec<usize>,
    /// Influencers with at least one direct child, by descending count,
    /// ties by ascending user id.
    pub contributions: Vec<Contribution>,
}

/// Compute summary statistics from a built forest.
///
/// Total for any valid forest, including the degenerate all-disconnected
/// one (depth 0, empty contributions). The structural invariants are
/// re-checked defensively, mirroring the builder.
pub fn analyze_forest(forest: &CascadeForest) -> Result<CascadeSummary, ForestError> {
    let graph = CascadeGraph::from_forest(forest)?;

    // Top-down BFS from all roots. In a valid forest every node hangs off
    // exactly one root chain, so this visits each node once.
    let mut level_counts: Vec<usize> = Vec::new();
    let mut visited = 0usize;
    let mut queue: VecDeque<_> = graph.roots().iter().map(|&idx| (idx, 0u32)).collect();

    while let Some((node, level)) = queue.pop_front() {
        visited += 1;
        let level = level as usize;
        if level_counts.len() <= level {
            level_counts.resize(level + 1, 0);
        }
        level_counts[level] += 1;

        for child in graph.children(node) {
            queue.push_back((child, level as u32 + 1));
        }
    }

    // Unreachable nodes would mean a parent chain that never reaches a
    // root, which only a cycle can produce. Causality already forbids it;
    // keep the check as the last line of defense.
    if visited != graph.node_count() {
        let unreachable = first_unvisited(forest, &graph);
        return Err(ForestError::CycleDetected { user: unreachable });
    }

    let mut contributions: Vec<Contribution> = graph
        .graph
        .node_indices()
        .filter_map(|idx| {
            let count = graph.out_degree(idx) as u32;
            (count > 0).then(|| Contribution {
                influencer: graph.graph[idx].clone(),
                count,
            })
        })
        .collect();
    contributions.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.influencer.cmp(&b.influencer))
    });

    let summary = CascadeSummary {
        disconnected_count: forest.disconnected_count(),
        depth: level_counts.len().saturating_sub(1) as u32,
        level_counts,
        contributions,
    };

    debug!(
        nodes = forest.len(),
        depth = summary.depth,
        disconnected = summary.disconnected_count,
        "cascade forest analyzed"
    );
    Ok(summary)
}

fn first_unvisited(forest: &CascadeForest, graph: &CascadeGraph) -> UserId {
    // Re-run the BFS marking, then report any node left out.
    let mut seen = vec![false; graph.node_count()];
    let mut queue: VecDeque<_> = graph.roots().iter().copied().collect();
    for &root in graph.roots() {
        seen[root.index()] = true;
    }
    while let Some(node) = queue.pop_front() {
        for child in graph.children(node) {
            if !seen[child.index()] {
                seen[child.index()] = true;
                queue.push_back(child);
            }
        }
    }
    graph
        .graph
        .node_indices()
        .find(|idx| !seen[idx.index()])
        .map(|idx| graph.graph[idx].clone())
        .unwrap_or_else(|| forest.assignments()[0].child.clone())
}
