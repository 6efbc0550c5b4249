//! Forest types: per-user assignments, the forest snapshot, and its
//! petgraph adjacency view.

use cascade_core::errors::ForestError;
use cascade_core::types::collections::FxHashMap;
use cascade_core::types::{Timestamp, UserId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// The per-user result of resolution: exactly one per retweet event.
///
/// `parent = None` marks a disconnected node, either a true sub-tree root
/// or an evidence-free orphan; the forest does not distinguish the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeAssignment {
    pub child: UserId,
    pub parent: Option<UserId>,
}

/// All assignments of one cascade, plus the timestamp snapshot they were
/// resolved against and the strategy that produced them.
///
/// Produced fresh per estimation run and never mutated; re-running with
/// different inputs or strategy produces a new forest.
#[derive(Debug, Clone)]
pub struct CascadeForest {
    assignments: Vec<CascadeAssignment>,
    timestamps: FxHashMap<UserId, Timestamp>,
    strategy: &'static str,
}

impl CascadeForest {
    /// Assemble a forest from raw parts.
    ///
    /// Does not validate; [`CascadeGraph::from_forest`] is the invariant
    /// check, and the builder runs it before handing a forest out.
    pub fn from_parts(
        assignments: Vec<CascadeAssignment>,
        timestamps: FxHashMap<UserId, Timestamp>,
        strategy: &'static str,
    ) -> Self {
        Self {
            assignments,
            timestamps,
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments in event-log order.
    pub fn assignments(&self) -> &[CascadeAssignment] {
        &self.assignments
    }

    /// Name of the strategy that produced this forest.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    pub fn timestamp_of(&self, user: &UserId) -> Option<Timestamp> {
        self.timestamps.get(user).copied()
    }

    /// Resolved parent of `user`: `None` if unknown user, `Some(None)` if
    /// disconnected.
    pub fn parent_of(&self, user: &UserId) -> Option<Option<&UserId>> {
        self.assignments
            .iter()
            .find(|a| &a.child == user)
            .map(|a| a.parent.as_ref())
    }

    /// Users with no resolved parent.
    pub fn roots(&self) -> impl Iterator<Item = &UserId> {
        self.assignments
            .iter()
            .filter(|a| a.parent.is_none())
            .map(|a| &a.child)
    }

    pub fn disconnected_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.parent.is_none()).count()
    }
}

/// Petgraph adjacency view of a forest: edges point parent -> child.
///
/// Construction doubles as the structural invariant check: a forest that
/// violates causality, links to an unknown parent, self-parents, or carries
/// duplicate assignments fails here with a [`ForestError`]. Given correct
/// resolvers this is unreachable; it guards against future resolver bugs.
#[derive(Debug)]
pub struct CascadeGraph {
    pub graph: DiGraph<UserId, ()>,
    index: FxHashMap<UserId, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl CascadeGraph {
    /// Build and validate the adjacency view.
    pub fn from_forest(forest: &CascadeForest) -> Result<Self, ForestError> {
        let mut graph = DiGraph::with_capacity(forest.len(), forest.len());
        let mut index = FxHashMap::default();
        index.reserve(forest.len());
        let mut roots = Vec::new();

        for assignment in forest.assignments() {
            let idx = graph.add_node(assignment.child.clone());
            if index.insert(assignment.child.clone(), idx).is_some() {
                return Err(ForestError::DuplicateAssignment {
                    user: assignment.child.clone(),
                });
            }
            if assignment.parent.is_none() {
                roots.push(idx);
            }
        }

        for assignment in forest.assignments() {
            let Some(parent) = &assignment.parent else {
                continue;
            };
            if parent == &assignment.child {
                return Err(ForestError::SelfParent {
                    user: assignment.child.clone(),
                });
            }
            let Some(&parent_idx) = index.get(parent) else {
                return Err(ForestError::UnknownParent {
                    child: assignment.child.clone(),
                    parent: parent.clone(),
                });
            };

            // Strict causality. Equal timestamps are never a valid link, and
            // this check is also what structurally rules out cycles.
            let child_ts = forest.timestamp_of(&assignment.child);
            let parent_ts = forest.timestamp_of(parent);
            match (parent_ts, child_ts) {
                (Some(p), Some(c)) if p < c => {}
                _ => {
                    return Err(ForestError::NonCausalParent {
                        child: assignment.child.clone(),
                        parent: parent.clone(),
                    });
                }
            }

            let child_idx = index[&assignment.child];
            graph.add_edge(parent_idx, child_idx, ());
        }

        Ok(Self {
            graph,
            index,
            roots,
        })
    }

    pub fn get_node(&self, user: &UserId) -> Option<NodeIndex> {
        self.index.get(user).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Nodes with no resolved parent, in forest order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Direct children of a node.
    pub fn children(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    /// Direct-child count (the node's contribution).
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.children(node).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest(rows: &[(&str, Option<&str>, i64)]) -> CascadeForest {
        let assignments = rows
            .iter()
            .map(|(child, parent, _)| CascadeAssignment {
                child: UserId::from(*child),
                parent: parent.map(UserId::from),
            })
            .collect();
        let timestamps = rows
            .iter()
            .map(|(child, _, ts)| (UserId::from(*child), Timestamp::from_millis(*ts)))
            .collect();
        CascadeForest::from_parts(assignments, timestamps, "test")
    }

    #[test]
    fn test_valid_forest_builds_graph() {
        let f = forest(&[("a", None, 0), ("b", Some("a"), 1), ("c", Some("a"), 2)]);
        let g = CascadeGraph::from_forest(&f).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.roots().len(), 1);
        let a = g.get_node(&UserId::from("a")).unwrap();
        assert_eq!(g.out_degree(a), 2);
    }

    #[test]
    fn test_self_parent_rejected() {
        let f = forest(&[("a", Some("a"), 0)]);
        let err = CascadeGraph::from_forest(&f).unwrap_err();
        assert!(matches!(err, ForestError::SelfParent { .. }));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let f = forest(&[("a", None, 0), ("b", Some("z"), 1)]);
        let err = CascadeGraph::from_forest(&f).unwrap_err();
        assert!(matches!(err, ForestError::UnknownParent { .. }));
    }

    #[test]
    fn test_equal_timestamp_link_rejected() {
        let f = forest(&[("a", None, 5), ("b", Some("a"), 5)]);
        let err = CascadeGraph::from_forest(&f).unwrap_err();
        assert!(matches!(err, ForestError::NonCausalParent { .. }));
    }

    #[test]
    fn test_backwards_link_rejected() {
        let f = forest(&[("a", None, 5), ("b", Some("a"), 1)]);
        let err = CascadeGraph::from_forest(&f).unwrap_err();
        assert!(matches!(err, ForestError::NonCausalParent { .. }));
    }

    #[test]
    fn test_duplicate_assignment_rejected() {
        let f = forest(&[("a", None, 0), ("a", None, 0)]);
        let err = CascadeGraph::from_forest(&f).unwrap_err();
        assert!(matches!(err, ForestError::DuplicateAssignment { .. }));
    }
}
