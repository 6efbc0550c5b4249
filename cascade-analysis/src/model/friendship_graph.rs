//! Orientation-aware friendship adjacency.

use cascade_core::config::FriendshipOrientation;
use cascade_core::types::collections::{FxHashMap, FxHashSet};
use cascade_core::types::{FriendshipEdge, UserId};

/// Follow edges between users, with a configured orientation deciding which
/// direction links a retweeter to a candidate parent.
///
/// An empty graph is valid; it degrades the friendship strategy to an
/// all-disconnected forest.
#[derive(Debug, Clone)]
pub struct FriendshipGraph {
    /// follower -> set of followees.
    following: FxHashMap<UserId, FxHashSet<UserId>>,
    orientation: FriendshipOrientation,
    edge_count: usize,
}

impl FriendshipGraph {
    pub fn new(orientation: FriendshipOrientation) -> Self {
        Self {
            following: FxHashMap::default(),
            orientation,
            edge_count: 0,
        }
    }

    /// Build from directed follow edges.
    pub fn from_edges(edges: &[FriendshipEdge], orientation: FriendshipOrientation) -> Self {
        let mut graph = Self::new(orientation);
        for edge in edges {
            graph.add_edge(edge.follower.clone(), edge.followee.clone());
        }
        graph
    }

    /// Build from an adjacency map (user -> users they follow), the shape
    /// the source datasets serialize their `friends` lookup in.
    pub fn from_adjacency<I, F>(adjacency: I, orientation: FriendshipOrientation) -> Self
    where
        I: IntoIterator<Item = (UserId, F)>,
        F: IntoIterator<Item = UserId>,
    {
        let mut graph = Self::new(orientation);
        for (follower, followees) in adjacency {
            for followee in followees {
                graph.add_edge(follower.clone(), followee);
            }
        }
        graph
    }

    pub fn add_edge(&mut self, follower: UserId, followee: UserId) {
        if self.following.entry(follower).or_default().insert(followee) {
            self.edge_count += 1;
        }
    }

    fn follows(&self, follower: &UserId, followee: &UserId) -> bool {
        self.following
            .get(follower)
            .is_some_and(|set| set.contains(followee))
    }

    /// Whether `candidate` is friendship-linked to `user` under the
    /// configured orientation.
    pub fn linked(&self, user: &UserId, candidate: &UserId) -> bool {
        match self.orientation {
            FriendshipOrientation::Following => self.follows(user, candidate),
            FriendshipOrientation::FollowedBy => self.follows(candidate, user),
            FriendshipOrientation::Mutual => {
                self.follows(user, candidate) || self.follows(candidate, user)
            }
        }
    }

    /// Every user mentioned on either end of an edge.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.following
            .iter()
            .flat_map(|(follower, followees)| std::iter::once(follower).chain(followees))
    }

    pub fn orientation(&self) -> FriendshipOrientation {
        self.orientation
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
