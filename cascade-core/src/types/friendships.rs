//! Friendship / follow edges.

use serde::{Deserialize, Serialize};

use super::events::UserId;

/// A directed follow edge: `follower` follows `followee`.
///
/// How an edge makes a candidate eligible is decided by the configured
/// [`FriendshipOrientation`](crate::config::FriendshipOrientation), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FriendshipEdge {
    pub follower: UserId,
    pub followee: UserId,
}

impl FriendshipEdge {
    pub fn new(follower: impl Into<UserId>, followee: impl Into<UserId>) -> Self {
        Self {
            follower: follower.into(),
            followee: followee.into(),
        }
    }
}
