//! Friendship-based influencer resolution.

use cascade_core::errors::ValidationError;
use cascade_core::types::{RetweetEvent, UserId};
use tracing::trace;

use crate::model::{EventLog, FriendshipGraph};

use super::candidates::candidates;
use super::InfluenceResolver;

/// Picks the last friend who already retweeted: among the strictly-earlier
/// retweeters the user is friendship-linked to, the one with the latest
/// timestamp wins, ties broken by the lowest user id.
///
/// No linked candidate resolves to `None`; a wholly empty friendship graph
/// degrades the cascade to an all-disconnected forest, which is valid.
pub struct FriendshipResolver<'a> {
    graph: &'a FriendshipGraph,
}

impl<'a> FriendshipResolver<'a> {
    pub fn new(graph: &'a FriendshipGraph) -> Self {
        Self { graph }
    }
}

impl InfluenceResolver for FriendshipResolver<'_> {
    fn name(&self) -> &'static str {
        "friendship"
    }

    /// Every user the friendship graph mentions must have a retweet event.
    fn validate(&self, log: &EventLog) -> Result<(), ValidationError> {
        for user in self.graph.users() {
            if !log.contains(user) {
                return Err(ValidationError::UnknownUser {
                    user: user.clone(),
                    table: "friendship",
                });
            }
        }
        Ok(())
    }

    fn resolve(&self, log: &EventLog, event: &RetweetEvent) -> Option<UserId> {
        let mut best: Option<&RetweetEvent> = None;

        for candidate in candidates(log, event) {
            if !self.graph.linked(&event.user, &candidate.user) {
                continue;
            }
            let better = match best {
                None => true,
                Some(found) => {
                    candidate.timestamp > found.timestamp
                        || (candidate.timestamp == found.timestamp
                            && candidate.user < found.user)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        let parent = best.map(|e| e.user.clone());
        trace!(
            user = %event.user,
            parent = parent.as_ref().map(|p| p.as_str()),
            "friendship resolution"
        );
        parent
    }
}
