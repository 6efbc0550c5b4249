//! Interaction-based influencer resolution.

use cascade_core::errors::ValidationError;
use cascade_core::types::{RetweetEvent, Timestamp, UserId};
use tracing::trace;

use crate::model::{EventLog, InteractionTable};

use super::candidates::candidates;
use super::InfluenceResolver;

/// Picks the strictly-earlier retweeter with the highest historical
/// interaction strength.
///
/// An all-zero candidate pool resolves to `None`: absence of any positive
/// signal means "no identifiable influencer", never "pick arbitrarily".
/// Ties on a strictly-positive maximum go to the latest timestamp (temporal
/// proximity), then the lowest user id.
pub struct InteractionResolver<'a> {
    table: &'a InteractionTable,
}

impl<'a> InteractionResolver<'a> {
    pub fn new(table: &'a InteractionTable) -> Self {
        Self { table }
    }
}

impl InfluenceResolver for InteractionResolver<'_> {
    fn name(&self) -> &'static str {
        "interaction"
    }

    /// Every user the interaction table mentions must have a retweet event.
    fn validate(&self, log: &EventLog) -> Result<(), ValidationError> {
        for user in self.table.users() {
            if !log.contains(user) {
                return Err(ValidationError::UnknownUser {
                    user: user.clone(),
                    table: "interaction",
                });
            }
        }
        Ok(())
    }

    fn resolve(&self, log: &EventLog, event: &RetweetEvent) -> Option<UserId> {
        let mut best: Option<(f64, Timestamp, &UserId)> = None;

        for candidate in candidates(log, event) {
            let score = self.table.strength(&event.user, &candidate.user);
            if score <= 0.0 {
                continue;
            }

            let better = match best {
                None => true,
                Some((best_score, best_ts, best_user)) => {
                    score > best_score
                        || (score == best_score
                            && (candidate.timestamp > best_ts
                                || (candidate.timestamp == best_ts
                                    && candidate.user < *best_user)))
                }
            };
            if better {
                best = Some((score, candidate.timestamp, &candidate.user));
            }
        }

        let parent = best.map(|(_, _, user)| user.clone());
        trace!(
            user = %event.user,
            parent = parent.as_ref().map(|p| p.as_str()),
            "interaction resolution"
        );
        parent
    }
}
