//! Historical interaction records between user pairs.

use serde::{Deserialize, Serialize};

use crate::config::InteractionWeights;

use super::events::UserId;

/// Interaction intensity between two users, independent of any cascade.
///
/// The pair is unordered: `(a, b)` and `(b, a)` describe the same
/// relationship. Absence of a record means strength 0, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub user_a: UserId,
    pub user_b: UserId,
    pub strength: f64,
}

impl InteractionRecord {
    pub fn new(user_a: impl Into<UserId>, user_b: impl Into<UserId>, strength: f64) -> Self {
        Self {
            user_a: user_a.into(),
            user_b: user_b.into(),
            strength,
        }
    }
}

/// Raw per-kind interaction counts for a user pair.
///
/// Loaders that still have the typed counts (quotes, replies, retweets)
/// can carry them here and let the engine fold them into a strength with
/// the configured weights, instead of pre-computing a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionCounts {
    pub quotes: u32,
    pub replies: u32,
    pub retweets: u32,
}

impl InteractionCounts {
    pub fn new(quotes: u32, replies: u32, retweets: u32) -> Self {
        Self {
            quotes,
            replies,
            retweets,
        }
    }

    /// Weighted total strength: `quotes*w_qt + replies*w_re + retweets*w_rt`.
    pub fn strength(&self, weights: &InteractionWeights) -> f64 {
        f64::from(self.quotes) * weights.effective_quote()
            + f64::from(self.replies) * weights.effective_reply()
            + f64::from(self.retweets) * weights.effective_retweet()
    }
}
