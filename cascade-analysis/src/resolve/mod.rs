//! Influencer resolution strategies.
//!
//! A resolver answers one question: given a retweeter and everyone who
//! retweeted strictly earlier, who did they most probably retweet from?
//! The two strategies are mutually exclusive alternatives with the same
//! output shape, consumed identically by the forest builder.

pub mod candidates;
pub mod friendship;
pub mod interaction;

pub use candidates::candidates;
pub use friendship::FriendshipResolver;
pub use interaction::InteractionResolver;

use cascade_core::errors::ValidationError;
use cascade_core::types::{RetweetEvent, UserId};

use crate::model::EventLog;

/// Strategy seam for influencer inference.
///
/// Implementations are pure: `resolve` is a function of the log and the
/// target event only, and must be deterministic including tie-breaks, so
/// that per-user resolution can run in parallel without changing output.
pub trait InfluenceResolver {
    /// Strategy name, recorded on the produced forest.
    fn name(&self) -> &'static str;

    /// Check the resolver's auxiliary data against the event log.
    ///
    /// Default: nothing to check.
    fn validate(&self, log: &EventLog) -> Result<(), ValidationError> {
        let _ = log;
        Ok(())
    }

    /// The most probable influencer of `event.user`, or `None` when no
    /// identifiable influencer exists among the strictly-earlier retweeters.
    fn resolve(&self, log: &EventLog, event: &RetweetEvent) -> Option<UserId>;
}
