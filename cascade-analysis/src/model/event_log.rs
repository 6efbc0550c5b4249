//! Causally-sorted retweet event log for one cascade.

use cascade_core::errors::ValidationError;
use cascade_core::types::collections::FxHashMap;
use cascade_core::types::{RetweetEvent, Timestamp, UserId};

/// All retweet events of one cascade, sorted by `(timestamp, user_id)`.
///
/// The sort order is what makes candidate selection a prefix slice: every
/// user's candidate pool is exactly the strictly-earlier prefix of this log.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Vec<RetweetEvent>,
    index: FxHashMap<UserId, usize>,
}

impl EventLog {
    /// Normalize a collection of events supplied in arbitrary order.
    ///
    /// Errors with [`ValidationError::DuplicateUser`] if a user appears more
    /// than once; a user retweets the tracked message at most once.
    pub fn new(mut events: Vec<RetweetEvent>) -> Result<Self, ValidationError> {
        events.sort_by(|a, b| (a.timestamp, &a.user).cmp(&(b.timestamp, &b.user)));

        let mut index = FxHashMap::default();
        index.reserve(events.len());
        for (pos, event) in events.iter().enumerate() {
            if index.insert(event.user.clone(), pos).is_some() {
                return Err(ValidationError::DuplicateUser {
                    user: event.user.clone(),
                });
            }
        }

        Ok(Self { events, index })
    }

    /// Normalize events, keeping only the earliest event per user.
    ///
    /// Explicit opt-in for loaders whose raw dumps contain repeated retweets
    /// by the same user; [`EventLog::new`] rejects such input instead.
    pub fn dedup_earliest(mut events: Vec<RetweetEvent>) -> Self {
        events.sort_by(|a, b| (a.timestamp, &a.user).cmp(&(b.timestamp, &b.user)));

        let mut index = FxHashMap::default();
        let mut kept = Vec::with_capacity(events.len());
        for event in events {
            if !index.contains_key(&event.user) {
                index.insert(event.user.clone(), kept.len());
                kept.push(event);
            }
        }

        Self {
            events: kept,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in `(timestamp, user_id)` order.
    pub fn events(&self) -> &[RetweetEvent] {
        &self.events
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.index.contains_key(user)
    }

    pub fn timestamp_of(&self, user: &UserId) -> Option<Timestamp> {
        self.index.get(user).map(|&pos| self.events[pos].timestamp)
    }
}
