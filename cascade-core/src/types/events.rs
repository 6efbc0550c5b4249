//! Retweet events and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User identifier, as supplied by the dataset loader (`id_str` values).
///
/// Ordering is lexicographic and is used as the final tie-break key in both
/// resolvers, so it must stay `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Event time in Unix milliseconds.
///
/// Only the total order matters to the estimation algorithms; causality is
/// always checked with strict `<`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single retweet of the tracked message.
///
/// One event per user per cascade; immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetweetEvent {
    pub user: UserId,
    pub timestamp: Timestamp,
}

impl RetweetEvent {
    pub fn new(user: impl Into<UserId>, timestamp: Timestamp) -> Self {
        Self {
            user: user.into(),
            timestamp,
        }
    }
}
