//! Shared value types for cascade estimation.

pub mod collections;
pub mod events;
pub mod friendships;
pub mod interactions;

pub use events::{RetweetEvent, Timestamp, UserId};
pub use friendships::FriendshipEdge;
pub use interactions::{InteractionCounts, InteractionRecord};
