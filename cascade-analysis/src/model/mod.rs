//! Normalized in-memory event model.
//!
//! The dataset loader (an external collaborator) supplies already-parsed
//! records; these types normalize them into the snapshots the resolvers
//! query: a causally-sorted event log, an unordered-pair interaction
//! strength table, and an orientation-aware friendship graph.

pub mod event_log;
pub mod friendship_graph;
pub mod interaction_table;

pub use event_log::EventLog;
pub use friendship_graph::FriendshipGraph;
pub use interaction_table::InteractionTable;
