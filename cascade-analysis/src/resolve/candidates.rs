//! Candidate pool construction.

use cascade_core::types::RetweetEvent;

use crate::model::EventLog;

/// The maximal parent pool for `event.user`: every user who retweeted
/// strictly earlier.
///
/// Causality is enforced here, at the source: the log is sorted by
/// `(timestamp, user_id)`, so the pool is the prefix left of the partition
/// point on strict timestamp order. Equal-timestamp users fall outside the
/// prefix and are mutually ineligible as parents of each other. No resolver
/// can produce a non-causal link from this pool.
pub fn candidates<'a>(log: &'a EventLog, event: &RetweetEvent) -> &'a [RetweetEvent] {
    let events = log.events();
    let split = events.partition_point(|e| e.timestamp < event.timestamp);
    &events[..split]
}
