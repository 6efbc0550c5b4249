//! Unordered-pair interaction strength lookup.

use cascade_core::config::InteractionWeights;
use cascade_core::errors::ValidationError;
use cascade_core::types::collections::FxHashMap;
use cascade_core::types::{InteractionCounts, InteractionRecord, UserId};

/// Historical interaction strengths, queryable by unordered user pair.
///
/// Sparse by design: a missing pair reads as strength 0.0. Duplicate records
/// for the same pair accumulate.
///
/// Stored as a nested map keyed lower id then higher id, so the hot-path
/// [`strength`](Self::strength) lookup borrows both ids and never clones.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    strengths: FxHashMap<UserId, FxHashMap<UserId, f64>>,
    pair_count: usize,
}

impl InteractionTable {
    /// Build from pre-computed strength records.
    ///
    /// Errors with [`ValidationError::NegativeStrength`] on a negative or
    /// non-finite strength; interaction intensity is a non-negative real.
    pub fn from_records(records: &[InteractionRecord]) -> Result<Self, ValidationError> {
        let mut table = Self::default();
        for record in records {
            if !record.strength.is_finite() || record.strength < 0.0 {
                return Err(ValidationError::NegativeStrength {
                    user_a: record.user_a.clone(),
                    user_b: record.user_b.clone(),
                    strength: record.strength,
                });
            }
            table.add(&record.user_a, &record.user_b, record.strength);
        }
        Ok(table)
    }

    /// Build from raw per-kind counts, folding them with the given weights.
    ///
    /// This is the shape the source datasets carry: per-pair quote, reply,
    /// and retweet counts; `strength = qt*w_qt + re*w_re + rt*w_rt`.
    pub fn from_counts(
        rows: &[(UserId, UserId, InteractionCounts)],
        weights: &InteractionWeights,
    ) -> Self {
        let mut table = Self::default();
        for (a, b, counts) in rows {
            table.add(a, b, counts.strength(weights));
        }
        table
    }

    fn add(&mut self, a: &UserId, b: &UserId, strength: f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let inner = self.strengths.entry(low.clone()).or_default();
        if let Some(slot) = inner.get_mut(high) {
            *slot += strength;
        } else {
            inner.insert(high.clone(), strength);
            self.pair_count += 1;
        }
    }

    /// Interaction strength between `a` and `b`; 0.0 when no record exists.
    pub fn strength(&self, a: &UserId, b: &UserId) -> f64 {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        self.strengths
            .get(low)
            .and_then(|inner| inner.get(high))
            .copied()
            .unwrap_or(0.0)
    }

    /// Every user mentioned on either side of a pair.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.strengths
            .iter()
            .flat_map(|(low, inner)| std::iter::once(low).chain(inner.keys()))
    }

    /// Number of distinct unordered pairs with a recorded strength.
    pub fn len(&self) -> usize {
        self.pair_count
    }

    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(a: &str, b: &str, strength: f64) -> InteractionRecord {
        InteractionRecord::new(a, b, strength)
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = InteractionTable::from_records(&[record("a", "b", 3.0)]).unwrap();
        let (a, b) = (UserId::from("a"), UserId::from("b"));
        assert_eq!(table.strength(&a, &b), 3.0);
        assert_eq!(table.strength(&b, &a), 3.0);
    }

    #[test]
    fn test_absent_pair_reads_zero() {
        let table = InteractionTable::from_records(&[record("a", "b", 3.0)]).unwrap();
        assert_eq!(table.strength(&UserId::from("a"), &UserId::from("z")), 0.0);
    }

    #[test]
    fn test_duplicate_pairs_accumulate() {
        let table =
            InteractionTable::from_records(&[record("a", "b", 3.0), record("b", "a", 2.0)])
                .unwrap();
        assert_eq!(table.strength(&UserId::from("a"), &UserId::from("b")), 5.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_pairs_sharing_a_user_counted_separately() {
        let table = InteractionTable::from_records(&[
            record("a", "b", 1.0),
            record("a", "c", 2.0),
            record("c", "a", 1.0),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.strength(&UserId::from("a"), &UserId::from("c")), 3.0);
        let mut users: Vec<&str> = table.users().map(|u| u.as_str()).collect();
        users.sort_unstable();
        users.dedup();
        assert_eq!(users, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_negative_strength_rejected() {
        let err = InteractionTable::from_records(&[record("a", "b", -1.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeStrength { .. }));
    }

    #[test]
    fn test_from_counts_folds_with_weights() {
        let rows = vec![(
            UserId::from("a"),
            UserId::from("b"),
            InteractionCounts::new(1, 1, 1),
        )];
        let table = InteractionTable::from_counts(&rows, &InteractionWeights::default());
        assert_eq!(table.strength(&UserId::from("a"), &UserId::from("b")), 3.0);
    }
}
