//! Property tests over generated cascades: totality, causality, root
//! well-formedness, acyclicity, determinism, depth recomputation, and
//! contribution conservation.

use cascade_analysis::model::{FriendshipGraph, InteractionTable};
use cascade_analysis::{analyze, resolve_by_friendship, resolve_by_interaction, CascadeForest};
use cascade_core::config::FriendshipOrientation;
use cascade_core::types::collections::FxHashMap;
use cascade_core::types::{
    FriendshipEdge, InteractionRecord, RetweetEvent, Timestamp, UserId,
};
use proptest::prelude::*;

/// A generated cascade input: events with unique users and unique
/// timestamps, plus interaction and friendship data over those users.
#[derive(Debug, Clone)]
struct CascadeInput {
    events: Vec<RetweetEvent>,
    interactions: InteractionTable,
    friendships: FriendshipGraph,
}

fn user(i: usize) -> UserId {
    UserId::from(format!("u{i:03}"))
}

fn cascade_input() -> impl Strategy<Value = CascadeInput> {
    (2usize..24, any::<u64>()).prop_map(|(n, seed)| {
        // Cheap deterministic xorshift; proptest drives variety via `seed`.
        let mut state = seed | 1;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        // Unique timestamps: distinct multiples of a step with jittered order.
        let mut ts: Vec<i64> = (0..n as i64).map(|i| i * 10).collect();
        for i in (1..ts.len()).rev() {
            ts.swap(i, (next() as usize) % (i + 1));
        }
        let events: Vec<RetweetEvent> = ts
            .iter()
            .enumerate()
            .map(|(i, &t)| RetweetEvent::new(user(i), Timestamp::from_millis(t)))
            .collect();

        let mut records = Vec::new();
        let mut edges = Vec::new();
        for a in 0..n {
            for b in 0..a {
                if next() % 3 == 0 {
                    records.push(InteractionRecord::new(
                        user(a),
                        user(b),
                        (next() % 8) as f64,
                    ));
                }
                if next() % 3 == 0 {
                    edges.push(FriendshipEdge::new(user(a), user(b)));
                }
            }
        }

        CascadeInput {
            events,
            interactions: InteractionTable::from_records(&records).unwrap(),
            friendships: FriendshipGraph::from_edges(&edges, FriendshipOrientation::Following),
        }
    })
}

/// Independent level recomputation by parent-pointer walking.
fn recompute_levels(forest: &CascadeForest) -> FxHashMap<UserId, u32> {
    let parents: FxHashMap<UserId, Option<UserId>> = forest
        .assignments()
        .iter()
        .map(|a| (a.child.clone(), a.parent.clone()))
        .collect();

    let mut levels = FxHashMap::default();
    for assignment in forest.assignments() {
        let mut level = 0u32;
        let mut cursor = assignment.parent.as_ref();
        while let Some(parent) = cursor {
            level += 1;
            assert!(
                level as usize <= forest.len(),
                "parent chain longer than forest: cycle"
            );
            cursor = parents[parent].as_ref();
        }
        levels.insert(assignment.child.clone(), level);
    }
    levels
}

fn assert_forest_properties(input: &CascadeInput, forest: &CascadeForest) {
    // Totality: exactly one assignment per user.
    assert_eq!(forest.len(), input.events.len());
    let mut seen: Vec<&str> = forest
        .assignments()
        .iter()
        .map(|a| a.child.as_str())
        .collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), input.events.len());

    // Causality: parents strictly precede children.
    for assignment in forest.assignments() {
        if let Some(parent) = &assignment.parent {
            let child_ts = forest.timestamp_of(&assignment.child).unwrap();
            let parent_ts = forest.timestamp_of(parent).unwrap();
            assert!(parent_ts < child_ts);
        }
    }

    // Root well-formedness: the earliest user is always disconnected.
    let earliest = input
        .events
        .iter()
        .min_by_key(|e| (e.timestamp, e.user.clone()))
        .unwrap();
    assert_eq!(forest.parent_of(&earliest.user), Some(None));

    // Acyclicity, asserted directly by traversal (recompute_levels panics
    // on a parent chain longer than the forest), plus depth agreement and
    // contribution conservation against the analyzer.
    let levels = recompute_levels(forest);
    let summary = analyze(forest).unwrap();
    let max_level = levels.values().copied().max().unwrap_or(0);
    assert_eq!(summary.depth, max_level);
    assert_eq!(summary.level_counts.iter().sum::<usize>(), forest.len());

    let total: u32 = summary.contributions.iter().map(|c| c.count).sum();
    assert_eq!(total as usize, forest.len() - summary.disconnected_count);
}

proptest! {
    #[test]
    fn prop_interaction_forest_is_well_formed(input in cascade_input()) {
        let forest = resolve_by_interaction(&input.events, &input.interactions).unwrap();
        assert_forest_properties(&input, &forest);
    }

    #[test]
    fn prop_friendship_forest_is_well_formed(input in cascade_input()) {
        let forest = resolve_by_friendship(&input.events, &input.friendships).unwrap();
        assert_forest_properties(&input, &forest);
    }

    #[test]
    fn prop_resolution_is_deterministic(input in cascade_input()) {
        let a = resolve_by_interaction(&input.events, &input.interactions).unwrap();
        let b = resolve_by_interaction(&input.events, &input.interactions).unwrap();
        prop_assert_eq!(a.assignments(), b.assignments());

        let c = resolve_by_friendship(&input.events, &input.friendships).unwrap();
        let d = resolve_by_friendship(&input.events, &input.friendships).unwrap();
        prop_assert_eq!(c.assignments(), d.assignments());
    }
}
