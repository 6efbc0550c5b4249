//! Shared cascade fixtures for benchmarks.
//! Deterministic: same seed → same output across runs.

use cascade_analysis::model::{FriendshipGraph, InteractionTable};
use cascade_core::config::FriendshipOrientation;
use cascade_core::types::{FriendshipEdge, InteractionRecord, RetweetEvent, Timestamp, UserId};

/// A generated cascade dataset: one event per user, an interaction table,
/// and a friendship graph over the same user population.
pub struct CascadeFixture {
    pub events: Vec<RetweetEvent>,
    pub interactions: InteractionTable,
    pub friendships: FriendshipGraph,
}

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// ~100 retweeters, unit test scale
    Micro,
    /// ~1K retweeters, small cascade
    Small,
    /// ~10K retweeters, viral cascade
    Medium,
    /// ~100K retweeters, outbreak scale
    Large,
}

impl FixtureSize {
    pub fn user_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        }
    }

    /// Upper bound on earlier users each retweeter interacted with.
    pub fn interactions_per_user(&self) -> usize {
        match self {
            Self::Micro => 3,
            Self::Small => 4,
            Self::Medium => 5,
            Self::Large => 5,
        }
    }

    /// Upper bound on earlier users each retweeter follows.
    pub fn friends_per_user(&self) -> usize {
        match self {
            Self::Micro => 4,
            Self::Small => 6,
            Self::Medium => 8,
            Self::Large => 8,
        }
    }
}

fn user(i: usize) -> UserId {
    UserId::from(format!("user_{i:06}"))
}

/// Generate a deterministic cascade dataset.
/// Uses a simple PRNG seeded from the given seed for reproducibility.
///
/// Timestamps are strictly increasing in user order, so `user_000000` is
/// always the cascade root candidate and every later user has a non-empty
/// candidate pool.
pub fn generate_cascade(size: FixtureSize, seed: u64) -> CascadeFixture {
    let n = size.user_count();
    let mut rng = SeededRng::new(seed);

    // One event per user, jittered within a private 100ms slot each.
    let events: Vec<RetweetEvent> = (0..n)
        .map(|i| {
            let ts = i as i64 * 100 + (rng.next_u64() % 100) as i64;
            RetweetEvent::new(user(i), Timestamp::from_millis(ts))
        })
        .collect();

    let mut records = Vec::new();
    let mut edges = Vec::new();
    for i in 1..n {
        let partner_count = 1 + (rng.next_u64() as usize) % size.interactions_per_user();
        for _ in 0..partner_count {
            let j = (rng.next_u64() as usize) % i;
            let strength = 1.0 + (rng.next_u64() % 10) as f64;
            records.push(InteractionRecord::new(user(i), user(j), strength));
        }

        let friend_count = (rng.next_u64() as usize) % (size.friends_per_user() + 1);
        for _ in 0..friend_count {
            let j = (rng.next_u64() as usize) % i;
            edges.push(FriendshipEdge::new(user(i), user(j)));
        }
    }

    // Generated records are non-negative and name only known users, so
    // neither constructor nor the resolvers can reject the fixture.
    let interactions = match InteractionTable::from_records(&records) {
        Ok(table) => table,
        Err(_) => InteractionTable::default(),
    };
    let friendships = FriendshipGraph::from_edges(&edges, FriendshipOrientation::Following);

    CascadeFixture {
        events,
        interactions,
        friendships,
    }
}

/// Simple xorshift PRNG. Not cryptographic, just fast and reproducible.
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
