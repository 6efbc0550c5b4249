//! Tests for the fixture generator: sizes, determinism, and that generated
//! datasets resolve cleanly under both strategies.

use cascade_analysis::{analyze, resolve_by_friendship, resolve_by_interaction};
use cascade_bench::fixtures::{generate_cascade, FixtureSize};

#[test]
fn fixture_micro_has_100_users() {
    let fixture = generate_cascade(FixtureSize::Micro, 42);
    assert_eq!(fixture.events.len(), 100);
    assert!(!fixture.interactions.is_empty());
    assert!(!fixture.friendships.is_empty());
}

#[test]
fn fixture_small_has_1000_users() {
    let fixture = generate_cascade(FixtureSize::Small, 1);
    assert_eq!(fixture.events.len(), 1_000);
}

#[test]
fn fixture_deterministic_same_seed() {
    let f1 = generate_cascade(FixtureSize::Micro, 42);
    let f2 = generate_cascade(FixtureSize::Micro, 42);

    assert_eq!(f1.events, f2.events);
    assert_eq!(f1.friendships.edge_count(), f2.friendships.edge_count());

    let a = resolve_by_interaction(&f1.events, &f1.interactions).unwrap();
    let b = resolve_by_interaction(&f2.events, &f2.interactions).unwrap();
    assert_eq!(a.assignments(), b.assignments());
}

#[test]
fn fixture_different_seeds_differ() {
    let f1 = generate_cascade(FixtureSize::Micro, 42);
    let f2 = generate_cascade(FixtureSize::Micro, 99);
    assert_ne!(f1.events, f2.events);
}

#[test]
fn fixture_resolves_under_both_strategies() {
    let fixture = generate_cascade(FixtureSize::Micro, 7);

    let interaction = resolve_by_interaction(&fixture.events, &fixture.interactions).unwrap();
    assert_eq!(interaction.len(), fixture.events.len());
    let summary = analyze(&interaction).unwrap();
    assert_eq!(summary.level_counts.iter().sum::<usize>(), interaction.len());

    let friendship = resolve_by_friendship(&fixture.events, &fixture.friendships).unwrap();
    assert_eq!(friendship.len(), fixture.events.len());
}
