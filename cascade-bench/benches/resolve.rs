//! Criterion benchmarks for both resolution strategies and the analyzer.

use cascade_analysis::{analyze, resolve_by_friendship, resolve_by_interaction};
use cascade_bench::fixtures::{generate_cascade, FixtureSize};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SEED: u64 = 42;

fn bench_resolve_by_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_by_interaction");
    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let fixture = generate_cascade(size, SEED);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.user_count()),
            &fixture,
            |b, f| b.iter(|| resolve_by_interaction(&f.events, &f.interactions).unwrap()),
        );
    }
    group.finish();
}

fn bench_resolve_by_friendship(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_by_friendship");
    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let fixture = generate_cascade(size, SEED);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.user_count()),
            &fixture,
            |b, f| b.iter(|| resolve_by_friendship(&f.events, &f.friendships).unwrap()),
        );
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let fixture = generate_cascade(size, SEED);
        let forest = resolve_by_interaction(&fixture.events, &fixture.interactions).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(size.user_count()),
            &forest,
            |b, f| b.iter(|| analyze(f).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_by_interaction,
    bench_resolve_by_friendship,
    bench_analyze
);
criterion_main!(benches);
