//! # cascade-bench
//!
//! Benchmarks for the cascade estimation engine, plus the deterministic
//! fixture generator they run against.
//!
//! The fixtures are also usable from integration tests in other crates
//! whenever a realistic, reproducible cascade dataset is needed.

pub mod fixtures;

pub use fixtures::{generate_cascade, CascadeFixture, FixtureSize, SeededRng};
