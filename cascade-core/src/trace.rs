//! Tracing setup for binaries, benches, and ad-hoc debugging.

use tracing_subscriber::EnvFilter;

/// Install an env-filtered fmt subscriber (`RUST_LOG` controls the level).
///
/// Safe to call more than once; only the first call installs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
