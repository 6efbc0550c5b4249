//! Configuration for cascade estimation.
//! TOML-based, compiled defaults for every field.

pub mod estimation_config;

pub use estimation_config::{EstimationConfig, FriendshipOrientation, InteractionWeights};
