//! # cascade-core
//!
//! Shared foundation for the cascade estimation engine: value types for
//! retweet events, interaction strengths, and friendship edges; one error
//! enum per subsystem; TOML-backed configuration; tracing setup.
//!
//! Algorithmic code lives in `cascade-analysis`. This crate holds only the
//! vocabulary the rest of the workspace speaks.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;
