//! Cascade forest assembly, validation, and analysis.

pub mod analyzer;
pub mod builder;
pub mod report;
pub mod types;

pub use analyzer::{analyze_forest, CascadeSummary, Contribution};
pub use builder::{build_forest, build_forest_with_config};
pub use report::{rows, CascadeRow};
pub use types::{CascadeAssignment, CascadeForest, CascadeGraph};
