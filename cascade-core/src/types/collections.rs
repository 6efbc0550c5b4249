//! Hash collection aliases. FxHash throughout: keys are short ids and the
//! lookups sit on the resolver hot path.

pub use rustc_hash::{FxHashMap, FxHashSet};
