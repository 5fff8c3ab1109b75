//! Cache Module
//!
//! Provides the recency-ordered set and the two-level LRU cache built on it.

mod ordered_set;
mod stats;
mod tiered;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use ordered_set::OrderedSet;
pub use stats::{LevelStats, Stats};
pub use tiered::{Level, TieredCache};
