//! Cache Statistics Module
//!
//! Tracks references, hits, and evictions per cache level.

use serde::Serialize;

// == Level Stats ==
/// Counters for a single cache level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LevelStats {
    /// Number of lookups presented to this level
    pub references: u64,
    /// Number of lookups that found the word
    pub hits: u64,
    /// Number of tail evictions in this level
    pub evictions: u64,
}

impl LevelStats {
    // == Constructor ==
    /// Creates a new LevelStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Lookup ==
    /// Counts one reference and, if `hit`, one hit.
    pub fn record(&mut self, hit: bool) {
        self.references += 1;
        if hit {
            self.hits += 1;
        }
    }

    pub fn misses(&self) -> u64 {
        self.references - self.hits
    }

    // == Hit Ratio ==
    /// Calculates hits / references, or 0.0 if nothing was referenced.
    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hits, self.references)
    }
}

// == Stats ==
/// Counters for a whole simulation run.
///
/// `l2` is present only for two-level runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub l1: LevelStats,
    pub l2: Option<LevelStats>,
}

impl Stats {
    /// Creates empty stats, with an L2 section when `two_level` is set.
    pub fn new(two_level: bool) -> Self {
        Self {
            l1: LevelStats::new(),
            l2: two_level.then(LevelStats::new),
        }
    }

    /// Every word is presented to L1 first, so L1 references are global.
    pub fn global_references(&self) -> u64 {
        self.l1.references
    }

    pub fn global_hits(&self) -> u64 {
        self.l1.hits + self.l2.map_or(0, |l2| l2.hits)
    }

    pub fn global_hit_ratio(&self) -> f64 {
        ratio(self.global_hits(), self.global_references())
    }

    /// Zeroes every counter, keeping the L2 section if present.
    pub fn reset(&mut self) {
        *self = Self::new(self.l2.is_some());
    }
}

fn ratio(hits: u64, references: u64) -> f64 {
    if references == 0 {
        0.0
    } else {
        hits as f64 / references as f64
    }
}
