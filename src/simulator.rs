//! Trace Simulator
//!
//! Feeds the words of a trace into one or two cache levels and accumulates
//! hit statistics.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::cache::{Level, Stats, TieredCache};
use crate::config::{validate_sizes, Config};
use crate::error::Result;

// == Outcome ==
/// Where a word was found, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    L1Hit,
    L2Hit,
    Miss,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, Outcome::Miss)
    }
}

// == Simulator ==
/// Drives a cache hierarchy over a stream of words.
#[derive(Debug)]
pub struct Simulator {
    l1: TieredCache<String>,
    l2: Option<TieredCache<String>>,
    stats: Stats,
}

impl Simulator {
    // == Constructors ==
    /// Creates a simulator with a single level-1 cache.
    pub fn single(size: usize) -> Result<Self> {
        validate_sizes(size, None)?;
        info!("First level cache with {} entries has been created", size);
        Ok(Self {
            l1: TieredCache::new(Level::L1, size),
            l2: None,
            stats: Stats::new(false),
        })
    }

    /// Creates a simulator with a level-1 cache backed by a level-2 cache.
    pub fn two_level(size1: usize, size2: usize) -> Result<Self> {
        validate_sizes(size1, Some(size2))?;
        info!("First level cache with {} entries has been created", size1);
        info!("Second level cache with {} entries has been created", size2);
        Ok(Self {
            l1: TieredCache::new(Level::L1, size1),
            l2: Some(TieredCache::new(Level::L2, size2)),
            stats: Stats::new(true),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.l2_size {
            Some(size2) => Self::two_level(config.l1_size, size2),
            None => Self::single(config.l1_size),
        }
    }

    // == Access ==
    /// Presents one word to the hierarchy.
    ///
    /// In a two-level run L2 is only consulted after an L1 miss.
    pub fn access(&mut self, token: &str) -> Result<Outcome> {
        let word = token.to_string();

        let outcome = match self.l2.as_mut() {
            None => {
                let hit = self.l1.lookup(&word)?;
                self.stats.l1.record(hit);
                if hit {
                    Outcome::L1Hit
                } else {
                    Outcome::Miss
                }
            }
            Some(l2) => {
                let l1_hit = self.l1.lookup_with_peer(&word, l2)?;
                self.stats.l1.record(l1_hit);
                if l1_hit {
                    Outcome::L1Hit
                } else {
                    let l2_hit = l2.lookup_with_peer(&word, &mut self.l1)?;
                    if let Some(l2_stats) = self.stats.l2.as_mut() {
                        l2_stats.record(l2_hit);
                        l2_stats.evictions = l2.evictions();
                    }
                    if l2_hit {
                        Outcome::L2Hit
                    } else {
                        Outcome::Miss
                    }
                }
            }
        };
        self.stats.l1.evictions = self.l1.evictions();

        trace!(word = token, ?outcome, "access");
        Ok(outcome)
    }

    // == Run ==
    /// Feeds every whitespace-separated word of `reader` to the hierarchy.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<&Stats> {
        let mut words = 0u64;
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                self.access(token)?;
                words += 1;
            }
        }

        info!(
            "Processed {} words: {} global hits ({:.4} hit ratio)",
            words,
            self.stats.global_hits(),
            self.stats.global_hit_ratio()
        );
        Ok(&self.stats)
    }

    /// Opens a trace file and runs it through the hierarchy.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<&Stats> {
        let path = path.as_ref();
        debug!("Reading trace from {}", path.display());
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }

    /// Empties every cache level and zeroes the counters.
    pub fn reset(&mut self) {
        self.l1.clear();
        if let Some(l2) = self.l2.as_mut() {
            l2.clear();
        }
        self.stats.reset();
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn l1(&self) -> &TieredCache<String> {
        &self.l1
    }

    pub fn l2(&self) -> Option<&TieredCache<String>> {
        self.l2.as_ref()
    }
}
