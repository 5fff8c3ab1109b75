//! Tiered Cache Module
//!
//! LRU cache tagged with a hierarchy level and the cooperative two-level
//! lookup protocol between an L1 and an L2 instance.

use std::fmt;

use tracing::trace;

use crate::cache::OrderedSet;
use crate::error::{CacheError, Result};

// == Level ==
/// Position of a cache in the two-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    L1,
    L2,
}

impl Level {
    /// Returns the level a cache of this level cooperates with.
    pub fn peer(self) -> Level {
        match self {
            Level::L1 => Level::L2,
            Level::L2 => Level::L1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::L1 => write!(f, "L1"),
            Level::L2 => write!(f, "L2"),
        }
    }
}

// == Tiered Cache ==
/// A strict-LRU cache occupying one level of the hierarchy.
///
/// The peer of a two-level lookup is borrowed for the duration of the call
/// and never stored.
#[derive(Debug, Clone)]
pub struct TieredCache<T> {
    level: Level,
    set: OrderedSet<T>,
    /// Tail evictions caused by insertions into this cache
    evictions: u64,
}

impl<T: PartialEq + Clone> TieredCache<T> {
    // == Constructor ==
    /// Creates an empty cache of the given level and capacity.
    pub fn new(level: Level, size: usize) -> Self {
        Self {
            level,
            set: OrderedSet::new(size),
            evictions: 0,
        }
    }

    // == Single-Level Lookup ==
    /// Looks up `word`, promoting it on a hit and inserting it on a miss.
    ///
    /// Returns true on a hit.
    pub fn lookup(&mut self, word: &T) -> Result<bool> {
        if self.set.contains(word) {
            self.set.move_to_front(word)?;
            return Ok(true);
        }
        self.admit(word.clone());
        Ok(false)
    }

    // == Two-Level Lookup ==
    /// Looks up `word` cooperatively with a cache of the other level.
    ///
    /// - L1 hit: promote in L1, and in L2 when present there.
    /// - L1 miss: nothing changes; the caller queries L2 next.
    /// - L2 hit: promote in L2 and pull the word into L1.
    /// - L2 miss: insert into both levels.
    ///
    /// Returns true on a hit in this cache.
    pub fn lookup_with_peer(&mut self, word: &T, peer: &mut TieredCache<T>) -> Result<bool> {
        if peer.level != self.level.peer() {
            return Err(CacheError::InvalidPeerLevel {
                this: self.level,
                peer: peer.level,
            });
        }

        let hit = self.set.contains(word);
        match (self.level, hit) {
            (Level::L1, true) => {
                self.set.move_to_front(word)?;
                if peer.set.contains(word) {
                    peer.set.move_to_front(word)?;
                }
            }
            (Level::L1, false) => {}
            (Level::L2, true) => {
                self.set.move_to_front(word)?;
                peer.admit_or_promote(word)?;
            }
            (Level::L2, false) => {
                self.admit(word.clone());
                peer.admit_or_promote(word)?;
            }
        }

        trace!(level = %self.level, hit, "two-level lookup");
        Ok(hit)
    }

    /// Inserts an element known to be absent, counting any tail eviction.
    fn admit(&mut self, word: T) {
        if self.set.capacity() > 0 && self.set.is_full() {
            self.evictions += 1;
        }
        self.set.insert_front(word);
    }

    /// Inserts `word` at the front, or promotes it if already held.
    fn admit_or_promote(&mut self, word: &T) -> Result<()> {
        if self.set.contains(word) {
            self.set.move_to_front(word)
        } else {
            self.admit(word.clone());
            Ok(())
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn capacity(&self) -> usize {
        self.set.capacity()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, word: &T) -> bool {
        self.set.contains(word)
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Returns the cached words from most to least recently used.
    pub fn entries(&self) -> Vec<T> {
        self.set.iter().cloned().collect()
    }

    /// Empties the cache and resets its eviction counter.
    pub fn clear(&mut self) {
        self.set.clear();
        self.evictions = 0;
    }
}

impl<T: fmt::Display> fmt::Display for TieredCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.set)
    }
}
