//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check ordering, capacity, and two-level protocol
//! properties of the cache.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{Level, OrderedSet, TieredCache};
use crate::simulator::{Outcome, Simulator};

// == Strategies ==
/// Generates trace words from a small alphabet so repeats are common
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}".prop_map(|s| s)
}

/// Generates a list of distinct words
fn unique_words_strategy(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", size).prop_map(|set| set.into_iter().collect())
}

fn has_duplicates(words: &[String]) -> bool {
    words.iter().collect::<HashSet<_>>().len() != words.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Count tracks inserts minus removals while under capacity.
    #[test]
    fn prop_count_tracks_inserts_and_removals(
        words in unique_words_strategy(1..20),
        remove_mask in prop::collection::vec(any::<bool>(), 20)
    ) {
        let mut set = OrderedSet::new(words.len());
        for word in &words {
            set.insert_front(word.clone());
        }

        let mut removed = 0;
        for (word, remove) in words.iter().zip(remove_mask) {
            if remove {
                prop_assert_eq!(set.remove(word).unwrap(), word.clone());
                removed += 1;
            }
        }

        prop_assert_eq!(set.len(), words.len() - removed);
        let remaining: Vec<String> = set.iter().cloned().collect();
        prop_assert!(!has_duplicates(&remaining));
    }

    // Inserting into a full set evicts exactly the tail.
    #[test]
    fn prop_overflow_evicts_tail(
        words in unique_words_strategy(3..12),
        capacity in 1usize..6
    ) {
        prop_assume!(words.len() > capacity);
        let mut set = OrderedSet::new(capacity);
        for word in &words[..capacity] {
            set.insert_front(word.clone());
        }
        let before: Vec<String> = set.iter().cloned().collect();
        let tail = set.tail().cloned();

        set.insert_front(words[capacity].clone());

        prop_assert_eq!(set.len(), capacity);
        prop_assert!(!set.contains(tail.as_ref().unwrap()));
        let after: Vec<String> = set.iter().cloned().collect();
        prop_assert_eq!(&after[0], &words[capacity]);
        prop_assert_eq!(&after[1..], &before[..capacity - 1]);
    }

    // Promotion moves one element and keeps everything else in order.
    #[test]
    fn prop_move_to_front_preserves_order(
        words in unique_words_strategy(1..15),
        pick in any::<prop::sample::Index>()
    ) {
        let mut set = OrderedSet::new(words.len());
        for word in &words {
            set.insert_front(word.clone());
        }
        let before: Vec<String> = set.iter().cloned().collect();
        let target = before[pick.index(before.len())].clone();

        set.move_to_front(&target).unwrap();

        let after: Vec<String> = set.iter().cloned().collect();
        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(&after[0], &target);
        let others_before: Vec<&String> = before.iter().filter(|w| **w != target).collect();
        let others_after: Vec<&String> = after[1..].iter().collect();
        prop_assert_eq!(others_before, others_after);
    }

    // A missed word is found by the very next lookup.
    #[test]
    fn prop_miss_then_hit(
        trace in prop::collection::vec(word_strategy(), 0..40),
        probe in "[g-z]{3}",
        capacity in 1usize..8
    ) {
        let mut cache = TieredCache::new(Level::L1, capacity);
        for word in &trace {
            cache.lookup(word).unwrap();
        }

        prop_assert!(!cache.lookup(&probe).unwrap());
        prop_assert!(cache.lookup(&probe).unwrap());
    }

    // Single-level caches stay bounded and duplicate-free.
    #[test]
    fn prop_single_level_bounded(
        trace in prop::collection::vec(word_strategy(), 1..100),
        capacity in 1usize..10
    ) {
        let mut cache = TieredCache::new(Level::L1, capacity);
        for word in &trace {
            cache.lookup(word).unwrap();
            prop_assert!(cache.len() <= capacity);
            prop_assert_eq!(&cache.entries()[0], word);
        }
        prop_assert!(!has_duplicates(&cache.entries()));
    }

    // Two-level runs keep both levels bounded, duplicate-free, and the
    // accessed word at the front of L1.
    #[test]
    fn prop_two_level_invariants(
        trace in prop::collection::vec(word_strategy(), 1..100),
        size1 in 1usize..6,
        extra in 0usize..6
    ) {
        let size2 = size1 + extra;
        let mut sim = Simulator::two_level(size1, size2).unwrap();
        let mut hits = 0u64;

        for word in &trace {
            let outcome = sim.access(word).unwrap();
            if outcome.is_hit() {
                hits += 1;
            }
            if outcome == Outcome::Miss {
                prop_assert!(sim.l2().unwrap().contains(word));
            }

            let l1 = sim.l1().entries();
            let l2 = sim.l2().unwrap().entries();
            prop_assert!(l1.len() <= size1);
            prop_assert!(l2.len() <= size2);
            prop_assert!(!has_duplicates(&l1));
            prop_assert!(!has_duplicates(&l2));
            prop_assert_eq!(&l1[0], word);
        }

        let stats = sim.stats();
        let l2_stats = stats.l2.unwrap();
        prop_assert_eq!(stats.global_references(), trace.len() as u64);
        prop_assert_eq!(stats.global_hits(), hits);
        prop_assert_eq!(l2_stats.references, stats.l1.references - stats.l1.hits);
    }
}
