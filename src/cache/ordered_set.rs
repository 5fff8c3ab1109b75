//! Ordered Set Module
//!
//! Capacity-bounded, recency-ordered sequence of unique elements.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{CacheError, Result};

// == Ordered Set ==
/// Bounded sequence of unique elements ordered by recency.
///
/// Elements are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Every scan runs front to tail in O(n). Callers keep elements unique by
/// only inserting values they have confirmed absent.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    /// Elements by recency
    order: VecDeque<T>,
    /// Maximum number of elements held
    capacity: usize,
}

impl<T: PartialEq> OrderedSet<T> {
    // == Constructor ==
    /// Creates a new empty set holding at most `capacity` elements.
    ///
    /// A zero-capacity set never retains anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    // == Insert Front ==
    /// Inserts an element as the most recently used.
    ///
    /// If the set is already at capacity, the tail is evicted first.
    pub fn insert_front(&mut self, element: T) {
        debug_assert!(!self.contains(&element), "duplicate element inserted");
        if self.capacity == 0 {
            return;
        }
        if self.is_full() {
            self.order.pop_back();
        }
        self.order.push_front(element);
    }

    // == Remove ==
    /// Removes the first element equal to `element` and returns it.
    pub fn remove(&mut self, element: &T) -> Result<T> {
        let index = self.position(element).ok_or(CacheError::NotFound)?;
        self.order.remove(index).ok_or(CacheError::NotFound)
    }

    // == Remove Tail ==
    /// Removes and returns the least recently used element.
    pub fn remove_tail(&mut self) -> Result<T> {
        self.order.pop_back().ok_or(CacheError::Empty)
    }

    // == Contains ==
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    // == Move To Front ==
    /// Promotes an existing element to the most recently used position.
    ///
    /// Count is unchanged and the relative order of the other elements is
    /// preserved.
    pub fn move_to_front(&mut self, element: &T) -> Result<()> {
        let removed = self.remove(element)?;
        self.order.push_front(removed);
        Ok(())
    }

    // == Clear ==
    /// Removes every element; capacity is unchanged.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Returns the number of elements held.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when the next insertion will evict the tail.
    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    /// Returns the most recently used element.
    pub fn front(&self) -> Option<&T> {
        self.order.front()
    }

    /// Returns the least recently used element.
    pub fn tail(&self) -> Option<&T> {
        self.order.back()
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.order.iter().position(|e| e == element)
    }
}

// == Display ==
impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
