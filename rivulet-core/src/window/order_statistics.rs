//! Ordered multiset tracking the values currently inside a sliding window.

use std::collections::BTreeMap;

/// Duplicate-tolerant ordered multiset with logarithmic insert, remove,
/// and extremum queries.
///
/// Values are reference-counted in a `BTreeMap`, so equal samples coexist
/// and the tree stays balanced no matter how the input trends: a
/// monotonically rising price series costs the same per step as a noisy
/// one. Sliding max/min stages insert the sample entering the window and
/// remove the one leaving it, then read `max`/`min` in O(log n).
#[derive(Debug, Clone, Default)]
pub struct OrderStatistics<T: Ord> {
    entries: BTreeMap<T, usize>,
    len: usize,
}

impl<T: Ord + Copy> OrderStatistics<T> {
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    /// Adds one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        *self.entries.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes at most one occurrence of `value`. Returns `false` without
    /// touching the multiset when no occurrence exists.
    pub fn remove(&mut self, value: T) -> bool {
        match self.entries.get_mut(&value) {
            Some(count) if *count > 1 => {
                *count -= 1;
                self.len -= 1;
                true
            }
            Some(_) => {
                self.entries.remove(&value);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Smallest value currently held, or `None` when empty.
    pub fn min(&self) -> Option<T> {
        self.entries.keys().next().copied()
    }

    /// Largest value currently held, or `None` when empty.
    pub fn max(&self) -> Option<T> {
        self.entries.keys().next_back().copied()
    }

    /// Number of occurrences held, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no values are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
