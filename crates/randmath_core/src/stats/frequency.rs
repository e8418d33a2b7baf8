//! Occurrence counting.
//!
//! This module provides:
//! - `FrequencyMap`: Counts occurrences of hashable items
//! - `FrequencyTuple`: A `(key, count)` pair ranked by descending count

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key together with its occurrence count.
///
/// Tuples order by count, highest first; equal counts fall back to the key
/// so that sorting is deterministic.
///
/// # Examples
/// ```
/// use randmath_core::stats::FrequencyTuple;
///
/// let tuple = FrequencyTuple::new("seven", 29);
/// assert_eq!(tuple.to_string(), "seven : 29");
/// assert!(tuple < FrequencyTuple::new("two", 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyTuple<K> {
    key: K,
    count: u64,
}

impl<K> FrequencyTuple<K> {
    /// Creates a tuple.
    pub fn new(key: K, count: u64) -> Self {
        Self { key, count }
    }

    /// The counted item.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of occurrences.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Splits the tuple into its parts.
    pub fn into_parts(self) -> (K, u64) {
        (self.key, self.count)
    }
}

impl<K: Ord> Ord for FrequencyTuple<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl<K: Ord> PartialOrd for FrequencyTuple<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: fmt::Display> fmt::Display for FrequencyTuple<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.key, self.count)
    }
}

/// Occurrence counts for a stream of items.
///
/// The sum of all counts always equals [`items_processed`](Self::items_processed).
///
/// # Examples
/// ```
/// use randmath_core::stats::FrequencyMap;
///
/// let rolls: FrequencyMap<u32> = [7, 7, 3, 12, 7].into_iter().collect();
/// assert_eq!(rolls.get(&7), Some(3));
/// assert_eq!(rolls.get(&5), None);
/// assert_eq!(rolls.items_processed(), 5);
/// assert_eq!(rolls.floor_strings(2), vec!["7 : 3".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<K: Eq + Hash> {
    counts: HashMap<K, u64>,
    items_processed: u64,
}

impl<K: Eq + Hash> Default for FrequencyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FrequencyMap<K> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            items_processed: 0,
        }
    }

    /// Creates an empty map with room for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            items_processed: 0,
        }
    }

    /// Records one occurrence of `item`.
    pub fn add(&mut self, item: K) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.items_processed += 1;
    }

    /// Count for `item`, `None` if never seen.
    #[inline]
    pub fn get(&self, item: &K) -> Option<u64> {
        self.counts.get(item).copied()
    }

    /// Drops `item` and returns its count.
    ///
    /// The removed occurrences are subtracted from `items_processed`.
    pub fn remove(&mut self, item: &K) -> Option<u64> {
        let removed = self.counts.remove(item)?;
        self.items_processed -= removed;
        Some(removed)
    }

    /// Removes every key and resets the processed counter.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.items_processed = 0;
    }

    /// Total number of items counted.
    #[inline]
    pub fn items_processed(&self) -> u64 {
        self.items_processed
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` if no items have been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterator over the distinct keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Read-only view of the underlying counts.
    #[inline]
    pub fn as_map(&self) -> &HashMap<K, u64> {
        &self.counts
    }
}

impl<K: Eq + Hash + Ord + Clone> FrequencyMap<K> {
    /// Tuples whose count is at least `min_count`, highest count first.
    pub fn floor(&self, min_count: u64) -> Vec<FrequencyTuple<K>> {
        let mut tuples: Vec<FrequencyTuple<K>> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(key, &count)| FrequencyTuple::new(key.clone(), count))
            .collect();
        tuples.sort();
        tuples
    }
}

impl<K: Eq + Hash + Ord + Clone + fmt::Display> FrequencyMap<K> {
    /// [`floor`](Self::floor) rendered as `"key : count"` strings.
    pub fn floor_strings(&self, min_count: u64) -> Vec<String> {
        self.floor(min_count).iter().map(ToString::to_string).collect()
    }

    /// Keys of [`floor`](Self::floor) rendered as strings.
    pub fn floor_keys(&self, min_count: u64) -> Vec<String> {
        self.floor(min_count)
            .iter()
            .map(|tuple| tuple.key().to_string())
            .collect()
    }
}

impl<K: Eq + Hash> Extend<K> for FrequencyMap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
