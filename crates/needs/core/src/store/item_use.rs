//! Item-use counters grouped into storage buckets.
//!
//! Each bucket belongs to one consumer of the counts (typically one need
//! manipulator) and maps an item identifier to how many times it was used.

use std::collections::HashMap;

/// Counts keyed by item, one map per bucket.
pub type ItemCounts = HashMap<String, u32>;

/// Two-level counter store: bucket -> item -> count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemUseState {
    buckets: HashMap<String, ItemCounts>,
}

impl ItemUseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `key`, creating it empty if absent.
    ///
    /// Callers mutate the returned map in place.
    pub fn bucket_mut(&mut self, key: impl Into<String>) -> &mut ItemCounts {
        self.buckets.entry(key.into()).or_default()
    }

    /// Returns the bucket for `key` without creating it.
    pub fn bucket(&self, key: &str) -> Option<&ItemCounts> {
        self.buckets.get(key)
    }

    /// Returns the count for `item` in `bucket`, or `0`.
    pub fn count(&self, bucket: &str, item: &str) -> u32 {
        self.buckets
            .get(bucket)
            .and_then(|counts| counts.get(item))
            .copied()
            .unwrap_or(0)
    }

    /// Bumps the count for `item` in `bucket` and returns the new value.
    pub fn increment(&mut self, bucket: impl Into<String>, item: impl Into<String>) -> u32 {
        let count = self.bucket_mut(bucket).entry(item.into()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn buckets(&self) -> &HashMap<String, ItemCounts> {
        &self.buckets
    }

    /// Writes every count from `other` into the matching bucket, overwriting.
    pub fn merge_from(&mut self, other: ItemUseState) {
        for (bucket, counts) in other.buckets {
            let target = self.bucket_mut(bucket);
            for (item, count) in counts {
                target.insert(item, count);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(HashMap::is_empty)
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
