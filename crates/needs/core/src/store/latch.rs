//! Keyed boolean latches remembering the last observed value.

use std::collections::HashMap;

/// Last observed boolean per key, used to detect false -> true edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatchState {
    values: HashMap<String, bool>,
}

impl LatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value stored for `key`, or `false`.
    pub fn last_value(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), value);
    }

    /// Records `value` and reports whether it is a rising edge.
    pub fn transitioned(&mut self, key: &str, value: bool) -> bool {
        let previous = self.last_value(key);
        self.set(key, value);
        !previous && value
    }

    pub fn values(&self) -> &HashMap<String, bool> {
        &self.values
    }

    pub fn merge_from(&mut self, other: LatchState) {
        for (key, value) in other.values {
            self.set(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
