//! Per-actor need levels and the per-level adjustment log.
//!
//! The need layer above this crate computes levels and decides how much of an
//! adjustment has already been applied at a given level; this store only
//! remembers the numbers between ticks and across saves.

use std::collections::HashMap;

/// Current value per need, plus the adjustment already consumed at each level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeedState {
    values: HashMap<String, f64>,
    adjustments: HashMap<String, HashMap<String, f64>>,
}

impl NeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `need`, or `0.0` if it was never set.
    pub fn get(&self, need: &str) -> f64 {
        self.values.get(need).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, need: impl Into<String>, value: f64) {
        self.values.insert(need.into(), value);
    }

    /// Returns true once a value has been stored for `need`.
    ///
    /// Distinguishes "never initialized" from "initialized at zero".
    pub fn is_initialized(&self, need: &str) -> bool {
        self.values.contains_key(need)
    }

    pub fn values(&self) -> &HashMap<String, f64> {
        &self.values
    }

    /// Overwrites the adjustment recorded for the exact `(need, level)` pair.
    pub fn store_adjustment(
        &mut self,
        need: impl Into<String>,
        level: impl Into<String>,
        adjustment: f64,
    ) {
        self.adjustments
            .entry(need.into())
            .or_default()
            .insert(level.into(), adjustment);
    }

    /// Returns the adjustment recorded for `(need, level)`, or `0.0`.
    pub fn level_adjustment(&self, need: &str, level: &str) -> f64 {
        self.adjustments
            .get(need)
            .and_then(|levels| levels.get(level))
            .copied()
            .unwrap_or(0.0)
    }

    /// Full adjustment log keyed by need, then level.
    pub fn adjustments(&self) -> &HashMap<String, HashMap<String, f64>> {
        &self.adjustments
    }

    /// Copies every value and adjustment from `other`, overwriting on conflict.
    pub fn merge_from(&mut self, other: NeedState) {
        for (need, value) in other.values {
            self.set(need, value);
        }
        for (need, levels) in other.adjustments {
            for (level, adjustment) in levels {
                self.store_adjustment(need.clone(), level, adjustment);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.adjustments.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.adjustments.clear();
    }
}
