/// Capability configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedsConfig {
    /// Write level adjustments whose value is exactly zero.
    ///
    /// Off by default: a zero adjustment reads back as the default anyway.
    pub persist_zero_adjustments: bool,
}

impl NeedsConfig {
    // ===== identifiers =====
    /// Namespace prefix shared by every capability identifier.
    pub const NAMESPACE: &'static str = "needs";

    // ===== need codec keys =====
    pub const CURRENT_KEY: &'static str = "current";
    pub const LEVELS_KEY: &'static str = "levels";
    pub const LAST_ADJUSTMENT_KEY: &'static str = "lastAdjustment";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PERSIST_ZERO_ADJUSTMENTS: bool = false;

    pub const fn new() -> Self {
        Self {
            persist_zero_adjustments: Self::DEFAULT_PERSIST_ZERO_ADJUSTMENTS,
        }
    }

    pub const fn with_persist_zero_adjustments(persist_zero_adjustments: bool) -> Self {
        Self {
            persist_zero_adjustments,
        }
    }
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self::new()
    }
}
