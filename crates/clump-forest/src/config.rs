use serde::{Deserialize, Serialize};

/// Configuration for the merge engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Merge slack: two top-level nodes merge when they overlap after each
    /// span's end is extended by this amount. Zero demands true overlap;
    /// a positive value also clusters nodes separated by a gap strictly
    /// smaller than the slack. Negative values behave like zero.
    pub slack: i64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { slack: 0 }
    }
}

impl MergeConfig {
    /// Configuration that merges on true overlap only.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Configuration that also bridges gaps strictly smaller than `slack`.
    pub fn with_slack(slack: i64) -> Self {
        Self { slack }
    }

    /// The effective slack applied by the engine (clamped at zero).
    pub fn effective_slack(&self) -> i64 {
        self.slack.max(0)
    }
}
