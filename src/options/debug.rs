use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Diagnostics toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Frames between frame-rate log lines (0 disables them).
    #[schemars(title = "Stats Interval", range(min = 0, max = 10000))]
    pub stats_interval: u32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            stats_interval: 120,
        }
    }
}
