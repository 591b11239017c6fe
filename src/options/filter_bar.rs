use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Filter bar snap tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Filter Bar", inline)]
#[serde(default)]
pub struct FilterBarOptions {
    /// Quiet period after the last scroll before snapping.
    #[schemars(title = "Snap Debounce (ms)", range(min = 0, max = 1000))]
    pub snap_debounce_ms: u32,
    /// Snap interval used when no button can be measured.
    #[schemars(title = "Fallback Width", range(min = 1.0, max = 400.0))]
    pub fallback_item_width_px: f64,
}

impl Default for FilterBarOptions {
    fn default() -> Self {
        Self {
            snap_debounce_ms: 100,
            fallback_item_width_px: 100.0,
        }
    }
}

impl FilterBarOptions {
    /// Snap debounce as a duration.
    #[must_use]
    pub fn snap_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.snap_debounce_ms))
    }
}
