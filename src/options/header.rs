use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Header show/hide tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Header", inline)]
#[serde(default)]
pub struct HeaderOptions {
    /// Offsets at or below this never hide the header, which keeps it
    /// from flickering near the top of the page.
    #[schemars(title = "Hide Threshold", range(min = 0.0, max = 400.0))]
    pub hide_threshold_px: f64,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            hide_threshold_px: 50.0,
        }
    }
}
