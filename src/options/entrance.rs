use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Staggered entrance animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Entrance", inline)]
#[serde(default)]
pub struct EntranceOptions {
    /// Delay between consecutive reveals within one intersection batch.
    #[schemars(title = "Stagger (ms)", range(min = 0, max = 500))]
    pub stagger_ms: u32,
    /// Fraction of an item that must be visible before it counts as
    /// entered.
    #[schemars(
        title = "Threshold",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.05)
    )]
    pub threshold: f64,
    /// Observer root margin, CSS shorthand. The default looks 50px past the
    /// bottom edge so items start revealing just before they scroll in.
    #[schemars(skip)]
    pub root_margin: String,
    /// Downward offset applied before the reveal.
    #[schemars(title = "Initial Offset", range(min = 0.0, max = 100.0))]
    pub initial_offset_px: f64,
}

impl Default for EntranceOptions {
    fn default() -> Self {
        Self {
            stagger_ms: 50,
            threshold: 0.1,
            root_margin: "0px 0px 50px 0px".into(),
            initial_offset_px: 10.0,
        }
    }
}

impl EntranceOptions {
    /// Reveal delay for the `index`-th entry of a batch.
    #[must_use]
    pub fn stagger_delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Duration::from_millis(u64::from(self.stagger_ms) * u64::from(index))
    }

    /// CSS `transform` value for the pre-animation state.
    #[must_use]
    pub fn initial_transform(&self) -> String {
        format!("translateY({}px)", self.initial_offset_px)
    }
}
