use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do when a container that is already showing placeholders is
/// asked to load again.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReentryPolicy {
    /// Append another batch and start another timer. The first timer to
    /// fire clears every placeholder in the container.
    #[default]
    Stack,
    /// Leave the running skeleton alone.
    Ignore,
}

/// Skeleton placeholder tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Skeleton", inline)]
#[serde(default)]
pub struct SkeletonOptions {
    /// Ghost cards appended per loading container.
    #[schemars(title = "Placeholders", range(min = 1, max = 24))]
    pub placeholder_count: usize,
    /// Time until the simulated load completes.
    #[schemars(title = "Simulated Load (ms)", range(min = 0, max = 10000))]
    pub simulated_load_ms: u32,
    /// Behavior when a loading notification targets a container that is
    /// still loading.
    #[schemars(title = "Re-entry")]
    pub reentry: ReentryPolicy,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        Self {
            placeholder_count: 6,
            simulated_load_ms: 1500,
            reentry: ReentryPolicy::Stack,
        }
    }
}

impl SkeletonOptions {
    /// Simulated load duration.
    #[must_use]
    pub fn simulated_load(&self) -> Duration {
        Duration::from_millis(u64::from(self.simulated_load_ms))
    }
}
