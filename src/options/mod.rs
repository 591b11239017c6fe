//! Centralized behavior options with TOML preset support.
//!
//! All tweakable settings (header threshold, entrance stagger, skeleton
//! timing, filter bar snapping, and the DOM contract of class names and
//! selectors) are consolidated here. Options serialize to/from TOML so a
//! host can ship a preset next to its stylesheet.

mod entrance;
mod filter_bar;
mod header;
mod selectors;
mod skeleton;

use std::path::Path;

pub use entrance::EntranceOptions;
pub use filter_bar::FilterBarOptions;
pub use header::HeaderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use selectors::SelectorOptions;
pub use skeleton::{ReentryPolicy, SkeletonOptions};

use crate::error::VeneerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[skeleton]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Header show/hide on scroll.
    pub header: HeaderOptions,
    /// Staggered list item reveal.
    pub entrance: EntranceOptions,
    /// Placeholder loading state.
    pub skeleton: SkeletonOptions,
    /// Filter bar snapping.
    pub filter_bar: FilterBarOptions,
    /// Class names, selectors and event names.
    pub selectors: SelectorOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VeneerError> {
        toml::from_str(content)
            .map_err(|e| VeneerError::OptionsParse(e.to_string()))
    }

    /// Render options as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, VeneerError> {
        toml::to_string_pretty(self)
            .map_err(|e| VeneerError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VeneerError> {
        let content = std::fs::read_to_string(path).map_err(VeneerError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VeneerError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VeneerError::Io)?;
        }
        std::fs::write(path, content).map_err(VeneerError::Io)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[skeleton]
placeholder_count = 3
reentry = "ignore"

[selectors]
placeholder_class = "shimmer"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.skeleton.placeholder_count, 3);
        assert_eq!(opts.skeleton.reentry, ReentryPolicy::Ignore);
        assert_eq!(opts.selectors.placeholder_selector(), ".shimmer");
        // Everything else should be default
        assert_eq!(opts.skeleton.simulated_load_ms, 1500);
        assert_eq!(opts.header.hide_threshold_px, 50.0);
        assert_eq!(opts.selectors.selected_class, "selected");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[skeleton\n").unwrap_err();
        assert!(matches!(err, VeneerError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = std::env::temp_dir()
            .join(format!("veneer-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.filter_bar.snap_debounce_ms = 250;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(
            loaded.filter_bar.snap_debounce(),
            Duration::from_millis(250)
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn stagger_delay_scales_with_index() {
        let entrance = EntranceOptions::default();
        assert_eq!(entrance.stagger_delay(0), Duration::ZERO);
        assert_eq!(entrance.stagger_delay(3), Duration::from_millis(150));
        assert_eq!(entrance.initial_transform(), "translateY(10px)");
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("header"));
        assert!(props.contains_key("entrance"));
        assert!(props.contains_key("skeleton"));
        assert!(props.contains_key("filter_bar"));
        assert!(props.contains_key("selectors"));

        // Root margin is CSS text, not a UI slider
        let entrance = &props["entrance"]["properties"];
        assert!(entrance.get("stagger_ms").is_some());
        assert!(entrance.get("root_margin").is_none());
    }
}
