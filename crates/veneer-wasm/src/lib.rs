//! WASM entry point for veneer.
//!
//! The host page calls `attach(root, optionsToml?)` once its markup is in
//! place and keeps the returned handle; `handle.free()` detaches every
//! listener. Nothing runs on module load.

use veneer::options::Options;
use veneer::web::{self, Installation};
use veneer::VeneerError;
use wasm_bindgen::prelude::*;

fn to_js(e: &VeneerError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Live attachment returned to JS.
#[wasm_bindgen]
pub struct VeneerHandle {
    installation: Installation,
}

#[wasm_bindgen]
impl VeneerHandle {
    /// Number of DOM listeners held by this attachment.
    #[wasm_bindgen(js_name = listenerCount)]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.installation.listener_count()
    }

    /// Number of filter bars found at attach time.
    #[wasm_bindgen(js_name = filterBarCount)]
    #[must_use]
    pub fn filter_bar_count(&self) -> usize {
        self.installation.veneer().filter_bars().len()
    }
}

/// Attach every behavior under `root`. `options_toml` overrides defaults
/// (partial documents are fine).
#[wasm_bindgen]
pub fn attach(
    root: &web_sys::Element,
    options_toml: Option<String>,
) -> Result<VeneerHandle, JsValue> {
    web::init_logging(log::Level::Info);
    let options = match options_toml {
        Some(text) => Options::from_toml_str(&text).map_err(|e| to_js(&e))?,
        None => Options::default(),
    };
    let installation = web::install(root, &options).map_err(|e| to_js(&e))?;
    Ok(VeneerHandle { installation })
}

/// JSON Schema for the options document.
#[wasm_bindgen(js_name = optionsSchema)]
pub fn options_schema() -> Result<String, JsValue> {
    serde_json::to_string(&Options::json_schema())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default options as TOML, a starting point for presets.
#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> Result<String, JsValue> {
    Options::default().to_toml_string().map_err(|e| to_js(&e))
}
