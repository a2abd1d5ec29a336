//! Page-supplied configuration.
//!
//! The host page may carry a `<script id="gpro-config" type="application/json">`
//! element; anything it leaves out falls back to the defaults.

use gpro_app::config::DashboardConfig;

/// Id of the element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "gpro-config";

/// Read the configuration embedded in the page, or the defaults.
///
/// Runs before logging is set up, so problems go straight to the console.
#[must_use]
pub fn load() -> DashboardConfig {
    let Some(raw) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };

    if raw.trim().is_empty() {
        return DashboardConfig::default();
    }

    match DashboardConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("ignoring page configuration: {err}");
            DashboardConfig::default()
        }
    }
}
