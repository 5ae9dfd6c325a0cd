//! Page Configuration
//!
//! Reads the optional `<script id="todo-config" type="application/json">`
//! element from the host page.

use todo_core::WidgetConfig;

const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Load the widget config, falling back to defaults
///
/// Parse problems can't be logged yet (the logger is configured from this),
/// so they are returned alongside the defaults.
pub fn load_config() -> (WidgetConfig, Option<String>) {
    let Some(raw) = config_text() else {
        return (WidgetConfig::default(), None);
    };
    match WidgetConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (
            WidgetConfig::default(),
            Some(format!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e)),
        ),
    }
}

fn config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// URL of the hosting page, used to resolve a relative `seed_url`
pub fn page_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
