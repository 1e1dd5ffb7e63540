//! Small helpers over `web-sys` shared by the controller bindings.
//!
//! All lookups return `Result<_, String>` for platform failures (no window, an
//! invalid selector) and `Option` for elements that a page may simply not have.

use common::PageConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

/// Id of the optional `<script type="application/json">` block that overrides
/// the controller tuning constants.
pub const CONFIG_ELEMENT_ID: &str = "landingConfig";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "window has no document".to_string())
}

/// Renders a thrown JS value as a log-friendly message.
pub fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, String> {
    document.query_selector(selector).map_err(js_err)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let nodes = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Reads a `data-*` attribute by its suffix (`data_attr(el, "target")`).
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", name))
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        gloo_console::warn!(format!("class {} not toggled: {}", class, js_err(err)));
    }
}

/// Loads the page configuration, falling back to the defaults when the
/// override block is absent or invalid.
pub fn load_page_config() -> PageConfig {
    let Ok(document) = document() else {
        return PageConfig::default();
    };
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("ignoring page configuration: {}", err));
            PageConfig::default()
        }
    }
}
