use crate::dom;

pub const YEAR_SELECTOR: &str = "[data-current-year]";

/// Writes the current calendar year into the footer marker, if present.
pub fn init() -> Result<(), String> {
    let document = dom::document()?;
    if let Some(element) = dom::query(&document, YEAR_SELECTOR)? {
        let year = js_sys::Date::new_0().get_full_year();
        element.set_text_content(Some(&year.to_string()));
    }
    Ok(())
}
