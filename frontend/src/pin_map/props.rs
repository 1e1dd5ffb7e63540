//! Properties of the `PinMapComponent`.
//!
//! The markers themselves come from the compiled catalog; the properties only
//! name the page elements the component talks to outside its own root.

use yew::prelude::*;

pub const DEFAULT_MODAL_ID: &str = "lpParcelModal";
pub const DEFAULT_CHIP_SELECTOR: &str = "[data-lp-filter]";

#[derive(Properties, PartialEq, Clone)]
pub struct PinMapProps {
    /// Id of the dialog element handed to the page's `bootstrap.Modal`.
    #[prop_or(AttrValue::Static(DEFAULT_MODAL_ID))]
    pub modal_id: AttrValue,

    /// Selector of the filter chips; each chip names its filter in
    /// `data-lp-filter` (missing means "all").
    #[prop_or(AttrValue::Static(DEFAULT_CHIP_SELECTOR))]
    pub chip_selector: AttrValue,
}

impl Default for PinMapProps {
    fn default() -> Self {
        Self {
            modal_id: AttrValue::Static(DEFAULT_MODAL_ID),
            chip_selector: AttrValue::Static(DEFAULT_CHIP_SELECTOR),
        }
    }
}
