//! Component state for the parcel map.
//!
//! The marker list lives in the shared `PinMap`; this struct adds the page
//! elements the component reaches outside its own root (filter chips, the
//! detail fields and the modal widget) and the chip click listeners.

use common::controllers::PinMap;
use common::controllers::pin_map::ACTIVE_CHIP_CLASS;
use gloo_events::EventListener;
use web_sys::Element;

use super::detail::{BootstrapModal, DomDetailView};
use crate::dom;

pub struct PinMapComponent {
    /// Catalog, filter and rendered markers.
    pub map: PinMap,

    /// Chip elements, index-aligned with the chips known to `map`.
    pub chips: Vec<Element>,

    /// Click listeners of `chips`; dropped together with the component.
    pub chip_listeners: Vec<EventListener>,

    pub detail: DomDetailView,

    /// `None` when the page has no dialog element or no bootstrap.
    pub modal: Option<BootstrapModal>,
}

impl PinMapComponent {
    /// Marks exactly the chip matching the current filter as active.
    pub fn sync_chips(&self) {
        for (chip, active) in self.chips.iter().zip(self.map.chip_states()) {
            dom::toggle_class(chip, ACTIVE_CHIP_CLASS, active);
        }
    }
}
