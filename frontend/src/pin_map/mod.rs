//! Parcel map: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and the detail dialog.
//!
//! Responsibilities
//! - Mount the component into the page's pins container (`#lpMapPins`).
//! - On creation, collect the filter chips, bind their click listeners to
//!   `Msg::ActivateChip`, and look up the detail fields and modal widget.
//! - Delegate updates to `update::update` and rendering to `view::view`.

use common::controllers::PinMap;
use common::model::filter::FilterSelector;
use common::PARCEL_CATALOG;
use gloo_events::EventListener;
use web_sys::Element;
use yew::prelude::*;

pub mod detail;
mod messages;
mod props;
mod state;
mod update;
mod view;

use detail::{BootstrapModal, DomDetailView};
pub use messages::Msg;
pub use props::PinMapProps;
pub use state::PinMapComponent;

use crate::dom;

pub const PINS_ROOT_ID: &str = "lpMapPins";

impl Component for PinMapComponent {
    type Message = Msg;
    type Properties = PinMapProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let document = dom::document().ok();

        let (chips, selectors) = document
            .as_ref()
            .map(|document| collect_chips(document, &props.chip_selector))
            .unwrap_or_default();

        let chip_listeners = chips
            .iter()
            .enumerate()
            .map(|(index, chip)| {
                let activate = ctx.link().callback(move |_: ()| Msg::ActivateChip(index));
                EventListener::new(chip, "click", move |_| activate.emit(()))
            })
            .collect();

        let detail = document
            .as_ref()
            .map(DomDetailView::from_document)
            .unwrap_or_default();
        let modal = document
            .as_ref()
            .and_then(|document| document.get_element_by_id(&props.modal_id))
            .and_then(|element| BootstrapModal::attach(&element));
        if modal.is_none() {
            gloo_console::debug!("parcel modal unavailable, details populate only");
        }

        let component = Self {
            map: PinMap::new(PARCEL_CATALOG, selectors),
            chips,
            chip_listeners,
            detail,
            modal,
        };
        component.sync_chips();
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Chips whose selector parses, paired with their selectors in page order.
/// A chip naming an unknown category is left inert.
fn collect_chips(document: &web_sys::Document, selector: &str) -> (Vec<Element>, Vec<FilterSelector>) {
    let elements = match dom::query_all(document, selector) {
        Ok(elements) => elements,
        Err(err) => {
            gloo_console::warn!(format!("filter chips not bound: {}", err));
            return (Vec::new(), Vec::new());
        }
    };
    elements
        .into_iter()
        .filter_map(|chip| {
            let raw = chip.get_attribute("data-lp-filter");
            match FilterSelector::from_attribute(raw.as_deref()) {
                Ok(selector) => Some((chip, selector)),
                Err(err) => {
                    gloo_console::warn!(format!("ignoring filter chip: {}", err));
                    None
                }
            }
        })
        .unzip()
}

/// Replaces the contents of the pins container with the map component.
pub fn mount() -> Result<(), String> {
    let document = dom::document()?;
    let Some(root) = document.get_element_by_id(PINS_ROOT_ID) else {
        gloo_console::debug!("no parcel map on this page");
        return Ok(());
    };
    root.set_inner_html("");
    // The app lives as long as the page; the handle is not needed afterwards.
    let _app = yew::Renderer::<PinMapComponent>::with_root(root).render();
    Ok(())
}
