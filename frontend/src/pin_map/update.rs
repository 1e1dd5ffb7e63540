use yew::prelude::*;

use super::messages::Msg;
use super::state::PinMapComponent;

/// Returns `true` when the marker list changed and the view must re-render.
pub fn update(component: &mut PinMapComponent, _ctx: &Context<PinMapComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ActivateChip(index) => match component.map.activate_chip(index) {
            Some(selector) => {
                component.sync_chips();
                gloo_console::debug!("parcel filter:", selector.as_str());
                true
            }
            None => false,
        },
        Msg::OpenParcel(parcel_id) => {
            let opened =
                component
                    .map
                    .open_parcel(parcel_id, &mut component.detail, component.modal.as_ref());
            if let Err(err) = opened {
                gloo_console::warn!(err.to_string());
            }
            false
        }
    }
}
