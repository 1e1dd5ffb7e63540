use common::controllers::PinMarker;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PinMapComponent;

/// Renders one button per visible parcel, in catalog order.
pub fn view(component: &PinMapComponent, ctx: &Context<PinMapComponent>) -> Html {
    let link = ctx.link();
    html! {
        <>
            { for component.map.markers().iter().map(|marker| pin_button(marker, link)) }
        </>
    }
}

fn pin_button(marker: &PinMarker, link: &Scope<PinMapComponent>) -> Html {
    let parcel_id = marker.parcel_id;
    let style = format!("left: {}; top: {};", marker.left, marker.top);
    html! {
        <button
            key={parcel_id}
            type="button"
            class={marker.class_name.clone()}
            style={style}
            aria-label={marker.aria_label.clone()}
            data-parcel-id={parcel_id}
            onclick={link.callback(move |_: MouseEvent| Msg::OpenParcel(parcel_id))}
        >
            <i class={marker.icon_class.clone()} aria-hidden="true"></i>
        </button>
    }
}
