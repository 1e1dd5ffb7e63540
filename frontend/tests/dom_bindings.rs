#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use common::catalog::count_in_category;
use common::controllers::navbar::{SCROLLED_CLASS, TRANSPARENT_CLASS};
use common::controllers::pin_map::ACTIVE_CHIP_CLASS;
use common::controllers::{DetailView, ModalContent, ScrollAppearanceController};
use common::model::form::{SUCCESS_TEXT, WARNING_TEXT};
use common::model::parcel::Category;
use common::PARCEL_CATALOG;
use gloo_timers::future::TimeoutFuture;
use landing_frontend::counters::{self, CounterElement};
use landing_frontend::navbar::NavbarElements;
use landing_frontend::pin_map::detail::DomDetailView;
use landing_frontend::{contact_form, pin_map};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
    let document = document();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn submit(form: &HtmlFormElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    form.query_selector(&format!("[name={}]", name))
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_else(|element| {
            element
                .dyn_into::<web_sys::HtmlTextAreaElement>()
                .unwrap()
                .value()
        })
}

const FORM_HTML: &str = r#"
    <form id="testForm">
        <input name="name" value="Asha">
        <input name="phone" value="">
        <input name="email" value="asha@example.com">
        <textarea name="message">Plot enquiry</textarea>
    </form>
"#;

#[wasm_bindgen_test]
fn incomplete_form_warns_and_keeps_values() {
    let host = mount(FORM_HTML);
    let form: HtmlFormElement = host.query_selector("form").unwrap().unwrap().unchecked_into();
    let _listener = contact_form::bind(form.clone());

    submit(&form);
    submit(&form);

    let alerts = form.query_selector_all(".rti-form-alert").unwrap();
    assert_eq!(alerts.length(), 1);
    let alert: Element = alerts.item(0).unwrap().unchecked_into();
    assert_eq!(alert.text_content().as_deref(), Some(WARNING_TEXT));
    assert!(alert.class_list().contains("alert-warning"));
    assert_eq!(alert.get_attribute("role").as_deref(), Some("status"));
    assert_eq!(field_value(&form, "name"), "Asha");
    assert_eq!(field_value(&form, "message"), "Plot enquiry");
    host.remove();
}

#[wasm_bindgen_test]
fn complete_form_succeeds_and_resets() {
    let host = mount(FORM_HTML);
    let form: HtmlFormElement = host.query_selector("form").unwrap().unwrap().unchecked_into();
    let _listener = contact_form::bind(form.clone());

    let phone: web_sys::HtmlInputElement = form
        .query_selector("[name=phone]")
        .unwrap()
        .unwrap()
        .unchecked_into();
    phone.set_value("+91 98140 00000");
    submit(&form);

    let alerts = form.query_selector_all(".rti-form-alert").unwrap();
    assert_eq!(alerts.length(), 1);
    let alert: Element = alerts.item(0).unwrap().unchecked_into();
    assert_eq!(alert.text_content().as_deref(), Some(SUCCESS_TEXT));
    assert!(alert.class_list().contains("alert-success"));
    for name in ["name", "phone", "email", "message"] {
        assert_eq!(field_value(&form, name), "", "{} was not cleared", name);
    }
    host.remove();
}

#[wasm_bindgen_test]
fn navbar_classes_and_logo_follow_offset() {
    let host = mount(
        r#"<nav class="site-navbar"></nav>
           <img id="testLogo" data-logo-white="white.svg" data-logo-dark="dark.svg">"#,
    );
    let navbar = host.query_selector("nav").unwrap().unwrap();
    let logo: HtmlImageElement = host.query_selector("img").unwrap().unwrap().unchecked_into();
    let mut elements = NavbarElements::new(navbar.clone(), Some(logo.clone()));
    let controller = ScrollAppearanceController::new(10.0, elements.logo_variants());

    controller.sync(0.0, &mut elements);
    assert!(navbar.class_list().contains(TRANSPARENT_CLASS));
    assert!(!navbar.class_list().contains(SCROLLED_CLASS));
    assert!(logo.src().ends_with("white.svg"));

    controller.sync(240.0, &mut elements);
    assert!(navbar.class_list().contains(SCROLLED_CLASS));
    assert!(!navbar.class_list().contains(TRANSPARENT_CLASS));
    assert!(logo.src().ends_with("dark.svg"));
    host.remove();
}

#[wasm_bindgen_test]
fn detail_view_skips_missing_fields() {
    let host = mount(r#"<h5 id="lpModalTitle"></h5><span id="lpModalPrice"></span>"#);
    let mut view = DomDetailView::from_document(&document());
    let entry = common::parcel_by_id("LP-102").unwrap();
    view.populate(&ModalContent::from(entry));

    let title = document().get_element_by_id("lpModalTitle").unwrap();
    let price = document().get_element_by_id("lpModalPrice").unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Group Housing - Sector 88"));
    assert_eq!(price.text_content().as_deref(), Some("₹ 48.0 Cr"));
    host.remove();
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not found", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn pin_ids(root: &Element) -> Vec<String> {
    let pins = root.query_selector_all("#lpMapPins button").unwrap();
    (0..pins.length())
        .map(|idx| {
            pins.item(idx)
                .unwrap()
                .unchecked_into::<Element>()
                .get_attribute("data-parcel-id")
                .unwrap()
        })
        .collect()
}

fn active_chips(root: &Element) -> Vec<String> {
    let chips = root.query_selector_all("[data-lp-filter]").unwrap();
    (0..chips.length())
        .map(|idx| chips.item(idx).unwrap().unchecked_into::<Element>())
        .filter(|chip| chip.class_list().contains(ACTIVE_CHIP_CLASS))
        .map(|chip| chip.get_attribute("data-lp-filter").unwrap())
        .collect()
}

/// Lets the Yew scheduler render pending updates.
async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn pin_map_filters_and_opens_details() {
    let host = mount(
        r#"<button data-lp-filter="all">All</button>
           <button data-lp-filter="healthcare">Healthcare</button>
           <button data-lp-filter="commercial">Commercial</button>
           <div id="lpMapPins"><span class="placeholder">Loading</span></div>
           <h5 id="lpModalTitle"></h5>
           <p id="lpModalMeta"></p>
           <span id="lpModalCategory"></span>
           <span id="lpModalSector"></span>
           <span id="lpModalArea"></span>
           <span id="lpModalPrice"></span>"#,
    );
    pin_map::mount().unwrap();
    settle().await;

    let all: Vec<String> = PARCEL_CATALOG.iter().map(|entry| entry.id.to_string()).collect();
    assert_eq!(pin_ids(&host), all);
    assert!(host.query_selector(".placeholder").unwrap().is_none());
    assert_eq!(active_chips(&host), ["all"]);

    click(&host, r#"[data-lp-filter="healthcare"]"#);
    settle().await;
    assert_eq!(pin_ids(&host).len(), count_in_category(Category::Healthcare));
    assert_eq!(pin_ids(&host), ["LP-103"]);
    assert_eq!(active_chips(&host), ["healthcare"]);

    let pin = host.query_selector("#lpMapPins button").unwrap().unwrap();
    assert!(pin.class_list().contains("lp-pin--healthcare"));
    assert_eq!(
        pin.get_attribute("aria-label").as_deref(),
        Some("Healthcare Site - Sector 79 pin")
    );
    assert!(pin.query_selector("i.bi.bi-hospital").unwrap().is_some());

    click(&host, r#"[data-lp-filter="all"]"#);
    settle().await;
    assert_eq!(pin_ids(&host).len(), PARCEL_CATALOG.len());
    assert_eq!(active_chips(&host), ["all"]);

    click(&host, r#"#lpMapPins [data-parcel-id="LP-102"]"#);
    settle().await;
    let text = |id: &str| document().get_element_by_id(id).unwrap().text_content().unwrap();
    assert_eq!(text("lpModalTitle"), "Group Housing - Sector 88");
    assert!(text("lpModalMeta").starts_with("LP-102 • "));
    assert_eq!(text("lpModalCategory"), "Group Housing");
    assert_eq!(text("lpModalSector"), "Sector 88");
    assert_eq!(text("lpModalArea"), "5.00 Acres");
    assert_eq!(text("lpModalPrice"), "₹ 48.0 Cr");
    host.remove();
}

#[wasm_bindgen_test]
fn counter_element_animates_once() {
    let host = mount(r#"<span class="js-counter" data-target="48.0" data-prefix="₹ " data-suffix=" Cr">0</span>"#);
    let element = host.query_selector(".js-counter").unwrap().unwrap();
    let mut counter = CounterElement::new(element.clone(), 900.0);

    let token = counter.reveal(100.0).expect("numeric counter starts");
    assert!(counter.reveal(150.0).is_none());
    assert!(counter.advance(token, 550.0));
    assert!(!counter.is_animated());
    assert!(element.get_attribute("data-animated").is_none());

    assert!(!counter.advance(token, 1000.0));
    assert_eq!(element.text_content().as_deref(), Some("₹ 48.0 Cr"));
    assert_eq!(element.get_attribute("data-animated").as_deref(), Some("true"));
    assert!(counter.is_animated());

    assert!(counter.reveal(2000.0).is_none());
    assert!(!counter.advance(token, 2000.0));
    assert_eq!(element.text_content().as_deref(), Some("₹ 48.0 Cr"));
    host.remove();
}

#[wasm_bindgen_test]
fn literal_counter_settles_immediately() {
    let host = mount(r#"<span class="js-counter" data-target="N/A" data-suffix="+"></span>"#);
    let element = host.query_selector(".js-counter").unwrap().unwrap();
    let mut counter = CounterElement::new(element.clone(), 900.0);

    assert!(counter.reveal(0.0).is_none());
    assert_eq!(element.text_content().as_deref(), Some("N/A+"));
    assert_eq!(element.get_attribute("data-animated").as_deref(), Some("true"));
    assert!(counter.is_animated());
    host.remove();
}

#[wasm_bindgen_test]
async fn frame_loop_runs_to_the_exact_target() {
    let host = mount(r#"<span class="js-counter" data-target="120" data-suffix="+">0</span>"#);
    let element = host.query_selector(".js-counter").unwrap().unwrap();
    let now = web_sys::window().unwrap().performance().unwrap().now();
    let counter = Rc::new(RefCell::new(CounterElement::new(element.clone(), 60.0)));

    let token = counter.borrow_mut().reveal(now).unwrap();
    counters::schedule_frames(counter.clone(), token).unwrap();
    TimeoutFuture::new(300).await;

    assert_eq!(element.text_content().as_deref(), Some("120+"));
    assert_eq!(element.get_attribute("data-animated").as_deref(), Some("true"));
    assert!(counter.borrow().is_animated());
    host.remove();
}
