//! The parcel detail dialog: its text fields and the page's modal widget.

use common::controllers::{DetailView, ModalCapability, ModalContent};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub const TITLE_ID: &str = "lpModalTitle";
pub const META_ID: &str = "lpModalMeta";
pub const CATEGORY_ID: &str = "lpModalCategory";
pub const SECTOR_ID: &str = "lpModalSector";
pub const AREA_ID: &str = "lpModalArea";
pub const PRICE_ID: &str = "lpModalPrice";

/// Text fields of the dialog. Each one is optional on the page.
#[derive(Default)]
pub struct DomDetailView {
    title: Option<Element>,
    meta: Option<Element>,
    category: Option<Element>,
    sector: Option<Element>,
    area: Option<Element>,
    price: Option<Element>,
}

impl DomDetailView {
    pub fn from_document(document: &Document) -> Self {
        Self {
            title: document.get_element_by_id(TITLE_ID),
            meta: document.get_element_by_id(META_ID),
            category: document.get_element_by_id(CATEGORY_ID),
            sector: document.get_element_by_id(SECTOR_ID),
            area: document.get_element_by_id(AREA_ID),
            price: document.get_element_by_id(PRICE_ID),
        }
    }
}

fn set_text(field: &Option<Element>, text: &str) {
    if let Some(element) = field {
        element.set_text_content(Some(text));
    }
}

impl DetailView for DomDetailView {
    fn populate(&mut self, content: &ModalContent) {
        set_text(&self.title, &content.title);
        set_text(&self.meta, &content.meta);
        set_text(&self.category, &content.category_label);
        set_text(&self.sector, &content.sector);
        set_text(&self.area, &content.area);
        set_text(&self.price, &content.price);
    }
}

/// Handle to a `window.bootstrap.Modal` instance bound to the dialog element.
pub struct BootstrapModal {
    instance: JsValue,
}

impl BootstrapModal {
    /// Constructs the widget for `element`. `None` when the page did not load
    /// bootstrap or construction throws.
    pub fn attach(element: &Element) -> Option<Self> {
        let window = web_sys::window()?;
        let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_null() || bootstrap.is_undefined() {
            return None;
        }
        let constructor = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let instance = Reflect::construct(&constructor, &Array::of1(element)).ok()?;
        Some(Self { instance })
    }
}

impl ModalCapability for BootstrapModal {
    fn show(&self) {
        let Ok(show) = Reflect::get(&self.instance, &JsValue::from_str("show")) else {
            return;
        };
        if let Ok(show) = show.dyn_into::<Function>() {
            if let Err(err) = show.call0(&self.instance) {
                gloo_console::warn!("parcel modal failed to open", err);
            }
        }
    }
}
