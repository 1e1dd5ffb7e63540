use common::controllers::{LogoVariants, NavbarSurface, ScrollAppearanceController};
use common::PageConfig;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::dom;

pub const NAVBAR_SELECTOR: &str = ".site-navbar";
pub const LOGO_ID: &str = "navbarLogo";

/// The navbar and, when present, its logo image.
pub struct NavbarElements {
    navbar: Element,
    logo: Option<HtmlImageElement>,
}

impl NavbarElements {
    pub fn new(navbar: Element, logo: Option<HtmlImageElement>) -> Self {
        Self { navbar, logo }
    }

    /// Reads the paired `data-logo-white` / `data-logo-dark` sources.
    pub fn logo_variants(&self) -> Option<LogoVariants> {
        let logo = self.logo.as_ref()?;
        LogoVariants::from_attributes(
            dom::data_attr(logo, "logo-white"),
            dom::data_attr(logo, "logo-dark"),
        )
    }
}

impl NavbarSurface for NavbarElements {
    fn set_class(&mut self, class: &str, on: bool) {
        dom::toggle_class(&self.navbar, class, on);
    }

    fn set_logo_src(&mut self, src: &str) {
        if let Some(logo) = &self.logo {
            logo.set_src(src);
        }
    }
}

pub fn init(config: &PageConfig) -> Result<(), String> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(navbar) = dom::query(&document, NAVBAR_SELECTOR)? else {
        gloo_console::debug!("no navbar on this page");
        return Ok(());
    };
    let logo = document
        .get_element_by_id(LOGO_ID)
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok());

    let mut elements = NavbarElements::new(navbar, logo);
    let controller =
        ScrollAppearanceController::new(config.scroll_threshold_px, elements.logo_variants());
    if !controller.has_logo_swap() {
        gloo_console::debug!("navbar logo swap disabled");
    }

    controller.sync(window.scroll_y().unwrap_or(0.0), &mut elements);

    let scroll_window = window.clone();
    // Default listener options are passive.
    EventListener::new(&window, "scroll", move |_| {
        let offset = scroll_window.scroll_y().unwrap_or(0.0);
        controller.sync(offset, &mut elements);
    })
    .forget();

    Ok(())
}
