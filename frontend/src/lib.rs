//! Browser bindings for the landing page.
//!
//! Each controller from `landing-common` is attached to its part of the page
//! here: `web-sys` elements implement the port traits, and platform triggers
//! (IntersectionObserver, animation frames, timers, scroll, click, submit) are
//! forwarded into the controllers.

use common::PageConfig;

pub mod contact_form;
pub mod counters;
pub mod dom;
pub mod footer_year;
pub mod navbar;
pub mod pin_map;
pub mod rotator;

/// Initializes every controller once. A failing controller is logged and
/// never stops the others from starting.
pub fn start() {
    let config = dom::load_page_config();

    run("footer year", footer_year::init);
    run("navbar", || navbar::init(&config));
    run("counters", || counters::init(&config));
    run("headline rotator", || rotator::init(&config));
    run("parcel map", pin_map::mount);
    run("contact form", contact_form::init);
}

fn run<F>(feature: &str, init: F)
where
    F: FnOnce() -> Result<(), String>,
{
    if let Err(err) = init() {
        gloo_console::warn!(format!("{} disabled: {}", feature, err));
    }
}
