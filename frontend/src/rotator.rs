use std::cell::RefCell;
use std::rc::Rc;

use common::controllers::headline::TRANSITION_CLASS;
use common::controllers::{HeadlineRotator, HeadlineSurface, MotionPreference};
use common::PageConfig;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;

use crate::dom;

pub const ROTATOR_ID: &str = "heroTitleRotator";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The hero headline element.
pub struct HeadlineElement(pub Element);

impl HeadlineSurface for HeadlineElement {
    fn show_headline(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_transitioning(&mut self, on: bool) {
        dom::toggle_class(&self.0, TRANSITION_CLASS, on);
    }
}

struct RotatorBinding {
    rotator: HeadlineRotator,
    element: HeadlineElement,
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

pub fn init(config: &PageConfig) -> Result<(), String> {
    let document = dom::document()?;
    let Some(element) = document.get_element_by_id(ROTATOR_ID) else {
        gloo_console::debug!("no headline rotator on this page");
        return Ok(());
    };

    let motion = MotionPreference::from_reduced_flag(prefers_reduced_motion());
    let mut rotator =
        HeadlineRotator::new(config.headlines.clone(), motion).map_err(|e| e.to_string())?;
    let mut element = HeadlineElement(element);
    if !rotator.mount(&mut element) {
        gloo_console::log!("headline rotator static (reduced motion)");
        return Ok(());
    }

    let binding = Rc::new(RefCell::new(RotatorBinding { rotator, element }));
    let transition_ms = config.rotator_transition_ms;
    // Cycles for the lifetime of the page.
    Interval::new(config.rotator_interval_ms, move || {
        let started = {
            let mut guard = binding.borrow_mut();
            let RotatorBinding { rotator, element } = &mut *guard;
            rotator.begin_transition(element)
        };
        if !started {
            return;
        }
        let binding = binding.clone();
        Timeout::new(transition_ms, move || {
            let mut guard = binding.borrow_mut();
            let RotatorBinding { rotator, element } = &mut *guard;
            rotator.complete_transition(element);
        })
        .forget();
    })
    .forget();

    Ok(())
}
