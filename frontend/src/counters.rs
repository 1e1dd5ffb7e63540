//! Counters animated on first sight.
//!
//! An `IntersectionObserver` reports when a `.js-counter` element crosses the
//! visibility threshold. The element is unobserved on that first report, its
//! attributes are parsed into a `CounterSpec`, and an animation-frame loop
//! drives the `CounterAnimator` until it reports completion.

use std::cell::RefCell;
use std::rc::Rc;

use common::controllers::{AnimationToken, CounterAnimator, Frame, Trigger};
use common::model::counter::CounterSpec;
use common::PageConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

pub const COUNTER_SELECTOR: &str = ".js-counter";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A counter element and, once it has been seen, its animator.
pub struct CounterElement {
    element: Element,
    duration_ms: f64,
    animator: Option<CounterAnimator>,
}

impl CounterElement {
    pub fn new(element: Element, duration_ms: f64) -> Self {
        Self {
            element,
            duration_ms,
            animator: None,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animator.as_ref().is_some_and(CounterAnimator::is_animated)
    }

    /// First visibility report. Returns a token when frames must be scheduled.
    pub fn reveal(&mut self, now_ms: f64) -> Option<AnimationToken> {
        let element = &self.element;
        let duration_ms = self.duration_ms;
        let animator = self
            .animator
            .get_or_insert_with(|| CounterAnimator::new(read_spec(element), duration_ms));
        match animator.trigger(now_ms) {
            Trigger::Ignored => None,
            Trigger::Settled(text) => {
                element.set_text_content(Some(&text));
                mark_animated(element);
                None
            }
            Trigger::Started(token) => Some(token),
        }
    }

    /// Renders one frame. Returns whether another frame is needed.
    pub fn advance(&mut self, token: AnimationToken, now_ms: f64) -> bool {
        let Some(animator) = self.animator.as_mut() else {
            return false;
        };
        match animator.frame(token, now_ms) {
            Frame::Continue(text) => {
                self.element.set_text_content(Some(&text));
                true
            }
            Frame::Finished(text) => {
                self.element.set_text_content(Some(&text));
                mark_animated(&self.element);
                false
            }
            Frame::Stale => false,
        }
    }
}

fn read_spec(element: &Element) -> CounterSpec {
    CounterSpec::from_attributes(
        dom::data_attr(element, "target").as_deref(),
        dom::data_attr(element, "prefix").as_deref(),
        dom::data_attr(element, "suffix").as_deref(),
    )
}

fn mark_animated(element: &Element) {
    if let Err(err) = element.set_attribute("data-animated", "true") {
        gloo_console::warn!(format!("counter not marked animated: {}", dom::js_err(err)));
    }
}

/// Runs the animation-frame loop until the animator stops asking for frames.
pub fn schedule_frames(counter: Rc<RefCell<CounterElement>>, token: AnimationToken) -> Result<(), String> {
    let window = dom::window()?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let keep_going = counter.borrow_mut().advance(token, now);
        if keep_going {
            if let Some(frame) = next.borrow().as_ref() {
                if let Err(err) = frame_window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                    gloo_console::warn!(format!("counter frame not scheduled: {}", dom::js_err(err)));
                }
            }
        } else {
            // Drop the self-reference so the closure is released.
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let requested = match callback.borrow().as_ref() {
        Some(first) => window.request_animation_frame(first.as_ref().unchecked_ref()),
        None => return Ok(()),
    };
    requested.map(|_| ()).map_err(dom::js_err)
}

pub fn init(config: &PageConfig) -> Result<(), String> {
    let document = dom::document()?;
    let elements = dom::query_all(&document, COUNTER_SELECTOR)?;
    if elements.is_empty() {
        gloo_console::debug!("no counters on this page");
        return Ok(());
    }
    let performance = dom::window()?
        .performance()
        .ok_or_else(|| "performance clock unavailable".to_string())?;

    let counters: Vec<Rc<RefCell<CounterElement>>> = elements
        .iter()
        .map(|element| {
            Rc::new(RefCell::new(CounterElement::new(
                element.clone(),
                config.counter_duration_ms,
            )))
        })
        .collect();

    let on_visible = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);

                let Some(counter) = counters.iter().find(|c| c.borrow().element == target) else {
                    continue;
                };
                let token = counter.borrow_mut().reveal(performance.now());
                if let Some(token) = token {
                    if let Err(err) = schedule_frames(counter.clone(), token) {
                        gloo_console::warn!(format!("counter animation not started: {}", err));
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.visibility_threshold));
    let observer = IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)
        .map_err(dom::js_err)?;
    for element in &elements {
        observer.observe(element);
    }
    // The observer lives for the whole page.
    on_visible.forget();

    gloo_console::log!("counters watched:", elements.len());
    Ok(())
}
