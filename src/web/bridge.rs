//! Listener wiring between the browser and a [`Veneer`].
//!
//! **Inbound**: window scroll (header), bar scroll and button clicks
//! (filter bars), anchor clicks, and the content-loading `CustomEvent` on
//! `document`, whose `detail.container` names the container to skeleton.
//!
//! **Outbound**: filter changes are dispatched by
//! [`WebDom`](super::WebDom) as `CustomEvent`s on `document`.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Element, Event, Window};

use super::{TimeoutScheduler, WebDom};
use crate::error::VeneerError;
use crate::options::Options;
use crate::schedule::Scheduler;
use crate::Veneer;

/// Attached behaviors plus their listeners. Dropping it removes every
/// listener; timers already scheduled still run.
pub struct Installation {
    veneer: Rc<Veneer<WebDom>>,
    listeners: Vec<EventListener>,
}

impl Installation {
    /// The attached behaviors.
    #[must_use]
    pub fn veneer(&self) -> &Veneer<WebDom> {
        &self.veneer
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

/// Attach every behavior under `root` and register the listeners that
/// drive them.
pub fn install(
    root: &Element,
    options: &Options,
) -> Result<Installation, VeneerError> {
    let window =
        web_sys::window().ok_or(VeneerError::MissingGlobal("window"))?;
    let dom = Rc::new(WebDom::new()?);
    let document = dom.document().clone();
    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler::new());
    let veneer = Rc::new(Veneer::attach(dom, scheduler, root, options));

    let mut listeners = Vec::new();

    // ── Header ──────────────────────────────────────────────────────────
    if veneer.header().is_active() {
        let v = Rc::clone(&veneer);
        let win = window.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "scroll",
            passive(),
            move |_| {
                let _ = v.header().on_scroll(page_offset(&win));
            },
        ));
    }

    // ── Skeleton (dynamic path) ─────────────────────────────────────────
    {
        let v = Rc::clone(&veneer);
        listeners.push(EventListener::new(
            &document,
            options.selectors.content_loading_event.clone(),
            move |event: &Event| {
                let container = loading_container(event);
                let _ = v.skeleton().on_content_loading(container.as_ref());
            },
        ));
    }

    // ── Filter bars ─────────────────────────────────────────────────────
    for (index, bar) in veneer.filter_bars().iter().enumerate() {
        let v = Rc::clone(&veneer);
        listeners.push(EventListener::new_with_options(
            bar.element(),
            "scroll",
            passive(),
            move |_| v.filter_bars()[index].on_scroll(),
        ));
        for button in bar.buttons() {
            let v = Rc::clone(&veneer);
            let target = button.clone();
            listeners.push(EventListener::new(button, "click", move |_| {
                let _ = v.filter_bars()[index].on_click(&target);
            }));
        }
    }

    // ── Anchors ─────────────────────────────────────────────────────────
    for anchor in veneer.anchors().anchors() {
        let v = Rc::clone(&veneer);
        let target = anchor.clone();
        listeners.push(EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if v.anchors().on_click(&target).prevents_default() {
                    event.prevent_default();
                }
            },
        ));
    }

    log::debug!("installed {} listener(s)", listeners.len());
    Ok(Installation { veneer, listeners })
}

/// `pageYOffset`, falling back to the root element's `scrollTop`.
fn page_offset(window: &Window) -> f64 {
    let offset = window.page_y_offset().unwrap_or_default();
    if offset != 0.0 {
        return offset;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_top()))
}

/// `event.detail.container` if it is an element.
fn loading_container(event: &Event) -> Option<Element> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    if detail.is_undefined() || detail.is_null() {
        return None;
    }
    js_sys::Reflect::get(&detail, &JsValue::from_str("container"))
        .ok()?
        .dyn_into::<Element>()
        .ok()
}
