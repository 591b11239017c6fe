use wasm_bindgen::prelude::*;
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, HtmlElement,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::dom::{
    Dom, IntersectionCallback, IntersectionEntry, IntersectionObserver,
    ObserverConfig, ScrollAlignment,
};
use crate::error::VeneerError;
use crate::events::FilterChange;

fn js_error(e: &JsValue) -> VeneerError {
    VeneerError::Dom(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// [`Dom`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// Bind to the global `document`.
    pub fn new() -> Result<Self, VeneerError> {
        let document = web_sys::window()
            .ok_or(VeneerError::MissingGlobal("window"))?
            .document()
            .ok_or(VeneerError::MissingGlobal("document"))?;
        Ok(Self { document })
    }

    /// The bound document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Browser `IntersectionObserver` plus the closure it calls.
pub struct WebObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl IntersectionObserver<Element> for WebObserver {
    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }
}

impl Drop for WebObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Dom for WebDom {
    type Element = Element;
    type Observer = WebObserver;

    fn query_all(&self, root: &Element, selector: &str) -> Vec<Element> {
        let list = match root.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("bad selector {selector:?}: {}", js_error(&e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&self, el: &Element, class: &str) {
        if let Err(e) = el.class_list().add_1(class) {
            log::warn!("add class {class:?}: {}", js_error(&e));
        }
    }

    fn remove_class(&self, el: &Element, class: &str) {
        if let Err(e) = el.class_list().remove_1(class) {
            log::warn!("remove class {class:?}: {}", js_error(&e));
        }
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn has_attribute(&self, el: &Element, name: &str) -> bool {
        el.has_attribute(name)
    }

    fn child_element_count(&self, el: &Element) -> usize {
        el.child_element_count() as usize
    }

    fn append_div(
        &self,
        parent: &Element,
        class: &str,
    ) -> Result<Element, VeneerError> {
        let div = self
            .document
            .create_element("div")
            .map_err(|e| js_error(&e))?;
        div.set_class_name(class);
        let _ = parent.append_child(&div).map_err(|e| js_error(&e))?;
        Ok(div)
    }

    fn remove(&self, el: &Element) {
        el.remove();
    }

    fn set_style(
        &self,
        el: &Element,
        property: &str,
        value: &str,
    ) -> Result<(), VeneerError> {
        // Only HTML elements carry an inline style we manage.
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return Ok(());
        };
        html.style()
            .set_property(property, value)
            .map_err(|e| js_error(&e))
    }

    fn scroll_left(&self, el: &Element) -> f64 {
        f64::from(el.scroll_left())
    }

    fn offset_width(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_width()))
    }

    fn smooth_scroll_to_left(&self, el: &Element, left: f64) {
        let opts = ScrollToOptions::new();
        opts.set_left(left);
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&opts);
    }

    fn smooth_scroll_into_view(
        &self,
        el: &Element,
        alignment: ScrollAlignment,
    ) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        match alignment {
            ScrollAlignment::Start => {
                opts.set_block(ScrollLogicalPosition::Start);
            }
            ScrollAlignment::CenterInline => {
                opts.set_block(ScrollLogicalPosition::Nearest);
                opts.set_inline(ScrollLogicalPosition::Center);
            }
        }
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn dispatch_filter_change(
        &self,
        event_name: &str,
        change: &FilterChange,
    ) -> Result<(), VeneerError> {
        let detail = js_sys::JSON::parse(&change.to_json().to_string())
            .map_err(|e| js_error(&e))?;
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(event_name, &init)
            .map_err(|e| js_error(&e))?;
        let _ = self
            .document
            .dispatch_event(&event)
            .map_err(|e| js_error(&e))?;
        Ok(())
    }

    fn create_observer(
        &self,
        config: &ObserverConfig,
        mut callback: IntersectionCallback<Element>,
    ) -> Result<WebObserver, VeneerError> {
        let closure = Closure::<
            dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
        >::new(
            move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|v| {
                        v.dyn_into::<IntersectionObserverEntry>().ok()
                    })
                    .map(|entry| IntersectionEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                callback(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);
        let observer = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| js_error(&e))?;

        Ok(WebObserver {
            observer,
            _callback: closure,
        })
    }
}
