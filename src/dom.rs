//! Host DOM abstraction.
//!
//! Behaviors are written against [`Dom`] rather than a concrete browser
//! binding, so the same logic runs over `web-sys` in the browser and over
//! an in-memory tree in tests. Elements are cheap handles (`Clone`) that
//! compare by identity.

use std::fmt;

use crate::error::VeneerError;
use crate::events::FilterChange;

/// How an element should be aligned when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// Align the element's top with the viewport top (anchor targets).
    Start,
    /// Center horizontally, move vertically only if needed (filter
    /// buttons).
    CenterInline,
}

/// Intersection observer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS root margin shorthand.
    pub root_margin: String,
}

/// One entry of an intersection batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry<E> {
    /// The observed element.
    pub target: E,
    /// Whether the element crossed the threshold into the viewport.
    pub is_intersecting: bool,
}

/// Callback receiving every entry delivered in one observer invocation.
pub type IntersectionCallback<E> = Box<dyn FnMut(Vec<IntersectionEntry<E>>)>;

/// A live intersection observer.
pub trait IntersectionObserver<E> {
    /// Start watching `target`.
    fn observe(&self, target: &E);
    /// Stop watching `target`. Unobserving an unknown target is a no-op.
    fn unobserve(&self, target: &E);
}

/// Element queries and mutations the behaviors need from the host.
///
/// Query methods swallow invalid selectors (returning nothing) since an
/// unresolvable selector is never an error for these behaviors.
pub trait Dom {
    /// Element handle.
    type Element: Clone + PartialEq + fmt::Debug + 'static;
    /// Observer handle produced by [`Dom::create_observer`].
    type Observer: IntersectionObserver<Self::Element> + 'static;

    /// All elements under `root` (excluding `root`) matching `selector`, in
    /// document order.
    fn query_all(
        &self,
        root: &Self::Element,
        selector: &str,
    ) -> Vec<Self::Element>;

    /// First element under `root` matching `selector`.
    fn query(
        &self,
        root: &Self::Element,
        selector: &str,
    ) -> Option<Self::Element> {
        self.query_all(root, selector).into_iter().next()
    }

    /// Whether `el` carries `class`.
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    /// Add `class` to `el`.
    fn add_class(&self, el: &Self::Element, class: &str);
    /// Remove `class` from `el`.
    fn remove_class(&self, el: &Self::Element, class: &str);

    /// Attribute value, `None` when absent.
    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    /// Whether the attribute is present (with any value).
    fn has_attribute(&self, el: &Self::Element, name: &str) -> bool {
        self.attribute(el, name).is_some()
    }

    /// Number of child *elements* (text nodes excluded).
    fn child_element_count(&self, el: &Self::Element) -> usize;

    /// Create a `<div class="{class}">` and append it to `parent`.
    fn append_div(
        &self,
        parent: &Self::Element,
        class: &str,
    ) -> Result<Self::Element, VeneerError>;

    /// Detach `el` from the tree.
    fn remove(&self, el: &Self::Element);

    /// Set an inline style property.
    fn set_style(
        &self,
        el: &Self::Element,
        property: &str,
        value: &str,
    ) -> Result<(), VeneerError>;

    /// Horizontal scroll offset of a scroll container.
    fn scroll_left(&self, el: &Self::Element) -> f64;
    /// Rendered width of an element, 0 when not laid out.
    fn offset_width(&self, el: &Self::Element) -> f64;
    /// Smoothly scroll a container horizontally to `left`.
    fn smooth_scroll_to_left(&self, el: &Self::Element, left: f64);
    /// Smoothly scroll `el` into view.
    fn smooth_scroll_into_view(
        &self,
        el: &Self::Element,
        alignment: ScrollAlignment,
    );

    /// Publish a filter change to the host application.
    fn dispatch_filter_change(
        &self,
        event_name: &str,
        change: &FilterChange,
    ) -> Result<(), VeneerError>;

    /// Create an intersection observer delivering batches to `callback`.
    fn create_observer(
        &self,
        config: &ObserverConfig,
        callback: IntersectionCallback<Self::Element>,
    ) -> Result<Self::Observer, VeneerError>;
}
