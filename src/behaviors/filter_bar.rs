//! Horizontally scrolling filter bars: post-scroll snapping and
//! single/multi-select toggling.

use std::rc::Rc;

use crate::dom::{Dom, ScrollAlignment};
use crate::events::FilterChange;
use crate::options::Options;
use crate::schedule::{Debouncer, Scheduler};

/// Nearest multiple of `item_width` to `scroll_left`, rounding halves up.
/// A width that is not a positive number leaves the offset unchanged.
#[must_use]
pub fn snap_target(scroll_left: f64, item_width: f64) -> f64 {
    if item_width.is_nan() || item_width <= 0.0 {
        return scroll_left;
    }
    (scroll_left / item_width + 0.5).floor() * item_width
}

/// Smallest item width a snap will use.
const MIN_ITEM_WIDTH: f64 = 1.0;

struct BarInner<D: Dom> {
    dom: Rc<D>,
    bar: D::Element,
    buttons: Vec<D::Element>,
    button_selector: String,
    fallback_width: f64,
    selected_class: String,
    multi_select_attribute: String,
    filter_attribute: String,
    change_event: String,
}

/// One filter bar and the buttons it held at attach time.
///
/// Selection is scoped to the bar: a single-select click clears siblings in
/// this bar only.
pub struct FilterBar<D: Dom> {
    inner: Rc<BarInner<D>>,
    snap: Debouncer,
}

impl<D: Dom + 'static> FilterBar<D> {
    /// Find every filter bar under `root`.
    pub fn discover(
        dom: &Rc<D>,
        scheduler: &Rc<dyn Scheduler>,
        root: &D::Element,
        options: &Options,
    ) -> Vec<Self> {
        let bars: Vec<_> = dom
            .query_all(root, &options.selectors.filter_bar)
            .into_iter()
            .map(|bar| {
                Self::new(Rc::clone(dom), Rc::clone(scheduler), bar, options)
            })
            .collect();
        log::debug!("filter bars: {}", bars.len());
        bars
    }

    /// Wrap a single bar element.
    pub fn new(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        bar: D::Element,
        options: &Options,
    ) -> Self {
        let sel = &options.selectors;
        let buttons = dom.query_all(&bar, &sel.filter_button);
        Self {
            inner: Rc::new(BarInner {
                dom,
                bar,
                buttons,
                button_selector: sel.filter_button.clone(),
                fallback_width: options
                    .filter_bar
                    .fallback_item_width_px
                    .max(MIN_ITEM_WIDTH),
                selected_class: sel.selected_class.clone(),
                multi_select_attribute: sel.multi_select_attribute.clone(),
                filter_attribute: sel.filter_attribute.clone(),
                change_event: sel.filter_change_event.clone(),
            }),
            snap: Debouncer::new(scheduler, options.filter_bar.snap_debounce()),
        }
    }

    /// The bar element.
    #[must_use]
    pub fn element(&self) -> &D::Element {
        &self.inner.bar
    }

    /// Buttons captured at attach time, in document order.
    #[must_use]
    pub fn buttons(&self) -> &[D::Element] {
        &self.inner.buttons
    }

    /// The bar scrolled: restart the snap quiet period.
    pub fn on_scroll(&self) {
        let inner = Rc::clone(&self.inner);
        if let Err(e) = self.snap.trigger(Box::new(move || {
            let _ = inner.snap();
        })) {
            log::warn!("filter bar snap not scheduled: {e}");
        }
    }

    /// Whether a snap is waiting for scrolling to settle.
    #[must_use]
    pub fn snap_pending(&self) -> bool {
        self.snap.is_pending()
    }

    /// Align the bar to the nearest button boundary right away. Returns the
    /// target offset.
    pub fn snap_now(&self) -> f64 {
        self.snap.cancel();
        self.inner.snap()
    }

    /// Toggle `button`. Returns the published change, or `None` when the
    /// button does not belong to this bar.
    pub fn on_click(&self, button: &D::Element) -> Option<FilterChange> {
        self.inner.toggle(button)
    }

    /// Filter ids of the currently selected buttons.
    #[must_use]
    pub fn selected_filters(&self) -> Vec<Option<String>> {
        let inner = &self.inner;
        inner
            .buttons
            .iter()
            .filter(|b| inner.dom.has_class(b, &inner.selected_class))
            .map(|b| inner.dom.attribute(b, &inner.filter_attribute))
            .collect()
    }
}

impl<D: Dom> BarInner<D> {
    fn item_width(&self) -> f64 {
        let measured = self
            .dom
            .query(&self.bar, &self.button_selector)
            .map_or(0.0, |b| self.dom.offset_width(&b));
        if measured > 0.0 {
            measured
        } else {
            self.fallback_width
        }
    }

    fn snap(&self) -> f64 {
        let left = self.dom.scroll_left(&self.bar);
        let width = self.item_width();
        let target = snap_target(left, width);
        log::debug!("filter bar snap: {left} -> {target} (item width {width})");
        self.dom.smooth_scroll_to_left(&self.bar, target);
        target
    }

    fn toggle(&self, button: &D::Element) -> Option<FilterChange> {
        if !self.buttons.contains(button) {
            return None;
        }
        let was_selected = self.dom.has_class(button, &self.selected_class);

        if !self.dom.has_attribute(button, &self.multi_select_attribute) {
            for other in &self.buttons {
                self.dom.remove_class(other, &self.selected_class);
            }
        }
        if was_selected {
            self.dom.remove_class(button, &self.selected_class);
        } else {
            self.dom.add_class(button, &self.selected_class);
        }

        self.dom
            .smooth_scroll_into_view(button, ScrollAlignment::CenterInline);

        let change = FilterChange {
            filter: self.dom.attribute(button, &self.filter_attribute),
            selected: !was_selected,
        };
        let dispatched =
            self.dom.dispatch_filter_change(&self.change_event, &change);
        if let Err(e) = dispatched {
            log::warn!("filter change not dispatched: {e}");
        }
        Some(change)
    }
}
