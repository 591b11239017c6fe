//! Hides the header while the page scrolls down and restores it on the way
//! back up.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::Dom;
use crate::options::Options;

/// Visibility of the header elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVisibility {
    /// Header shown.
    Visible,
    /// Header slid out of view.
    Hidden,
}

/// Visibility after a scroll from `last` to `current`.
///
/// Hidden only when scrolling down *and* past `threshold`; anything else
/// (scrolling up, standing still, near the top) shows the header.
#[must_use]
pub fn next_visibility(
    last: f64,
    current: f64,
    threshold: f64,
) -> HeaderVisibility {
    if current > last && current > threshold {
        HeaderVisibility::Hidden
    } else {
        HeaderVisibility::Visible
    }
}

/// Scroll-direction driven header controller.
///
/// Targets are the first tab header and the first skin header under the
/// root. With neither present the controller is inert and the host should
/// not bother forwarding scroll events (see [`is_active`](Self::is_active)).
pub struct HeaderController<D: Dom> {
    dom: Rc<D>,
    targets: Vec<D::Element>,
    threshold: f64,
    hidden_class: String,
    visible_class: String,
    last_offset: Cell<f64>,
    visibility: Cell<Option<HeaderVisibility>>,
}

impl<D: Dom> HeaderController<D> {
    /// Discover header targets under `root`.
    pub fn new(dom: Rc<D>, root: &D::Element, options: &Options) -> Self {
        let sel = &options.selectors;
        let targets: Vec<_> = [&sel.tab_header, &sel.skin_header]
            .into_iter()
            .filter_map(|selector| dom.query(root, selector))
            .collect();
        log::debug!("header controller: {} target(s)", targets.len());
        Self {
            dom,
            targets,
            threshold: options.header.hide_threshold_px,
            hidden_class: sel.header_hidden_class.clone(),
            visible_class: sel.header_visible_class.clone(),
            last_offset: Cell::new(0.0),
            visibility: Cell::new(None),
        }
    }

    /// Whether any header element was found.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Header elements being toggled.
    #[must_use]
    pub fn targets(&self) -> &[D::Element] {
        &self.targets
    }

    /// Last offset seen, floored at zero.
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }

    /// Visibility applied by the most recent scroll, `None` before the
    /// first one.
    #[must_use]
    pub fn visibility(&self) -> Option<HeaderVisibility> {
        self.visibility.get()
    }

    /// Apply the page's new vertical scroll offset. Returns the resulting
    /// visibility, or `None` when there is no header to toggle.
    pub fn on_scroll(&self, current: f64) -> Option<HeaderVisibility> {
        if !self.is_active() {
            return None;
        }
        let next =
            next_visibility(self.last_offset.get(), current, self.threshold);
        let (add, remove) = match next {
            HeaderVisibility::Hidden => {
                (&self.hidden_class, &self.visible_class)
            }
            HeaderVisibility::Visible => {
                (&self.visible_class, &self.hidden_class)
            }
        };
        for el in &self.targets {
            self.dom.add_class(el, add);
            self.dom.remove_class(el, remove);
        }
        if self.visibility.replace(Some(next)) != Some(next) {
            log::trace!("header {next:?} at offset {current}");
        }
        self.last_offset.set(current.max(0.0));
        Some(next)
    }
}
