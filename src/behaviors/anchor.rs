//! Smooth scrolling for in-page `#fragment` links.

use std::rc::Rc;

use crate::dom::{Dom, ScrollAlignment};
use crate::options::Options;

/// What happened to an anchor click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Bare `#` or not a fragment link; left to the browser.
    Ignored,
    /// Target found and scrolled into view; default navigation should be
    /// prevented.
    Scrolled,
    /// Fragment did not resolve to an element; left to the browser.
    Unresolved,
}

impl AnchorOutcome {
    /// Whether the host should cancel the browser's default navigation.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::Scrolled
    }
}

/// Smooth scroller for fragment links under a root.
pub struct AnchorScroller<D: Dom> {
    dom: Rc<D>,
    root: D::Element,
    anchors: Vec<D::Element>,
}

impl<D: Dom> AnchorScroller<D> {
    /// Collect the fragment links under `root`.
    pub fn new(dom: Rc<D>, root: &D::Element, options: &Options) -> Self {
        let anchors = dom.query_all(root, &options.selectors.anchor);
        log::debug!("anchor scroller: {} link(s)", anchors.len());
        Self {
            dom,
            root: root.clone(),
            anchors,
        }
    }

    /// Fragment links found at attach time.
    #[must_use]
    pub fn anchors(&self) -> &[D::Element] {
        &self.anchors
    }

    /// Handle a click on `anchor`.
    pub fn on_click(&self, anchor: &D::Element) -> AnchorOutcome {
        match self.dom.attribute(anchor, "href") {
            Some(href) => self.scroll_to_fragment(&href),
            None => AnchorOutcome::Ignored,
        }
    }

    /// Scroll to the element a `#fragment` names. Invalid selectors count
    /// as unresolved.
    pub fn scroll_to_fragment(&self, href: &str) -> AnchorOutcome {
        if href == "#" || !href.starts_with('#') {
            return AnchorOutcome::Ignored;
        }
        match self.dom.query(&self.root, href) {
            Some(target) => {
                self.dom
                    .smooth_scroll_into_view(&target, ScrollAlignment::Start);
                AnchorOutcome::Scrolled
            }
            None => {
                log::debug!("anchor {href} has no target");
                AnchorOutcome::Unresolved
            }
        }
    }
}
