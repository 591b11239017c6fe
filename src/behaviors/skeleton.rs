//! Placeholder ("ghost card") loading states for content containers.
//!
//! Completion is simulated: placeholders are cleared after a fixed delay,
//! not when real content arrives. Every container owns its placeholders
//! and its own timer, so any number can load at once. Timers cannot be
//! cancelled once started.

use std::rc::Rc;
use std::time::Duration;

use crate::dom::Dom;
use crate::error::VeneerError;
use crate::options::{Options, ReentryPolicy};
use crate::schedule::Scheduler;

struct Inner<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    placeholder_count: usize,
    simulated_load: Duration,
    reentry: ReentryPolicy,
    loading_class: String,
    placeholder_class: String,
    placeholder_selector: String,
    loading_attribute: String,
}

/// Skeleton loader for content containers.
pub struct SkeletonLoader<D: Dom> {
    inner: Rc<Inner<D>>,
    startup: Vec<D::Element>,
}

impl<D: Dom + 'static> SkeletonLoader<D> {
    /// Scan `root` for content containers and start a skeleton on every
    /// one that is empty or explicitly marked as loading.
    pub fn new(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        root: &D::Element,
        options: &Options,
    ) -> Self {
        let sel = &options.selectors;
        let inner = Rc::new(Inner {
            dom,
            scheduler,
            placeholder_count: options.skeleton.placeholder_count,
            simulated_load: options.skeleton.simulated_load(),
            reentry: options.skeleton.reentry,
            loading_class: sel.skeleton_loading_class.clone(),
            placeholder_class: sel.placeholder_class.clone(),
            placeholder_selector: sel.placeholder_selector(),
            loading_attribute: sel.loading_attribute.clone(),
        });

        let startup: Vec<_> = inner
            .dom
            .query_all(root, &sel.content_container)
            .into_iter()
            .filter(|container| inner.qualifies(container))
            .collect();
        for container in &startup {
            if let Err(e) = Inner::start(&inner, container) {
                log::warn!("skeleton setup failed: {e}");
            }
        }
        log::debug!(
            "skeleton loader: {} container(s) at startup",
            startup.len()
        );

        Self { inner, startup }
    }

    /// Handle a "content is loading" notification. A missing container
    /// (malformed payload) is a no-op. Returns whether placeholders were
    /// added.
    pub fn on_content_loading(&self, container: Option<&D::Element>) -> bool {
        let Some(container) = container else {
            log::debug!("content-loading notification without a container");
            return false;
        };
        match Inner::start(&self.inner, container) {
            Ok(started) => started,
            Err(e) => {
                log::warn!("skeleton setup failed: {e}");
                false
            }
        }
    }

    /// Whether `container` currently carries the loading marker.
    #[must_use]
    pub fn is_loading(&self, container: &D::Element) -> bool {
        self.inner.dom.has_class(container, &self.inner.loading_class)
    }

    /// Placeholders currently inside `container`.
    #[must_use]
    pub fn placeholder_count(&self, container: &D::Element) -> usize {
        self.inner
            .dom
            .query_all(container, &self.inner.placeholder_selector)
            .len()
    }

    /// Containers that qualified during the startup scan.
    #[must_use]
    pub fn startup_containers(&self) -> &[D::Element] {
        &self.startup
    }
}

impl<D: Dom + 'static> Inner<D> {
    fn qualifies(&self, container: &D::Element) -> bool {
        self.dom.child_element_count(container) == 0
            || self
                .dom
                .attribute(container, &self.loading_attribute)
                .is_some_and(|v| v == "true")
    }

    /// Mark `container` loading, append placeholders, and schedule the
    /// simulated completion. `Ok(false)` when re-entry is ignored.
    fn start(
        this: &Rc<Self>,
        container: &D::Element,
    ) -> Result<bool, VeneerError> {
        if this.reentry == ReentryPolicy::Ignore
            && this.dom.has_class(container, &this.loading_class)
        {
            log::debug!("skeleton already running, ignoring re-entry");
            return Ok(false);
        }

        this.dom.add_class(container, &this.loading_class);
        let appended = (0..this.placeholder_count).try_for_each(|_| {
            this.dom
                .append_div(container, &this.placeholder_class)
                .map(drop)
        });

        // Schedule cleanup even if an append failed so the marker never
        // sticks.
        let finish = {
            let this = Rc::clone(this);
            let container = container.clone();
            move || this.finish(&container)
        };
        let scheduled =
            this.scheduler.schedule(this.simulated_load, Box::new(finish));
        if let Err(e) = scheduled {
            log::warn!("skeleton completion not scheduled, clearing now: {e}");
            this.finish(container);
        }
        appended.map(|()| true)
    }

    fn finish(&self, container: &D::Element) {
        self.dom.remove_class(container, &self.loading_class);
        let ghosts = self.dom.query_all(container, &self.placeholder_selector);
        log::debug!(
            "skeleton finished, removing {} placeholder(s)",
            ghosts.len()
        );
        for ghost in &ghosts {
            self.dom.remove(ghost);
        }
    }
}
