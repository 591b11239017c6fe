//! Explicit initialization entry point.

use std::rc::Rc;

use crate::behaviors::{
    AnchorScroller, EntranceAnimator, FilterBar, HeaderController,
    SkeletonLoader,
};
use crate::dom::Dom;
use crate::options::Options;
use crate::schedule::Scheduler;

/// All behaviors attached to one root.
///
/// Element discovery happens once, inside [`attach`](Self::attach).
/// Elements added later are not picked up, except containers passed to
/// [`SkeletonLoader::on_content_loading`].
pub struct Veneer<D: Dom> {
    header: HeaderController<D>,
    entrance: EntranceAnimator<D>,
    skeleton: SkeletonLoader<D>,
    filter_bars: Vec<FilterBar<D>>,
    anchors: AnchorScroller<D>,
}

impl<D: Dom + 'static> Veneer<D> {
    /// Discover elements under `root` and attach every behavior.
    ///
    /// Runs the startup skeleton pass and sets list items to their
    /// pre-animation state before returning. Host failures inside one
    /// behavior are logged and never keep the others from attaching.
    pub fn attach(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        root: &D::Element,
        options: &Options,
    ) -> Self {
        let header = HeaderController::new(Rc::clone(&dom), root, options);
        let entrance = EntranceAnimator::new(
            Rc::clone(&dom),
            Rc::clone(&scheduler),
            root,
            options,
        );
        let skeleton = SkeletonLoader::new(
            Rc::clone(&dom),
            Rc::clone(&scheduler),
            root,
            options,
        );
        let filter_bars = FilterBar::discover(&dom, &scheduler, root, options);
        let anchors = AnchorScroller::new(dom, root, options);
        log::info!("veneer attached");
        Self {
            header,
            entrance,
            skeleton,
            filter_bars,
            anchors,
        }
    }

    /// Header show/hide controller.
    #[must_use]
    pub fn header(&self) -> &HeaderController<D> {
        &self.header
    }

    /// List item and card entrance animator.
    #[must_use]
    pub fn entrance(&self) -> &EntranceAnimator<D> {
        &self.entrance
    }

    /// Skeleton placeholder loader.
    #[must_use]
    pub fn skeleton(&self) -> &SkeletonLoader<D> {
        &self.skeleton
    }

    /// Filter bars found under the root.
    #[must_use]
    pub fn filter_bars(&self) -> &[FilterBar<D>] {
        &self.filter_bars
    }

    /// Fragment link scroller.
    #[must_use]
    pub fn anchors(&self) -> &AnchorScroller<D> {
        &self.anchors
    }
}
