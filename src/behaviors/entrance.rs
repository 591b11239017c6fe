//! Staggered, one-shot reveal of list items as they enter the viewport.
//!
//! Each list item moves through [`EntranceState`] exactly once:
//!
//! ```text
//! Pending ──(intersects)──▶ Scheduled ──(stagger delay)──▶ Animated
//! ```
//!
//! Leaving `Pending` unobserves the element, so it can never be scheduled
//! twice, and reaching `Animated` drops it from the live set. The stagger
//! index counts only the intersecting entries of a single observer batch;
//! batches are not ordered relative to each other. Cards take a simpler
//! path and get their animation class immediately.
//!
//! Host failures never abort setup: an item whose style cannot be set is
//! left as is, and without an observer every item is revealed at once.

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use crate::dom::{
    Dom, IntersectionEntry, IntersectionObserver, ObserverConfig,
};
use crate::options::{EntranceOptions, Options};
use crate::schedule::Scheduler;

/// Lifecycle of one watched list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
    /// Hidden, waiting to intersect.
    Pending,
    /// Intersected and unobserved; reveal timer running.
    Scheduled,
    /// Reveal class applied. Terminal.
    Animated,
}

struct Inner<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    options: EntranceOptions,
    animated_class: String,
    /// Every list item found at construction.
    watched: Vec<D::Element>,
    /// Items not yet animated.
    live: RefCell<Vec<(D::Element, EntranceState)>>,
    observer: OnceCell<D::Observer>,
}

/// Intersection-driven entrance animator.
pub struct EntranceAnimator<D: Dom> {
    inner: Rc<Inner<D>>,
    cards: Vec<D::Element>,
}

impl<D: Dom + 'static> EntranceAnimator<D> {
    /// Prepare every list item and card under `root` and start observing.
    ///
    /// List items get their pre-animation style (transparent, shifted down)
    /// before the observer sees them, so nothing flashes in unstyled.
    pub fn new(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        root: &D::Element,
        options: &Options,
    ) -> Self {
        let sel = &options.selectors;

        let cards = dom.query_all(root, &sel.card);
        for card in &cards {
            dom.add_class(card, &sel.card_animation_class);
        }

        let list_items = dom.query_all(root, &sel.list_item);
        let transform = options.entrance.initial_transform();
        for item in &list_items {
            let styled = dom
                .set_style(item, "opacity", "0")
                .and_then(|()| dom.set_style(item, "transform", &transform));
            if let Err(e) = styled {
                log::warn!("entrance style not applied: {e}");
            }
        }
        log::debug!(
            "entrance animator: {} list item(s), {} card(s)",
            list_items.len(),
            cards.len()
        );

        let inner = Rc::new(Inner {
            dom,
            scheduler,
            options: options.entrance.clone(),
            animated_class: sel.list_item_animated_class.clone(),
            live: RefCell::new(
                list_items
                    .iter()
                    .map(|el| (el.clone(), EntranceState::Pending))
                    .collect(),
            ),
            watched: list_items,
            observer: OnceCell::new(),
        });

        if !inner.watched.is_empty() {
            Inner::start_observing(&inner);
        }

        Self { inner, cards }
    }

    /// Process one observer batch. Hosts that run their own intersection
    /// detection can call this directly.
    pub fn handle_batch(&self, entries: Vec<IntersectionEntry<D::Element>>) {
        Inner::handle_batch(&self.inner, entries);
    }

    /// Current state of a watched list item, `None` if it is not one.
    #[must_use]
    pub fn state_of(&self, el: &D::Element) -> Option<EntranceState> {
        let live = self.inner.live.borrow();
        match live.iter().find(|(item, _)| item == el) {
            Some((_, state)) => Some(*state),
            None if self.inner.watched.contains(el) => {
                Some(EntranceState::Animated)
            }
            None => None,
        }
    }

    /// List items still waiting to intersect.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner
            .live
            .borrow()
            .iter()
            .filter(|(_, state)| *state == EntranceState::Pending)
            .count()
    }

    /// List items not yet animated.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.inner.live.borrow().len()
    }

    /// Cards that received the immediate animation class.
    #[must_use]
    pub fn cards(&self) -> &[D::Element] {
        &self.cards
    }
}

impl<D: Dom + 'static> Inner<D> {
    fn start_observing(this: &Rc<Self>) {
        let config = ObserverConfig {
            threshold: this.options.threshold,
            root_margin: this.options.root_margin.clone(),
        };
        let weak: Weak<Self> = Rc::downgrade(this);
        let created = this.dom.create_observer(
            &config,
            Box::new(move |entries| {
                if let Some(inner) = weak.upgrade() {
                    Self::handle_batch(&inner, entries);
                }
            }),
        );
        match created {
            Ok(observer) => {
                for item in &this.watched {
                    observer.observe(item);
                }
                let _ = this.observer.set(observer);
            }
            Err(e) => {
                log::warn!("entrance observer unavailable, revealing all: {e}");
                this.reveal_all();
            }
        }
    }

    fn reveal_all(&self) {
        let live = std::mem::take(&mut *self.live.borrow_mut());
        for (item, _) in &live {
            self.dom.add_class(item, &self.animated_class);
        }
    }

    fn handle_batch(
        this: &Rc<Self>,
        entries: Vec<IntersectionEntry<D::Element>>,
    ) {
        let mut index = 0;
        for entry in entries.into_iter().filter(|e| e.is_intersecting) {
            if !this.advance(
                &entry.target,
                EntranceState::Pending,
                EntranceState::Scheduled,
            ) {
                continue;
            }
            if let Some(observer) = this.observer.get() {
                observer.unobserve(&entry.target);
            }
            let delay = this.options.stagger_delay(index);
            index += 1;

            let target = entry.target;
            let reveal = {
                let this = Rc::clone(this);
                let target = target.clone();
                move || this.reveal(&target)
            };
            if let Err(e) = this.scheduler.schedule(delay, Box::new(reveal)) {
                log::warn!("entrance reveal not scheduled, applying now: {e}");
                this.reveal(&target);
            }
        }
    }

    /// Apply the reveal class and drop `target` from the live set.
    fn reveal(&self, target: &D::Element) {
        let mut live = self.live.borrow_mut();
        let Some(pos) = live.iter().position(|(item, state)| {
            *state == EntranceState::Scheduled && item == target
        }) else {
            return;
        };
        let _ = live.swap_remove(pos);
        drop(live);
        self.dom.add_class(target, &self.animated_class);
    }

    /// Move `el` from `from` to `to`. False if it is no longer live or is
    /// in any other state.
    fn advance(
        &self,
        el: &D::Element,
        from: EntranceState,
        to: EntranceState,
    ) -> bool {
        let mut live = self.live.borrow_mut();
        match live.iter_mut().find(|(item, _)| item == el) {
            Some((_, state)) if *state == from => {
                *state = to;
                true
            }
            _ => false,
        }
    }
}
