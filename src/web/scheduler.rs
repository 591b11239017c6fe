use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use rustc_hash::FxHashMap;

use crate::error::VeneerError;
use crate::schedule::{Scheduler, Task, TaskId};

/// [`Scheduler`] backed by `setTimeout`.
///
/// Live timeouts are owned here; cancelling drops the timeout, which
/// clears it in the browser.
#[derive(Default)]
pub struct TimeoutScheduler {
    next_id: Cell<u64>,
    live: Rc<RefCell<FxHashMap<u64, Timeout>>>,
}

impl TimeoutScheduler {
    /// Create a scheduler with no timers running.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Task,
    ) -> Result<TaskId, VeneerError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        let live = Rc::clone(&self.live);
        let timeout = Timeout::new(millis, move || {
            // The borrow ends before the task runs; tasks may schedule.
            let fired = live.borrow_mut().remove(&id);
            task();
            drop(fired);
        });
        let _ = self.live.borrow_mut().insert(id, timeout);
        Ok(TaskId::from_raw(id))
    }

    fn cancel(&self, id: TaskId) {
        // Dropping a gloo timeout clears it.
        let _ = self.live.borrow_mut().remove(&id.to_raw());
    }
}
