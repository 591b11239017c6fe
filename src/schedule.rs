//! Delayed work: the [`Scheduler`] seam, a cancellable [`Debouncer`], and
//! a virtual-clock [`TickScheduler`].
//!
//! Every delay in the crate (stagger reveals, simulated load completion,
//! snap debouncing) goes through a [`Scheduler`]. The browser binding backs
//! it with `setTimeout`; frame-driven hosts and tests use
//! [`TickScheduler`] and advance time themselves.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::error::VeneerError;

/// One-shot unit of delayed work.
pub type Task = Box<dyn FnOnce()>;

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a host timer handle.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Host timer handle.
    #[must_use]
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Runs tasks after a delay on the UI thread.
pub trait Scheduler {
    /// Run `task` once, no earlier than `delay` from now.
    fn schedule(&self, delay: Duration, task: Task)
        -> Result<TaskId, VeneerError>;

    /// Drop a task that has not run yet. Cancelling a task that already
    /// ran (or was already cancelled) is a no-op.
    fn cancel(&self, id: TaskId);
}

// ── Debouncer ────────────────────────────────────────────────────────────

/// Cancel-and-restart delayed action.
///
/// Each [`trigger`](Self::trigger) cancels whatever is still pending and
/// schedules the new task after the quiet period, so only the last trigger
/// of a burst ever runs.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    quiet: Duration,
    pending: Rc<Cell<Option<TaskId>>>,
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("quiet", &self.quiet)
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(scheduler: Rc<dyn Scheduler>, quiet: Duration) -> Self {
        Self {
            scheduler,
            quiet,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Restart the quiet period with `task` as the action to run.
    pub fn trigger(&self, task: Task) -> Result<(), VeneerError> {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let id = self.scheduler.schedule(
            self.quiet,
            Box::new(move || {
                // Older tasks were cancelled, so whoever fires is current.
                pending.set(None);
                task();
            }),
        )?;
        self.pending.set(Some(id));
        Ok(())
    }

    /// Drop the pending action, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Whether an action is waiting for the quiet period to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

// ── TickScheduler ────────────────────────────────────────────────────────

/// Scheduler driven by an explicit clock.
///
/// Time only moves when the host calls [`advance`](Self::advance). Tasks
/// due at the same instant run in scheduling order, matching browser timer
/// ordering. Tasks may schedule further tasks while running.
#[derive(Default)]
pub struct TickScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl TickScheduler {
    /// Create a scheduler at time zero with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `dt`, running every task that comes due.
    /// Returns how many tasks ran.
    pub fn advance(&self, dt: Duration) -> usize {
        let target = self.now.get() + dt;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    /// Run tasks until the queue is empty, including tasks scheduled along
    /// the way. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next_due = self.queue.borrow().keys().next().map(|k| k.0);
            let Some(due) = next_due else {
                return ran;
            };
            ran += self.advance(due.saturating_sub(self.now.get()));
        }
    }

    /// Remove the earliest task due at or before `target`, moving the
    /// clock to its due time. The queue borrow ends before the task runs.
    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        self.now.set(key.0);
        queue.remove(&key)
    }
}

impl Scheduler for TickScheduler {
    fn schedule(
        &self,
        delay: Duration,
        task: Task,
    ) -> Result<TaskId, VeneerError> {
        let seq = self.next_id.get();
        self.next_id.set(seq + 1);
        let due = self.now.get() + delay;
        let _ = self.queue.borrow_mut().insert((due, seq), task);
        Ok(TaskId(seq))
    }

    fn cancel(&self, id: TaskId) {
        self.queue.borrow_mut().retain(|&(_, seq), _| seq != id.0);
    }
}
