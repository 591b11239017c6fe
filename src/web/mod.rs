//! Browser binding (feature `web`).
//!
//! [`WebDom`] implements [`Dom`](crate::dom::Dom) over `web-sys`,
//! [`TimeoutScheduler`] backs [`Scheduler`](crate::schedule::Scheduler)
//! with `setTimeout`, and [`install`] attaches a [`Veneer`](crate::Veneer)
//! to a root element and registers every listener it needs.

mod bridge;
mod dom;
mod scheduler;

pub use bridge::{install, Installation};
pub use dom::{WebDom, WebObserver};
pub use scheduler::TimeoutScheduler;

/// Route `log` output to the browser console and install the panic hook.
/// Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
