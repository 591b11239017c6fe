// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Client-side embellishments for a web media-browser interface.
//!
//! Veneer attaches five small, independent behaviors to an existing page:
//!
//! - [`behaviors::HeaderController`] hides the header while scrolling down
//!   and shows it again on the way back up.
//! - [`behaviors::EntranceAnimator`] reveals list items with a staggered
//!   fade as they enter the viewport, one-shot per element.
//! - [`behaviors::SkeletonLoader`] fills empty or loading containers with
//!   ghost cards and clears them on a timer.
//! - [`behaviors::FilterBar`] snaps a horizontally scrolling filter bar to
//!   button boundaries and toggles single/multi selection.
//! - [`behaviors::AnchorScroller`] smooth-scrolls in-page `#fragment`
//!   links.
//!
//! # Key entry points
//!
//! - [`Veneer::attach`] - explicit initialization over any [`dom::Dom`]
//!   host and [`schedule::Scheduler`]
//! - [`options::Options`] - tunable delays, thresholds and the DOM contract
//!   (class names, selectors, event names)
//! - `web::install` (feature `web`) - binds everything to the browser via
//!   `web-sys`
//!
//! # Architecture
//!
//! Behaviors never touch the browser directly. They talk to a [`dom::Dom`]
//! implementation for element queries and mutation and to a
//! [`schedule::Scheduler`] for delayed work. The host feeds events in
//! (scroll offsets, clicks, intersection batches, content-loading
//! notifications). Everything runs on one thread; shared state lives in
//! `Rc<RefCell<_>>`.

pub mod behaviors;
pub mod dom;
mod error;
pub mod events;
pub mod options;
pub mod schedule;
mod veneer;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use error::VeneerError;
pub use veneer::Veneer;
