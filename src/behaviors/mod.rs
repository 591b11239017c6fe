//! The five page behaviors.
//!
//! Each behavior discovers its elements once, at construction, and is then
//! driven by the host: scroll offsets, clicks, intersection batches and
//! loading notifications come in through plain method calls. Behaviors
//! share nothing with each other.

/// Smooth in-page `#fragment` scrolling.
pub mod anchor;
/// Intersection-gated, staggered list reveal.
pub mod entrance;
/// Filter bar snapping and selection.
pub mod filter_bar;
/// Header show/hide on scroll direction.
pub mod header;
/// Placeholder loading states.
pub mod skeleton;

pub use anchor::{AnchorOutcome, AnchorScroller};
pub use entrance::{EntranceAnimator, EntranceState};
pub use filter_bar::{snap_target, FilterBar};
pub use header::{next_visibility, HeaderController, HeaderVisibility};
pub use skeleton::SkeletonLoader;
