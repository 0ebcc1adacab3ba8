//! # sticky_core
//!
//! Scroll-direction-aware visibility controller for a single sticky
//! element, typically a fixed-position header.
//!
//! The rule is a hysteresis around a pixel threshold: show near the top of
//! the page or while scrolling up, hide only while scrolling down past the
//! threshold, and hold the last state everywhere in between. The dead zone
//! is what prevents show/hide flicker at the threshold boundary.
//!
//! The current scroll offset arrives through the [`ScrollSource`] trait and
//! class mutations go through [`dom_core::Document`], so the controller
//! runs unchanged against tests, demos, or a real host. The host forwards
//! scroll events to [`StickyManager::on_scroll`]; the handler only mutates
//! classes and never blocks or cancels scrolling, so hosts with a native
//! scroll pipeline can register it as passive.

mod manager;
mod source;
mod tracker;

pub use manager::{
    DEFAULT_STICKY_ID, DEFAULT_THRESHOLD, StickyClasses, StickyConfig, StickyError, StickyManager,
};
pub use source::{FixedScrollSource, ScrollSource};
pub use tracker::ScrollTracker;
