//! Scroll offset capability.
//!
//! The manager never reads a global window object; whoever owns the real
//! viewport hands it a [`ScrollSource`].

use core_types::ScrollOffset;

/// Provider of the current page scroll offset.
pub trait ScrollSource {
    fn offset(&self) -> ScrollOffset;
}

/// A [`ScrollSource`] backed by a plain stored offset.
///
/// Tests and demos set the offset, then deliver a scroll event:
///
/// ```
/// use core_types::ScrollOffset;
/// use sticky_core::{FixedScrollSource, ScrollSource};
///
/// let mut source = FixedScrollSource::default();
/// source.set(ScrollOffset::new(0.0, 150.0));
/// assert_eq!(source.offset().y, 150.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScrollSource {
    current: ScrollOffset,
}

impl FixedScrollSource {
    pub const fn new(current: ScrollOffset) -> Self {
        Self { current }
    }

    pub fn set(&mut self, offset: ScrollOffset) {
        self.current = offset;
    }
}

impl ScrollSource for FixedScrollSource {
    #[inline]
    fn offset(&self) -> ScrollOffset {
        self.current
    }
}
