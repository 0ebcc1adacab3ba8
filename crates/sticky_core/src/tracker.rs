//! Scroll position and direction bookkeeping.

use core_types::{HorizontalDirection, ScrollOffset, VerticalDirection};

/// Last observed scroll offset plus the direction of the most recent
/// movement on each axis.
///
/// Direction is derived per observation: an axis whose offset did not
/// change reports `None` for that event, it does not latch the previous
/// direction. Horizontal direction is informational only; the visibility
/// rule reads the vertical axis.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    last: ScrollOffset,
    vertical: VerticalDirection,
    horizontal: HorizontalDirection,
}

impl ScrollTracker {
    /// Start tracking from `origin`, with no movement recorded yet.
    pub fn new(origin: ScrollOffset) -> Self {
        Self {
            last: origin,
            vertical: VerticalDirection::None,
            horizontal: HorizontalDirection::None,
        }
    }

    /// Fold one scroll event into the tracker.
    pub fn observe(&mut self, now: ScrollOffset) {
        self.vertical = if now.y > self.last.y {
            VerticalDirection::Down
        } else if now.y < self.last.y {
            VerticalDirection::Up
        } else {
            VerticalDirection::None
        };

        self.horizontal = if now.x > self.last.x {
            HorizontalDirection::Right
        } else if now.x < self.last.x {
            HorizontalDirection::Left
        } else {
            HorizontalDirection::None
        };

        self.last = now;
    }

    /// The offset recorded by the most recent observation.
    #[inline]
    pub fn offset(&self) -> ScrollOffset {
        self.last
    }

    #[inline]
    pub fn vertical(&self) -> VerticalDirection {
        self.vertical
    }

    #[inline]
    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }
}
