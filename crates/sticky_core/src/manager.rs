use crate::source::ScrollSource;
use crate::tracker::ScrollTracker;
use core_types::{HorizontalDirection, VerticalDirection};
use dom_core::{Document, NodeId};
use thiserror::Error;

/// Markup id the page contract designates for the sticky element.
pub const DEFAULT_STICKY_ID: &str = "js-sticky";

/// Vertical offset (CSS px) below which the element always shows.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Class lists for the two visibility states.
#[derive(Clone, Debug)]
pub struct StickyClasses {
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
}

impl Default for StickyClasses {
    fn default() -> Self {
        Self {
            visible: vec!["shadow-lg".to_string()],
            hidden: vec!["-translate-y-full".to_string()],
        }
    }
}

/// Constructor-injected configuration for [`StickyManager::bind`].
#[derive(Clone, Debug)]
pub struct StickyConfig {
    /// Markup id of the element to manage.
    pub element_id: String,
    /// Hysteresis threshold in CSS px.
    pub threshold: f64,
    pub classes: StickyClasses,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_STICKY_ID.to_string(),
            threshold: DEFAULT_THRESHOLD,
            classes: StickyClasses::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StickyError {
    /// The configured element id resolved to nothing at bind time.
    ///
    /// Binding fails fast instead of deferring the fault to the first
    /// show/hide the way an unchecked lookup would.
    #[error("no element with id `{id}` in the document")]
    ElementNotFound { id: String },
}

/// Visibility controller for a single sticky element.
///
/// Created with [`bind`](Self::bind); the host forwards every scroll event
/// to [`on_scroll`](Self::on_scroll) for the lifetime of the page. Dropping
/// the manager is the dispose step; it holds no listeners of its own.
///
/// State machine: two states, visible and hidden. Transitions fire only on
/// scroll events (plus one bind-time evaluation) and only across the edges
/// of the hysteresis rule; in the dead zone the element holds its last
/// state.
#[derive(Clone, Debug)]
pub struct StickyManager {
    element: NodeId,
    threshold: f64,
    classes: StickyClasses,
    tracker: ScrollTracker,
    is_visible: bool,
}

impl StickyManager {
    /// Resolve the sticky element and evaluate its initial visibility.
    ///
    /// The tracker is seeded from the source's current offset, so the first
    /// evaluation runs with direction `None` and always shows: the element's
    /// state reflects the load-time scroll position, not whatever classes
    /// the markup shipped with.
    pub fn bind(
        dom: &mut impl Document,
        source: &impl ScrollSource,
        config: StickyConfig,
    ) -> Result<Self, StickyError> {
        let StickyConfig {
            element_id,
            threshold,
            classes,
        } = config;

        let Some(element) = dom.element_by_id(&element_id) else {
            return Err(StickyError::ElementNotFound { id: element_id });
        };

        let origin = source.offset();
        let mut manager = Self {
            element,
            threshold,
            classes,
            tracker: ScrollTracker::new(origin),
            is_visible: false,
        };
        manager.evaluate(dom);
        log::debug!(target: "sticky", "bound #{element_id} at y={}", origin.y);
        Ok(manager)
    }

    /// Fold one scroll event into the state machine.
    ///
    /// Reads the source once, derives per-axis direction, then applies the
    /// visibility rule. The handler never blocks or cancels scrolling.
    pub fn on_scroll(&mut self, dom: &mut impl Document, source: &impl ScrollSource) {
        self.tracker.observe(source.offset());
        self.evaluate(dom);
    }

    // Rule order matters: the show branch runs first and the hide branch's
    // preconditions (Down && y > threshold) cannot hold after it fires.
    fn evaluate(&mut self, dom: &mut impl Document) {
        let y = self.tracker.offset().y;
        let vertical = self.tracker.vertical();
        let not_downward = matches!(
            vertical,
            VerticalDirection::None | VerticalDirection::Up
        );

        if (not_downward || y < self.threshold) && !self.is_visible {
            self.show(dom);
        }

        if vertical == VerticalDirection::Down && y > self.threshold && self.is_visible {
            self.hide(dom);
        }
    }

    /// Apply the visible class state.
    pub fn show(&mut self, dom: &mut impl Document) {
        for class in &self.classes.visible {
            dom.add_class(self.element, class);
        }
        for class in &self.classes.hidden {
            dom.remove_class(self.element, class);
        }
        self.is_visible = true;
        log::trace!(target: "sticky", "show at y={}", self.tracker.offset().y);
    }

    /// Apply the hidden class state.
    pub fn hide(&mut self, dom: &mut impl Document) {
        for class in &self.classes.visible {
            dom.remove_class(self.element, class);
        }
        for class in &self.classes.hidden {
            dom.add_class(self.element, class);
        }
        self.is_visible = false;
        log::trace!(target: "sticky", "hide at y={}", self.tracker.offset().y);
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// The managed element's handle.
    #[inline]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[inline]
    pub fn vertical(&self) -> VerticalDirection {
        self.tracker.vertical()
    }

    /// Informational only; the visibility rule never reads this axis.
    #[inline]
    pub fn horizontal(&self) -> HorizontalDirection {
        self.tracker.horizontal()
    }
}
