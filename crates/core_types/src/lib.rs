/// Page scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Most recent vertical scroll movement. `None` when the Y offset did not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalDirection {
    #[default]
    None,
    Up,
    Down,
}

/// Most recent horizontal scroll movement. `None` when the X offset did not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalDirection {
    #[default]
    None,
    Left,
    Right,
}
