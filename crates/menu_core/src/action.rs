//! The closed set of menu actions.
//!
//! The markup contract selects behavior by attribute name
//! (`data-menu-open` and friends). Dispatch goes through this enum instead
//! of string-keyed method lookup, so an unrecognized keyword simply never
//! produces an action.

/// Action a trigger element requests on its target menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Toggle,
    Open,
    Close,
}

impl MenuAction {
    /// All actions, in trigger-scan order. Toggle first: when an element
    /// carries several trigger attributes, the earliest scanned one wins.
    pub const ALL: [MenuAction; 3] = [MenuAction::Toggle, MenuAction::Open, MenuAction::Close];

    /// The `data-menu-*` attribute carrying this action's target list.
    pub const fn data_attribute(self) -> &'static str {
        match self {
            MenuAction::Toggle => "data-menu-toggle",
            MenuAction::Open => "data-menu-open",
            MenuAction::Close => "data-menu-close",
        }
    }

    /// Parse an action keyword. Anything outside the closed set is `None`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "toggle" => Some(MenuAction::Toggle),
            "open" => Some(MenuAction::Open),
            "close" => Some(MenuAction::Close),
            _ => None,
        }
    }
}
