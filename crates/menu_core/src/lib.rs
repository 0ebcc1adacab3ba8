//! # menu_core
//!
//! Declarative multi-target menu controller.
//!
//! Trigger elements carry a `data-menu-open`, `data-menu-close`, or
//! `data-menu-toggle` attribute whose value is a comma-separated list of
//! target element ids. [`MenuManager::bind`] scans the document for
//! triggers; the host forwards clicks to [`MenuManager::on_click`], which
//! applies the trigger's action to every target that resolves.
//!
//! Markup contract (ids are examples):
//!
//! ```text
//! <button data-menu-toggle="js-menu">Menu</button>
//! <button data-menu-open="js-menu,js-menu-2">Open both</button>
//! <div id="js-menu" class="-translate-x-full">…</div>
//! ```
//!
//! Failure policy is silent skip: a target id that resolves to no element
//! is skipped and the rest of the list is still processed. Nothing here
//! panics on malformed markup.

mod action;
mod manager;

pub use action::MenuAction;
pub use manager::{MenuClasses, MenuManager};
