//! Deterministic text rendering of a [`DomStore`] for test comparisons.
//! Not a public stable format; intended for internal golden assertions.
//!
//! One line per element, in document order:
//! - tag name, then `#id` when the element carries a markup id
//! - the current class list in membership order, when non-empty
//!
//! Class membership is rendered from the live class list, not the `class`
//! attribute the element was inserted with, so snapshots reflect manager
//! mutations.

use crate::id::NodeId;
use crate::store::DomStore;
use std::fmt::Write;

/// Render the whole store, one element per line.
pub fn render(dom: &DomStore) -> String {
    let mut out = String::new();
    for raw in 0..dom.len() as u32 {
        let node = NodeId::from_raw(raw);
        if raw != 0 {
            out.push('\n');
        }
        render_element(dom, node, &mut out);
    }
    out
}

fn render_element(dom: &DomStore, node: NodeId, out: &mut String) {
    use crate::traits::Document as _;

    out.push_str(dom.tag(node).unwrap_or("?"));
    if let Some(id) = dom.attribute(node, "id") {
        if !id.is_empty() {
            let _ = write!(out, "#{id}");
        }
    }
    let classes = dom.classes(node);
    if !classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", classes.join(" "));
    }
}
