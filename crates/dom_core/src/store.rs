//! In-memory document store.
//!
//! The store does not parse markup: hosts (or tests) insert elements with
//! their attributes and the store indexes what the managers need, the
//! markup `id` attribute and the class list. Class membership follows
//! `classList` semantics: distinct entries, insertion order preserved,
//! adding a present class and removing an absent one are no-ops.

use crate::id::NodeId;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, Option<String>)>,
    classes: Vec<String>,
}

/// In-memory [`Document`](crate::Document) implementation.
///
/// Elements are issued dense [`NodeId`]s in insertion order, which doubles
/// as document order for attribute scans. Markup ids are indexed first-wins,
/// matching `querySelector` resolution on documents with duplicate ids.
///
/// # Example
///
/// ```
/// use dom_core::{Document, DomStore};
///
/// let mut dom = DomStore::new();
/// let menu = dom.insert_element("div", &[("id", Some("js-menu")), ("class", Some("-translate-x-full"))]);
///
/// assert_eq!(dom.element_by_id("js-menu"), Some(menu));
/// assert!(dom.has_class(menu, "-translate-x-full"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DomStore {
    elements: Vec<ElementData>,
    by_id: HashMap<String, NodeId>,
}

impl DomStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the store.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert an element and return its handle.
    ///
    /// The `id` attribute is indexed for [`element_by_id`](Self::element_by_id)
    /// (first insertion wins on duplicates). The `class` attribute is split on
    /// ASCII whitespace into the element's class list; later class mutations
    /// go through [`add_class`](Self::add_class) / [`remove_class`](Self::remove_class)
    /// and do not rewrite the attribute value.
    pub fn insert_element(&mut self, tag: &str, attributes: &[(&str, Option<&str>)]) -> NodeId {
        let node = NodeId::from_raw(self.elements.len() as u32);

        let mut classes = Vec::new();
        for (name, value) in attributes {
            match (*name, *value) {
                ("id", Some(id)) => {
                    self.by_id.entry(id.to_string()).or_insert(node);
                }
                ("class", Some(list)) => {
                    for class in list.split_ascii_whitespace() {
                        if !classes.iter().any(|c| c == class) {
                            classes.push(class.to_string());
                        }
                    }
                }
                _ => {}
            }
        }

        self.elements.push(ElementData {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            classes,
        });

        log::trace!(target: "dom", "insert <{tag}> as {node:?}");
        node
    }

    /// Tag name of the element, if the handle is valid.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.elements.get(node.index()).map(|e| e.tag.as_str())
    }

    /// Current class list of the element, in membership order.
    ///
    /// Returns an empty slice for a handle the store did not issue.
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.elements
            .get(node.index())
            .map_or(&[], |e| e.classes.as_slice())
    }

    /// Set or replace an attribute value on an element.
    ///
    /// Mirrors host-side attribute edits (e.g. rewriting a trigger's target
    /// list). The `id` index and the live class list are fixed at insertion
    /// and are not rebuilt by this method.
    ///
    /// Returns `false` for a handle the store did not issue.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: Option<&str>) -> bool {
        let Some(element) = self.elements.get_mut(node.index()) else {
            return false;
        };
        let owned = value.map(str::to_string);
        match element.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = owned,
            None => element.attributes.push((name.to_string(), owned)),
        }
        true
    }

    pub(crate) fn element_by_id_impl(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn attribute_impl(&self, node: NodeId, name: &str) -> Option<&str> {
        let element = self.elements.get(node.index())?;
        element
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub(crate) fn elements_with_attribute_impl(&self, name: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.iter().any(|(k, _)| k == name))
            .map(|(i, _)| NodeId::from_raw(i as u32))
            .collect()
    }

    pub(crate) fn has_class_impl(&self, node: NodeId, class: &str) -> bool {
        self.elements
            .get(node.index())
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    pub(crate) fn add_class_impl(&mut self, node: NodeId, class: &str) -> bool {
        let Some(element) = self.elements.get_mut(node.index()) else {
            return false;
        };
        if element.classes.iter().any(|c| c == class) {
            return false;
        }
        element.classes.push(class.to_string());
        true
    }

    pub(crate) fn remove_class_impl(&mut self, node: NodeId, class: &str) -> bool {
        let Some(element) = self.elements.get_mut(node.index()) else {
            return false;
        };
        let before = element.classes.len();
        element.classes.retain(|c| c != class);
        element.classes.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Document as _;

    fn store_with_menu() -> (DomStore, NodeId) {
        let mut dom = DomStore::new();
        let menu = dom.insert_element(
            "div",
            &[("id", Some("js-menu")), ("class", Some("-translate-x-full"))],
        );
        (dom, menu)
    }

    #[test]
    fn lookup_by_markup_id() {
        let (dom, menu) = store_with_menu();
        assert_eq!(dom.element_by_id("js-menu"), Some(menu));
        assert_eq!(dom.element_by_id("js-missing"), None);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_in_document_order() {
        let mut dom = DomStore::new();
        let first = dom.insert_element("div", &[("id", Some("dup"))]);
        let _second = dom.insert_element("div", &[("id", Some("dup"))]);
        assert_eq!(dom.element_by_id("dup"), Some(first));
    }

    #[test]
    fn class_attribute_is_split_and_deduplicated() {
        let mut dom = DomStore::new();
        let node = dom.insert_element("div", &[("class", Some("a  b a"))]);
        assert_eq!(dom.classes(node), ["a", "b"]);
    }

    #[test]
    fn add_class_is_idempotent() {
        let (mut dom, menu) = store_with_menu();
        assert!(dom.add_class(menu, "shadow-lg"));
        assert!(!dom.add_class(menu, "shadow-lg"));
        assert_eq!(dom.classes(menu), ["-translate-x-full", "shadow-lg"]);
    }

    #[test]
    fn remove_absent_class_is_a_no_op() {
        let (mut dom, menu) = store_with_menu();
        assert!(!dom.remove_class(menu, "shadow-lg"));
        assert!(dom.remove_class(menu, "-translate-x-full"));
        assert!(dom.classes(menu).is_empty());
    }

    #[test]
    fn valueless_attribute_reads_as_empty_string() {
        let mut dom = DomStore::new();
        let node = dom.insert_element("button", &[("data-menu-toggle", None)]);
        assert_eq!(dom.attribute(node, "data-menu-toggle"), Some(""));
        assert_eq!(dom.attribute(node, "data-menu-open"), None);
    }

    #[test]
    fn attribute_scan_preserves_document_order() {
        let mut dom = DomStore::new();
        let a = dom.insert_element("button", &[("data-menu-open", Some("x"))]);
        let _plain = dom.insert_element("div", &[]);
        let b = dom.insert_element("a", &[("data-menu-open", Some("y"))]);
        assert_eq!(dom.elements_with_attribute("data-menu-open"), [a, b]);
    }

    #[test]
    fn foreign_handle_is_inert() {
        let (mut dom, _) = store_with_menu();
        let bogus = NodeId::from_raw(99);
        assert!(!dom.has_class(bogus, "a"));
        assert!(!dom.add_class(bogus, "a"));
        assert!(!dom.remove_class(bogus, "a"));
        assert_eq!(dom.attribute(bogus, "id"), None);
        assert!(dom.classes(bogus).is_empty());
    }
}
