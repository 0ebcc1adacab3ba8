//! Document trait defining the capability the behavior managers consume.
//!
//! This trait provides a UI-agnostic abstraction over element lookup and
//! class mutation, allowing different implementations to be swapped in for
//! testing or alternative hosts.
//!
//! # Design Principles
//!
//! - Uses `NodeId` as the identifier type, keeping the trait host-agnostic
//! - Lookup failure is explicit: `element_by_id` returns `Option` so a
//!   caller's "skip missing targets" policy lives at the call site, not in
//!   the document layer
//! - Mutation methods report whether anything changed, which keeps
//!   idempotence observable in tests

use crate::id::NodeId;
use crate::store::DomStore;

/// The minimal document capability the managers need.
///
/// This trait captures the operations used by the menu and sticky
/// controllers:
/// - Resolving a markup `id` to an element handle
/// - Reading attributes (the `data-menu-*` trigger contract)
/// - Scanning for elements carrying a given attribute (trigger binding)
/// - Class membership queries and mutation
pub trait Document {
    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolve a markup `id` attribute value to an element handle.
    ///
    /// Returns `None` when no element carries that id. On documents with
    /// duplicate ids, the first element in document order wins.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Read an attribute value. Present-but-valueless attributes read as
    /// `Some("")`; absent attributes as `None`. Names are case-sensitive.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// All elements carrying the given attribute, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId>;

    // =========================================================================
    // Class list
    // =========================================================================

    /// Returns `true` if the element's class list contains `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add a class to the element.
    ///
    /// Returns `true` if the class was newly added, `false` if it was
    /// already present (or the handle is unknown).
    fn add_class(&mut self, node: NodeId, class: &str) -> bool;

    /// Remove a class from the element.
    ///
    /// Returns `true` if the class was present and removed.
    fn remove_class(&mut self, node: NodeId, class: &str) -> bool;
}

// =============================================================================
// Implementation for DomStore
// =============================================================================

impl Document for DomStore {
    #[inline]
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.element_by_id_impl(id)
    }

    #[inline]
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attribute_impl(node, name)
    }

    #[inline]
    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.elements_with_attribute_impl(name)
    }

    #[inline]
    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.has_class_impl(node, class)
    }

    #[inline]
    fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        self.add_class_impl(node, class)
    }

    #[inline]
    fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        self.remove_class_impl(node, class)
    }
}
