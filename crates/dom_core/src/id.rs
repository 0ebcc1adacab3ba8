//! Generic, UI-agnostic identifier for document elements.
//!
//! This type intentionally wraps a plain `u32` to avoid coupling to any DOM
//! or framework-specific identifier type. Integration layers can provide
//! `From` implementations to convert from their native ID types.

/// Opaque identifier for an element within a [`Document`](crate::Document).
///
/// This is a lightweight, copyable handle. The wrapped value has no
/// semantic meaning outside the document that issued it. It is not the
/// markup `id` attribute; that is resolved through
/// [`Document::element_by_id`](crate::Document::element_by_id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a `NodeId` from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let raw = 42u32;
        let id = NodeId::from_raw(raw);
        assert_eq!(id.as_raw(), raw);
    }

    #[test]
    fn node_id_equality() {
        let id1 = NodeId::from_raw(1);
        let id2 = NodeId::from_raw(1);
        let id3 = NodeId::from_raw(2);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn node_id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeId::from_raw(1));
        set.insert(NodeId::from_raw(2));
        set.insert(NodeId::from_raw(1)); // duplicate

        assert_eq!(set.len(), 2);
    }
}
