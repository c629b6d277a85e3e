//! `NodeId` and `EdgeId`: strong, zero-cost handles for graph entities
//!
//! Every node and edge of a [`Graph`](crate::topology::graph::Graph) is named by
//! a dense index assigned in insertion order. Wrapping the index in a newtype
//! keeps node and edge handles from being mixed up with each other or with
//! plain counters.

use std::fmt;

use crate::mesh_error::MeshFilterError;

/// Handle to a graph node; the wrapped value is the node's insertion index.
///
/// # Memory layout
/// This type is `repr(transparent)` over `u32`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from a raw index.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_filter::topology::node::NodeId;
    /// let n = NodeId::new(3);
    /// assert_eq!(n.index(), 3);
    /// ```
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Raw index of this node.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Index as `usize`, for addressing per-node storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Handle for a storage index, rejecting indices past `u32::MAX`.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, MeshFilterError> {
        u32::try_from(index)
            .map(NodeId)
            .map_err(|_| MeshFilterError::CapacityExceeded { what: "node", index })
    }
}

/// Handle to an undirected graph edge; the wrapped value is its insertion index.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        EdgeId(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Handle for a storage index, rejecting indices past `u32::MAX`.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, MeshFilterError> {
        u32::try_from(index)
            .map(EdgeId)
            .map_err(|_| MeshFilterError::CapacityExceeded { what: "edge", index })
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.get()).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeId").field(&self.get()).finish()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, u32);
    assert_eq_size!(EdgeId, u32);
    assert_eq_align!(NodeId, u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_index() {
        let n = NodeId::new(42);
        assert_eq!(n.get(), 42);
        assert_eq!(n.index(), 42usize);
        assert_eq!(EdgeId::new(5).index(), 5usize);
    }

    #[test]
    fn from_index_accepts_u32_range() {
        assert_eq!(NodeId::from_index(0).unwrap(), NodeId::new(0));
        assert_eq!(
            EdgeId::from_index(u32::MAX as usize).unwrap(),
            EdgeId::new(u32::MAX)
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn from_index_rejects_overflow() {
        let too_big = u32::MAX as usize + 1;
        assert_eq!(
            NodeId::from_index(too_big),
            Err(MeshFilterError::CapacityExceeded {
                what: "node",
                index: too_big
            })
        );
        assert!(EdgeId::from_index(too_big).is_err());
    }

    #[test]
    fn debug_and_display() {
        assert_eq!(format!("{:?}", NodeId::new(7)), "NodeId(7)");
        assert_eq!(format!("{}", NodeId::new(7)), "7");
        assert_eq!(format!("{:?}", EdgeId::new(1)), "EdgeId(1)");
    }

    #[test]
    fn ordering_and_hash() {
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        assert!(a < b);
        let mut set = std::collections::HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(a);
        assert_eq!(set.len(), 2);
    }
}
