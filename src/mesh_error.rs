//! MeshFilterError: Unified error type for mesh-filter public APIs
//!
//! Contract violations on a filter cursor (dereferencing or advancing an
//! exhausted sequence) panic at the point of misuse. Everything else that can
//! fail in the collaborating types (graph construction, operator products)
//! reports through this enum.

use thiserror::Error;

use crate::topology::node::NodeId;

/// Unified error type for mesh-filter operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshFilterError {
    /// A cursor was dereferenced at its sentinel position.
    #[error("cursor is exhausted: no element at the end position")]
    ExhaustedCursor,
    /// A node id does not belong to the graph (or node map) it was used with.
    #[error("unknown node {node} (graph has {num_nodes} nodes)")]
    UnknownNode { node: NodeId, num_nodes: usize },
    /// An edge from a node to itself was requested.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),
    /// A tetrahedron references a point index that does not exist.
    #[error("tetrahedron {tet} references point {index}, but only {num_points} points exist")]
    InvalidTetrahedron {
        tet: usize,
        index: usize,
        num_points: usize,
    },
    /// A tetrahedron repeats one of its vertices.
    #[error("tetrahedron {tet} is degenerate: vertex {index} appears more than once")]
    DegenerateTetrahedron { tet: usize, index: usize },
    /// Operand lengths do not match the operator shape.
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// More entities than a `u32` handle can address.
    #[error("{what} capacity exceeded: index {index} does not fit a u32 handle")]
    CapacityExceeded { what: &'static str, index: usize },
    /// An internal consistency check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
