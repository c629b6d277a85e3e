//! Graph topology: node/edge handles and the in-memory graph.
//!
//! - [`node`]: `NodeId` and `EdgeId` handles
//! - [`graph`]: `Graph<V>` with node and edge cursors

pub mod graph;
pub mod node;

pub use graph::{Edge, EdgeCursor, Graph, Node, NodeCursor};
pub use node::{EdgeId, NodeId};
