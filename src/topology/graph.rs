//! In-memory undirected graph with positioned nodes.
//!
//! `Graph<V>` stores one [`Point`] and one value of type `V` per node and a
//! deduplicated list of undirected edges. Nodes and edges are addressed by
//! dense [`NodeId`]/[`EdgeId`] handles assigned in insertion order, and both
//! can be walked with forward [`Cursor`]s (`node_begin`/`node_end`,
//! `edge_begin`/`edge_end`), which is what filters and the subgraph view
//! consume.
//!
//! Edge insertion is amortized O(1): a hash index keyed on the normalized
//! endpoint pair makes repeated insertions of the same edge return the
//! existing handle.

use std::fmt;

use hashbrown::HashMap;

use crate::algs::cursor::{Cursor, CursorRange};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::point::{Point, Positioned};
use crate::mesh_error::MeshFilterError;
use crate::topology::node::{EdgeId, NodeId};

/// Undirected graph with per-node positions and values.
#[derive(Clone, Debug)]
pub struct Graph<V = ()> {
    positions: Vec<Point>,
    values: Vec<V>,
    /// `adjacency[n]` lists `(neighbor, edge)` pairs in insertion order.
    adjacency: Vec<Vec<(NodeId, EdgeId)>>,
    /// Edge endpoints, normalized so that `.0 < .1`.
    edges: Vec<(NodeId, NodeId)>,
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            values: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }
}

#[inline]
fn normalized(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b { (a, b) } else { (b, a) }
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            positions: Vec::with_capacity(nodes),
            values: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            edge_index: HashMap::with_capacity(edges),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add a node at `position` carrying `value`; returns its new handle.
    ///
    /// # Panics
    /// If the graph already holds `u32::MAX + 1` nodes.
    pub fn add_node(&mut self, position: Point, value: V) -> NodeId {
        let id = NodeId::from_index(self.positions.len())
            .expect("graph node capacity exceeded (ids are u32)");
        self.positions.push(position);
        self.values.push(value);
        self.adjacency.push(Vec::new());
        id
    }

    #[inline]
    pub fn has_node(&self, n: NodeId) -> bool {
        n.index() < self.num_nodes()
    }

    fn check_node(&self, n: NodeId) -> Result<(), MeshFilterError> {
        if self.has_node(n) {
            Ok(())
        } else {
            Err(MeshFilterError::UnknownNode {
                node: n,
                num_nodes: self.num_nodes(),
            })
        }
    }

    /// Add the undirected edge `{a, b}`.
    ///
    /// Returns the existing handle if the edge is already present (in either
    /// orientation).
    ///
    /// # Errors
    /// `UnknownNode` if either endpoint is not in this graph, `SelfLoop` if
    /// `a == b`, `CapacityExceeded` once edge ids no longer fit a `u32`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, MeshFilterError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(MeshFilterError::SelfLoop(a));
        }
        let key = normalized(a, b);
        if let Some(&e) = self.edge_index.get(&key) {
            return Ok(e);
        }
        let e = EdgeId::from_index(self.edges.len())?;
        self.edges.push(key);
        self.edge_index.insert(key, e);
        self.adjacency[a.index()].push((b, e));
        self.adjacency[b.index()].push((a, e));
        Ok(e)
    }

    /// `true` if `{a, b}` is an edge. Unknown nodes are simply not connected.
    #[inline]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.find_edge(a, b).is_some()
    }

    /// Handle of the edge `{a, b}`, if present.
    #[inline]
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&normalized(a, b)).copied()
    }

    /// View of node `n`.
    pub fn node(&self, n: NodeId) -> Result<Node<'_, V>, MeshFilterError> {
        self.check_node(n)?;
        Ok(Node { graph: self, id: n })
    }

    /// View of edge `e`, or `None` if out of range.
    pub fn edge(&self, e: EdgeId) -> Option<Edge<'_, V>> {
        (e.index() < self.num_edges()).then_some(Edge { graph: self, id: e })
    }

    /// Mutable access to the value stored on node `n`.
    pub fn value_mut(&mut self, n: NodeId) -> Result<&mut V, MeshFilterError> {
        self.check_node(n)?;
        Ok(&mut self.values[n.index()])
    }

    /// Neighbors of `n` in edge-insertion order.
    pub fn neighbors(
        &self,
        n: NodeId,
    ) -> Result<impl Iterator<Item = NodeId> + '_, MeshFilterError> {
        self.check_node(n)?;
        Ok(self.adjacency[n.index()].iter().map(|&(m, _)| m))
    }

    /// Cursor at the first node.
    #[inline]
    pub fn node_begin(&self) -> NodeCursor<'_, V> {
        NodeCursor {
            graph: self,
            index: 0,
        }
    }

    /// Sentinel cursor one past the last node.
    #[inline]
    pub fn node_end(&self) -> NodeCursor<'_, V> {
        NodeCursor {
            graph: self,
            index: self.num_nodes(),
        }
    }

    /// Cursor at the first edge.
    #[inline]
    pub fn edge_begin(&self) -> EdgeCursor<'_, V> {
        EdgeCursor {
            graph: self,
            index: 0,
        }
    }

    /// Sentinel cursor one past the last edge.
    #[inline]
    pub fn edge_end(&self) -> EdgeCursor<'_, V> {
        EdgeCursor {
            graph: self,
            index: self.num_edges(),
        }
    }

    /// All nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> CursorRange<NodeCursor<'_, V>> {
        CursorRange::new(self.node_begin(), self.node_end())
    }

    /// All edges in insertion order.
    #[inline]
    pub fn edges(&self) -> CursorRange<EdgeCursor<'_, V>> {
        CursorRange::new(self.edge_begin(), self.edge_end())
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.values.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.edge_index.clear();
    }
}

impl<V> DebugInvariants for Graph<V> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Graph");
    }

    fn validate_invariants(&self) -> Result<(), MeshFilterError> {
        let n = self.num_nodes();
        if self.values.len() != n || self.adjacency.len() != n {
            return Err(MeshFilterError::InvariantViolation(format!(
                "per-node storage out of sync: {} positions, {} values, {} adjacency lists",
                n,
                self.values.len(),
                self.adjacency.len()
            )));
        }
        if self.edge_index.len() != self.edges.len() {
            return Err(MeshFilterError::InvariantViolation(format!(
                "edge index has {} entries for {} edges",
                self.edge_index.len(),
                self.edges.len()
            )));
        }
        for (i, &(a, b)) in self.edges.iter().enumerate() {
            let e = EdgeId::from_index(i)?;
            self.check_node(a)?;
            self.check_node(b)?;
            if a >= b {
                return Err(MeshFilterError::InvariantViolation(format!(
                    "edge {e} endpoints ({a}, {b}) are not normalized"
                )));
            }
            if self.edge_index.get(&(a, b)) != Some(&e) {
                return Err(MeshFilterError::InvariantViolation(format!(
                    "edge {e} is missing from the edge index"
                )));
            }
            let forward = self.adjacency[a.index()].contains(&(b, e));
            let backward = self.adjacency[b.index()].contains(&(a, e));
            if !(forward && backward) {
                return Err(MeshFilterError::InvariantViolation(format!(
                    "edge {e} is not recorded symmetrically in adjacency"
                )));
            }
        }
        let degree_sum: usize = self.adjacency.iter().map(Vec::len).sum();
        if degree_sum != 2 * self.edges.len() {
            return Err(MeshFilterError::InvariantViolation(format!(
                "degree sum {degree_sum} != 2 * {} edges",
                self.edges.len()
            )));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Node and edge views
// -----------------------------------------------------------------------------

/// Lightweight view of one node: a graph reference plus a handle.
pub struct Node<'g, V> {
    graph: &'g Graph<V>,
    id: NodeId,
}

impl<'g, V> Node<'g, V> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.id.index()
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.graph.positions[self.id.index()]
    }

    #[inline]
    pub fn value(&self) -> &'g V {
        &self.graph.values[self.id.index()]
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.graph.adjacency[self.id.index()].len()
    }

    /// The graph this node belongs to.
    #[inline]
    pub fn graph(&self) -> &'g Graph<V> {
        self.graph
    }
}

impl<V> Clone for Node<'_, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Node<'_, V> {}

/// Nodes are equal when they are the same node of the same graph.
impl<V> PartialEq for Node<'_, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<V> Eq for Node<'_, V> {}

impl<V> fmt::Debug for Node<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("position", &self.position())
            .finish()
    }
}

impl<V> Positioned for Node<'_, V> {
    #[inline]
    fn position(&self) -> Point {
        Node::position(self)
    }
}

/// Lightweight view of one undirected edge.
pub struct Edge<'g, V> {
    graph: &'g Graph<V>,
    id: EdgeId,
}

impl<'g, V> Edge<'g, V> {
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoint with the smaller id.
    #[inline]
    pub fn node1(&self) -> Node<'g, V> {
        Node {
            graph: self.graph,
            id: self.graph.edges[self.id.index()].0,
        }
    }

    /// Endpoint with the larger id.
    #[inline]
    pub fn node2(&self) -> Node<'g, V> {
        Node {
            graph: self.graph,
            id: self.graph.edges[self.id.index()].1,
        }
    }

    /// Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.node1().position().distance(self.node2().position())
    }
}

impl<V> Clone for Edge<'_, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Edge<'_, V> {}

impl<V> PartialEq for Edge<'_, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<V> Eq for Edge<'_, V> {}

impl<V> fmt::Debug for Edge<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.graph.edges[self.id.index()];
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("nodes", &(a, b))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Cursors
// -----------------------------------------------------------------------------

/// Forward cursor over the nodes of a graph, in insertion order.
pub struct NodeCursor<'g, V> {
    graph: &'g Graph<V>,
    index: usize,
}

/// Forward cursor over the edges of a graph, in insertion order.
pub struct EdgeCursor<'g, V> {
    graph: &'g Graph<V>,
    index: usize,
}

macro_rules! impl_graph_cursor {
    ($cursor:ident, $item:ident, $id:ident, $len:ident, $what:literal) => {
        impl<V> Clone for $cursor<'_, V> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<V> Copy for $cursor<'_, V> {}

        impl<V> PartialEq for $cursor<'_, V> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.graph, other.graph) && self.index == other.index
            }
        }

        impl<V> Eq for $cursor<'_, V> {}

        impl<V> fmt::Debug for $cursor<'_, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("index", &self.index)
                    .field("len", &self.graph.$len())
                    .finish()
            }
        }

        impl<'g, V> Cursor for $cursor<'g, V> {
            type Item = $item<'g, V>;

            #[inline]
            fn get(&self) -> $item<'g, V> {
                assert!(
                    self.index < self.graph.$len(),
                    concat!(stringify!($cursor), "::get at the end of the ", $what, " range")
                );
                // In range, so the id was issued by the graph and fits.
                let id = $id::from_index(self.index)
                    .expect(concat!($what, " index below len always fits a u32"));
                $item {
                    graph: self.graph,
                    id,
                }
            }

            #[inline]
            fn advance(&mut self) {
                assert!(
                    self.index < self.graph.$len(),
                    concat!(stringify!($cursor), "::advance past the end of the ", $what, " range")
                );
                self.index += 1;
            }
        }
    };
}

impl_graph_cursor!(NodeCursor, Node, NodeId, num_nodes, "node");
impl_graph_cursor!(EdgeCursor, Edge, EdgeId, num_edges, "edge");
