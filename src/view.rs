//! Headless subgraph view: the drawable set a viewer would render.
//!
//! [`SubgraphView`] consumes node and edge ranges given as `[first, last)`
//! cursor pairs, exactly like a renderer that walks a graph to build vertex
//! and line buffers. Because [`FilterSequence`](crate::algs::filter::FilterSequence)
//! is a cursor, a filtered node range can be passed in directly; edges are
//! then kept only when both endpoints made it into the [`NodeMap`], which
//! yields the induced subgraph.

use crate::algs::cursor::Cursor;
use crate::geometry::point::Point;
use crate::mesh_error::MeshFilterError;
use crate::topology::graph::{Edge, Graph, Node};
use crate::topology::node::NodeId;

/// Mapping from graph nodes to view slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeMap {
    slots: Vec<Option<usize>>,
}

impl NodeMap {
    /// View slot of `n`, if it has been added.
    #[inline]
    pub fn get(&self, n: NodeId) -> Option<usize> {
        self.slots.get(n.index()).copied().flatten()
    }

    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        self.get(n).is_some()
    }

    /// Number of mapped nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of graph nodes this map can address.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Center and bounding radius of the drawn nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewCenter {
    pub center: Point,
    pub radius: f64,
}

/// Serializable copy of a view's contents.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewSnapshot {
    pub nodes: Vec<Point>,
    pub edges: Vec<(usize, usize)>,
}

/// Collected nodes and edges ready for drawing.
#[derive(Clone, Debug, Default)]
pub struct SubgraphView {
    nodes: Vec<Point>,
    edges: Vec<(usize, usize)>,
}

impl SubgraphView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map able to address every node of `graph`, with nothing mapped yet.
    pub fn empty_node_map<V>(&self, graph: &Graph<V>) -> NodeMap {
        NodeMap {
            slots: vec![None; graph.num_nodes()],
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add every node in `[first, last)` and record its slot in `node_map`.
    ///
    /// Nodes already in the map are skipped. Returns how many were added.
    ///
    /// # Errors
    /// `UnknownNode` if a node does not fit `node_map` (the map was built for a
    /// smaller graph). Nodes visited before the failure stay added.
    pub fn add_nodes<'g, V: 'g, C>(
        &mut self,
        mut first: C,
        last: C,
        node_map: &mut NodeMap,
    ) -> Result<usize, MeshFilterError>
    where
        C: Cursor<Item = Node<'g, V>>,
    {
        let mut added = 0;
        while first != last {
            let node = first.get();
            let capacity = node_map.capacity();
            let slot = node_map
                .slots
                .get_mut(node.index())
                .ok_or(MeshFilterError::UnknownNode {
                    node: node.id(),
                    num_nodes: capacity,
                })?;
            if slot.is_none() {
                *slot = Some(self.nodes.len());
                self.nodes.push(node.position());
                added += 1;
            }
            first.advance();
        }
        log::trace!("SubgraphView: added {added} nodes");
        Ok(added)
    }

    /// Add the edges of `[first, last)` whose endpoints are both mapped.
    ///
    /// Returns how many edges were added.
    pub fn add_edges<'g, V: 'g, C>(&mut self, mut first: C, last: C, node_map: &NodeMap) -> usize
    where
        C: Cursor<Item = Edge<'g, V>>,
    {
        let mut added = 0;
        while first != last {
            let edge = first.get();
            let a = node_map.get(edge.node1().id());
            let b = node_map.get(edge.node2().id());
            if let (Some(a), Some(b)) = (a, b) {
                self.edges.push((a, b));
                added += 1;
            }
            first.advance();
        }
        log::trace!("SubgraphView: added {added} edges");
        added
    }

    /// Centroid of the drawn nodes and the largest distance from it.
    ///
    /// `None` when the view is empty.
    pub fn center_view(&self) -> Option<ViewCenter> {
        if self.nodes.is_empty() {
            return None;
        }
        let sum = self.nodes.iter().fold(Point::origin(), |acc, &p| acc + p);
        let center = sum / self.nodes.len() as f64;
        let radius = self
            .nodes
            .iter()
            .map(|&p| p.distance(center))
            .fold(0.0_f64, f64::max);
        Some(ViewCenter { center, radius })
    }

    /// Node positions in slot order.
    pub fn node_positions(&self) -> &[Point] {
        &self.nodes
    }

    /// Edges as pairs of view slots.
    pub fn edge_slots(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
