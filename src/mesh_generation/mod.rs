//! Build graphs from in-memory tetrahedral meshes.
//!
//! Every point becomes a node (in input order, so point `i` is `NodeId(i)`),
//! and every tetrahedron contributes the six edges between its four vertices.
//! Edges shared between neighbouring tetrahedra are inserted once.

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::geometry::point::Point;
use crate::mesh_error::MeshFilterError;
use crate::topology::graph::Graph;
use crate::topology::node::NodeId;

/// Four point indices describing one tetrahedron.
pub type Tetrahedron = [usize; 4];

fn check_tetrahedron(
    tet_idx: usize,
    tet: &Tetrahedron,
    num_points: usize,
) -> Result<(), MeshFilterError> {
    for &index in tet {
        if index >= num_points {
            return Err(MeshFilterError::InvalidTetrahedron {
                tet: tet_idx,
                index,
                num_points,
            });
        }
    }
    if let Some(index) = tet.iter().duplicates().next() {
        return Err(MeshFilterError::DegenerateTetrahedron {
            tet: tet_idx,
            index: *index,
        });
    }
    Ok(())
}

/// Graph whose nodes are `points` and whose edges are the tetrahedron edges.
///
/// Node values are filled with `V::default()`.
///
/// # Errors
/// `InvalidTetrahedron` for an out-of-range point index and
/// `DegenerateTetrahedron` for a repeated vertex. All tetrahedra are validated
/// before the graph is built, so no partial graph is ever returned.
pub fn graph_from_tetrahedra<V: Default>(
    points: &[Point],
    tets: &[Tetrahedron],
) -> Result<Graph<V>, MeshFilterError> {
    graph_from_tetrahedra_with(points, tets, |_, _| V::default())
}

/// Like [`graph_from_tetrahedra`], computing each node value from its point.
pub fn graph_from_tetrahedra_with<V, F>(
    points: &[Point],
    tets: &[Tetrahedron],
    mut value: F,
) -> Result<Graph<V>, MeshFilterError>
where
    F: FnMut(usize, Point) -> V,
{
    for (i, tet) in tets.iter().enumerate() {
        check_tetrahedron(i, tet, points.len())?;
    }

    let mut graph = Graph::with_capacity(points.len(), tets.len() * 6);
    let nodes: Vec<NodeId> = points
        .iter()
        .enumerate()
        .map(|(i, &p)| graph.add_node(p, value(i, p)))
        .collect();

    for tet in tets {
        for (&a, &b) in tet.iter().tuple_combinations() {
            graph.add_edge(nodes[a], nodes[b])?;
        }
    }

    log::debug!(
        "built graph from {} points and {} tetrahedra: {} nodes, {} edges",
        points.len(),
        tets.len(),
        graph.num_nodes(),
        graph.num_edges()
    );
    crate::debug_invariants!(graph.validate_invariants(), "graph_from_tetrahedra");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tet_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn single_tet_has_six_edges() {
        let pts = unit_tet_points();
        let g: Graph = graph_from_tetrahedra(&pts[..4], &[[0, 1, 2, 3]]).unwrap();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 6);
        g.validate_invariants().unwrap();
    }

    #[test]
    fn shared_face_edges_are_not_duplicated() {
        let pts = unit_tet_points();
        let g: Graph = graph_from_tetrahedra(&pts, &[[0, 1, 2, 3], [1, 2, 3, 4]]).unwrap();
        // 6 + 6 edges, 3 shared along face (1, 2, 3).
        assert_eq!(g.num_edges(), 9);
        assert!(!g.has_edge(NodeId::new(0), NodeId::new(4)));
    }

    #[test]
    fn values_from_points() {
        let pts = unit_tet_points();
        let g = graph_from_tetrahedra_with(&pts, &[], |i, p| (i, p.x)).unwrap();
        assert_eq!(g.num_edges(), 0);
        assert_eq!(*g.node(NodeId::new(4)).unwrap().value(), (4, 1.0));
    }

    #[test]
    fn bad_tetrahedra_are_rejected() {
        let pts = unit_tet_points();
        let err = graph_from_tetrahedra::<()>(&pts, &[[0, 1, 2, 3], [0, 1, 2, 9]]).unwrap_err();
        assert_eq!(
            err,
            MeshFilterError::InvalidTetrahedron {
                tet: 1,
                index: 9,
                num_points: 5
            }
        );
        let err = graph_from_tetrahedra::<()>(&pts, &[[0, 1, 1, 3]]).unwrap_err();
        assert_eq!(err, MeshFilterError::DegenerateTetrahedron { tet: 0, index: 1 });
    }
}
