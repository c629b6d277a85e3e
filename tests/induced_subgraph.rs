// End-to-end: tetrahedral mesh -> graph -> filtered nodes -> induced subgraph view.
use mesh_filter::prelude::*;

/// A 2x1x1 block of two unit cubes, each split into 6 tetrahedra, shifted so
/// that the first cube sits at negative x.
fn two_cube_mesh() -> (Vec<Point>, Vec<Tetrahedron>) {
    let mut points = Vec::new();
    for k in 0..2 {
        for j in 0..2 {
            for i in 0..3 {
                points.push(Point::new(i as f64 - 1.0, j as f64, k as f64));
            }
        }
    }
    let idx = |i: usize, j: usize, k: usize| i + 3 * (j + 2 * k);
    let mut tets = Vec::new();
    for c in 0..2 {
        let v = [
            idx(c, 0, 0),
            idx(c + 1, 0, 0),
            idx(c + 1, 1, 0),
            idx(c, 1, 0),
            idx(c, 0, 1),
            idx(c + 1, 0, 1),
            idx(c + 1, 1, 1),
            idx(c, 1, 1),
        ];
        // Kuhn subdivision around the 0-6 diagonal.
        for path in [[1, 2], [2, 3], [3, 7], [7, 4], [4, 5], [5, 1]] {
            tets.push([v[0], v[path[0]], v[path[1]], v[6]]);
        }
    }
    (points, tets)
}

#[test]
fn mesh_graph_counts() {
    let (points, tets) = two_cube_mesh();
    let graph: Graph = graph_from_tetrahedra(&points, &tets).unwrap();
    assert_eq!(graph.num_nodes(), 12);
    // Per cube: 12 cube edges + 6 face diagonals + 1 body diagonal = 19,
    // minus the 5 edges shared on the common face (4 sides + 1 diagonal).
    assert_eq!(graph.num_edges(), 19 * 2 - 5);
    graph.validate_invariants().unwrap();
}

#[test]
fn slice_predicate_draws_induced_subgraph() {
    let (points, tets) = two_cube_mesh();
    let graph: Graph = graph_from_tetrahedra(&points, &tets).unwrap();

    let first = make_filtered(graph.node_begin(), graph.node_end(), NegativeX);
    let last = make_filtered(graph.node_end(), graph.node_end(), NegativeX);

    let mut view = SubgraphView::new();
    let mut node_map = view.empty_node_map(&graph);
    let added = view.add_nodes(first, last, &mut node_map).unwrap();
    view.add_edges(graph.edge_begin(), graph.edge_end(), &node_map);

    // Only the x = -1 face of the first cube survives.
    assert_eq!(added, 4);
    assert!(view.node_positions().iter().all(|p| p.x < 0.0));
    // A square face split by one diagonal: 4 sides + 1 diagonal.
    assert_eq!(view.num_edges(), 5);
    for &(a, b) in view.edge_slots() {
        assert!(a < view.num_nodes() && b < view.num_nodes());
    }

    let center = view.center_view().unwrap();
    assert_eq!(center.center, Point::new(-1.0, 0.5, 0.5));
}

#[test]
fn distance_predicate_on_nodes_matches_iterator_filter() {
    let (points, tets) = two_cube_mesh();
    let graph: Graph = graph_from_tetrahedra(&points, &tets).unwrap();
    let near = WithinDistance::new(Point::new(0.1, 0.1, 0.1), 1.1);

    let via_filter: Vec<NodeId> = filtered(graph.node_begin(), graph.node_end(), near)
        .map(|n| n.id())
        .collect();
    let via_iter: Vec<NodeId> = graph
        .nodes()
        .filter(|n| (n.position() - near.center).norm() < near.radius)
        .map(|n| n.id())
        .collect();
    assert_eq!(via_filter, via_iter);
    assert!(!via_filter.is_empty());
}

#[test]
fn filtered_edges_are_also_cursors() {
    let (points, tets) = two_cube_mesh();
    let graph: Graph = graph_from_tetrahedra(&points, &tets).unwrap();

    let mut view = SubgraphView::new();
    let mut node_map = view.empty_node_map(&graph);
    view.add_nodes(graph.node_begin(), graph.node_end(), &mut node_map)
        .unwrap();

    let long = |e: &Edge<'_, ()>| e.length() > 1.5;
    let (first, last) = filtered_bounds(graph.edge_begin(), graph.edge_end(), long);
    let added = view.add_edges(first, last, &node_map);
    // Body diagonals have length sqrt(3); one per cube.
    assert_eq!(added, 2);
}

#[test]
fn single_evaluation_over_graph_nodes() {
    let (points, tets) = two_cube_mesh();
    let graph: Graph = graph_from_tetrahedra(&points, &tets).unwrap();
    let (pred, calls) = Counting::new(NegativeX);
    let kept = filtered(graph.node_begin(), graph.node_end(), pred).count();
    assert_eq!(kept, 4);
    assert_eq!(calls.get(), graph.num_nodes());
}
