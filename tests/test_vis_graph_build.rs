mod test_vis_graph_build {
    use polyvis::core::math::Vector2;
    use polyvis::polygon::Polygon;
    use polyvis::ring;
    use polyvis::visibility::VisibilityGraph;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    fn square_with_hole() -> Polygon<f64> {
        Polygon::new(
            ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            vec![ring![(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)]],
        )
    }

    #[test]
    fn convex_polygon_is_complete() {
        let polygon = Polygon::new(
            ring![(0.0, 0.0), (2.0, 0.0), (3.0, 1.5), (1.0, 3.0), (-1.0, 1.5)],
            Vec::new(),
        );
        let graph = VisibilityGraph::new(polygon);

        assert_eq!(graph.vertex_count(), 5);
        // complete graph on 5 vertexes
        assert_eq!(graph.edge_count(), 10);
        let vertexes: Vec<_> = graph.vertexes().to_vec();
        for (i, &p0) in vertexes.iter().enumerate() {
            for &p1 in vertexes.iter().skip(i + 1) {
                assert!(graph.contains_edge(p0, p1));
            }
        }
    }

    #[test]
    fn boundary_edges_always_present() {
        let polygon = square_with_hole();
        let graph = VisibilityGraph::new(polygon);

        for ring in graph.polygon().rings() {
            let n = ring.vertex_count();
            for i in 0..n {
                let (p0, p1) = ring.segment_at(i);
                assert!(
                    graph.contains_edge(p0, p1),
                    "missing boundary edge {:?} -> {:?}",
                    p0,
                    p1
                );
            }
        }
    }

    #[test]
    fn opposite_corners_not_connected_through_hole() {
        let graph = VisibilityGraph::new(square_with_hole());

        assert!(!graph.is_visible(v(0.0, 0.0), v(1.0, 1.0)));
        assert!(!graph.contains_edge(v(0.0, 0.0), v(1.0, 1.0)));
        assert!(!graph.is_visible(v(1.0, 0.0), v(0.0, 1.0)));
        assert!(!graph.contains_edge(v(1.0, 0.0), v(0.0, 1.0)));

        // adjacent shell corners stay visible
        assert!(graph.is_visible(v(0.0, 0.0), v(1.0, 0.0)));
        assert!(graph.contains_edge(v(0.0, 0.0), v(1.0, 0.0)));
    }

    #[test]
    fn shell_corner_sees_near_hole_corners() {
        let graph = VisibilityGraph::new(square_with_hole());

        // (0, 0) sees the three near hole corners but not the far one
        assert!(graph.contains_edge(v(0.0, 0.0), v(0.4, 0.4)));
        assert!(graph.contains_edge(v(0.0, 0.0), v(0.6, 0.4)));
        assert!(graph.contains_edge(v(0.0, 0.0), v(0.4, 0.6)));
        assert!(!graph.contains_edge(v(0.0, 0.0), v(0.6, 0.6)));
    }

    #[test]
    fn simple_graph_invariant() {
        let graph = VisibilityGraph::new(square_with_hole());
        let edges: Vec<_> = graph.iter_edges().collect();

        assert_eq!(edges.len(), graph.edge_count());
        for (i, e1) in edges.iter().enumerate() {
            assert!(!e1.source.fuzzy_eq(e1.target), "self loop found: {:?}", e1);
            for e2 in edges.iter().skip(i + 1) {
                assert!(
                    !e1.fuzzy_eq_unordered_eps(*e2, 1e-8),
                    "duplicate edge found: {:?}",
                    e1
                );
            }
        }
    }

    #[test]
    fn edge_projections_partition_by_endpoint_kind() {
        let graph = VisibilityGraph::new(square_with_hole());

        let total = graph.iter_edges().count();
        let boundary = graph.boundary_edges().count();
        let shell = graph.shell_edges().count();
        let hole = graph.hole_edges().count();

        // no foreign points inserted yet
        assert_eq!(graph.foreign_vertexes().count(), 0);
        assert_eq!(graph.foreign_edges().count(), 0);
        assert_eq!(boundary, total);

        // shell ring edges + both diagonals are blocked by the hole, so the shell-only edge
        // count is the 4 ring edges
        assert_eq!(shell, 4);
        // hole ring edges plus any hole-corner to hole-corner visibility edges; the hole is
        // convex so only its 4 ring edges connect its corners
        assert_eq!(hole, 4);
        // every shell corner sees 3 of the 4 hole corners
        assert_eq!(total, shell + hole + 12);
    }

    #[test]
    fn visible_points_by_point_from_interior() {
        let polygon = Polygon::new(
            ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            Vec::new(),
        );
        let graph = VisibilityGraph::new(polygon);

        let visible = graph.visible_points_by_point(v(0.5, 0.5));
        assert_eq!(visible.len(), 4);

        // a vertex queried against the graph sees the other vertexes but not itself
        let visible = graph.visible_points_by_point(v(0.0, 0.0));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn visible_points_by_point_from_exterior() {
        let graph = VisibilityGraph::new(square_with_hole());
        assert!(graph.visible_points_by_point(v(2.0, 0.5)).is_empty());
    }

    #[test]
    fn graph_vertexes_order_boundary_first() {
        let graph = VisibilityGraph::new(square_with_hole());
        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.boundary_vertex_count(), 8);
        assert_eq!(graph.vertexes()[0], v(0.0, 0.0));
        assert_eq!(graph.vertexes()[4], v(0.4, 0.4));
    }
}
