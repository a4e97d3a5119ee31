mod test_point_insertion {
    use polyvis::core::math::Vector2;
    use polyvis::polygon::Polygon;
    use polyvis::ring;
    use polyvis::visibility::VisibilityGraph;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    fn unit_square() -> Polygon<f64> {
        Polygon::new(
            ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            Vec::new(),
        )
    }

    fn square_with_hole() -> Polygon<f64> {
        Polygon::new(
            ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            vec![ring![(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)]],
        )
    }

    #[test]
    fn interior_point_connects_to_visible_vertexes() {
        let mut graph = VisibilityGraph::new(unit_square());
        graph.add_vis_edges_for_point(v(0.5, 0.5));

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.foreign_vertexes().count(), 1);
        // center of a convex square sees all four corners
        assert_eq!(graph.foreign_edges().count(), 4);
        for &corner in &[v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)] {
            assert!(graph.contains_edge(v(0.5, 0.5), corner));
        }
    }

    #[test]
    fn boundary_point_insertion_is_noop() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        graph.add_vis_edges_for_point(v(1.0, 0.0));
        graph.add_vis_edges_for_point(v(0.4, 0.4));

        assert_eq!(graph.vertex_count(), vertex_count);
        assert_eq!(graph.edge_count(), edge_count);
        assert_eq!(graph.foreign_vertexes().count(), 0);
    }

    #[test]
    fn repeated_insertion_is_idempotent() {
        let mut graph = VisibilityGraph::new(unit_square());

        graph.add_vis_edges_for_point(v(0.3, 0.3));
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        graph.add_vis_edges_for_point(v(0.3, 0.3));
        assert_eq!(graph.vertex_count(), vertex_count);
        assert_eq!(graph.edge_count(), edge_count);
    }

    #[test]
    fn exterior_point_is_isolated() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        graph.add_vis_edges_for_point(v(2.0, 0.5));

        assert_eq!(graph.foreign_vertexes().count(), 1);
        assert_eq!(graph.foreign_edges().count(), 0);
    }

    #[test]
    fn point_inside_hole_is_isolated() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        graph.add_vis_edges_for_point(v(0.5, 0.5));

        assert_eq!(graph.foreign_vertexes().count(), 1);
        assert_eq!(graph.foreign_edges().count(), 0);
    }

    #[test]
    fn foreign_points_become_mutually_connected() {
        let mut graph = VisibilityGraph::new(unit_square());
        graph.add_vis_edges_for_points([v(0.2, 0.5), v(0.8, 0.5)]);

        assert_eq!(graph.foreign_vertexes().count(), 2);
        // each foreign point sees the 4 corners, plus the mutual edge added when the second
        // point scanned the graph's current vertex set
        assert!(graph.contains_edge(v(0.2, 0.5), v(0.8, 0.5)));
        assert_eq!(graph.foreign_edges().count(), 9);
    }

    #[test]
    fn foreign_mutual_edge_blocked_by_hole() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        graph.add_vis_edges_for_points([v(0.2, 0.5), v(0.8, 0.5)]);

        assert_eq!(graph.foreign_vertexes().count(), 2);
        assert!(!graph.contains_edge(v(0.2, 0.5), v(0.8, 0.5)));
    }

    #[test]
    fn reinsertion_rescans_against_current_vertex_set() {
        let mut graph = VisibilityGraph::new(unit_square());
        graph.add_vis_edges_for_point(v(0.2, 0.5));
        assert!(!graph.contains_edge(v(0.2, 0.5), v(0.8, 0.5)));

        graph.add_vis_edges_for_point(v(0.8, 0.5));
        // first point gained a mutual edge via the second point's scan; re-inserting the first
        // point afterwards adds nothing new
        let edge_count = graph.edge_count();
        graph.add_vis_edges_for_point(v(0.2, 0.5));
        assert_eq!(graph.edge_count(), edge_count);
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn visible_points_include_earlier_foreign_points() {
        let mut graph = VisibilityGraph::new(unit_square());
        graph.add_vis_edges_for_point(v(0.2, 0.5));

        let visible = graph.visible_points_by_point(v(0.8, 0.5));
        assert_eq!(visible.len(), 5);
        assert!(visible.iter().any(|p| p.fuzzy_eq(v(0.2, 0.5))));
    }
}
