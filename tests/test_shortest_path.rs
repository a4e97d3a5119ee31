mod test_shortest_path {
    use polyvis::core::math::Vector2;
    use polyvis::core::traits::FuzzyEq;
    use polyvis::polygon::Polygon;
    use polyvis::ring;
    use polyvis::visibility::{path_length, VisEdge, VisibilityGraph};

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

    fn assert_path_chains(path: &[VisEdge<f64>], p0: Vector2<f64>, p1: Vector2<f64>) {
        assert!(!path.is_empty());
        assert!(path[0].source.fuzzy_eq(p0));
        assert!(path[path.len() - 1].target.fuzzy_eq(p1));
        for pair in path.windows(2) {
            assert_eq!(pair[0].target, pair[1].source);
        }
    }

    #[test]
    fn direct_path_between_visible_vertexes() {
        let mut graph = VisibilityGraph::new(unit_square());
        let path = graph.shortest_path(v(0.0, 0.0), v(1.0, 1.0));

        assert_eq!(path.len(), 1);
        assert_path_chains(&path, v(0.0, 0.0), v(1.0, 1.0));
        assert!(path_length(&path).fuzzy_eq(2.0f64.sqrt()));
    }

    #[test]
    fn path_routes_around_hole() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        let path = graph.shortest_path(v(0.0, 0.0), v(1.0, 1.0));

        assert_eq!(path.len(), 2);
        assert_path_chains(&path, v(0.0, 0.0), v(1.0, 1.0));

        let length = path_length(&path);
        // strictly longer than the straight line blocked by the hole
        assert!(length > 2.0f64.sqrt());
        // detours through one of the near hole corners
        assert!(length.fuzzy_eq(2.0 * 0.52f64.sqrt()));
    }

    #[test]
    fn same_point_yields_empty_path() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        assert!(graph.shortest_path(v(0.0, 0.0), v(0.0, 0.0)).is_empty());
        assert!(graph.shortest_path(v(0.3, 0.3), v(0.3, 0.3)).is_empty());
    }

    #[test]
    fn unreachable_target_yields_empty_path() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        // exterior point joins the graph isolated, so no path exists either way
        assert!(graph.shortest_path(v(2.0, 0.5), v(1.0, 1.0)).is_empty());
        assert!(graph.shortest_path(v(0.0, 0.0), v(2.0, 0.5)).is_empty());
    }

    #[test]
    fn query_points_join_graph_on_demand() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        let p0 = v(0.1, 0.1);
        let p1 = v(0.9, 0.9);
        let path = graph.shortest_path(p0, p1);

        assert_path_chains(&path, p0, p1);
        assert_eq!(graph.foreign_vertexes().count(), 2);
        // both query points route through hole corners, never through the hole
        assert!(path.len() >= 2);
        for edge in path.iter() {
            assert!(graph.is_visible(edge.source, edge.target));
        }
    }

    #[test]
    fn path_weight_matches_edge_lengths() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        let path = graph.shortest_path(v(0.0, 0.0), v(1.0, 1.0));

        let summed = path
            .iter()
            .fold(0.0, |acc, e| acc + (e.target - e.source).length());
        assert!(path_length(&path).fuzzy_eq(summed));
    }

    #[test]
    fn multi_target_results_in_target_order() {
        let mut graph = VisibilityGraph::new(square_with_hole());
        let targets = [v(1.0, 1.0), v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.5)];
        let paths = graph.shortest_paths(v(0.0, 0.0), &targets);

        assert_eq!(paths.len(), 4);

        // around the hole
        assert_eq!(paths[0].len(), 2);
        assert!(path_length(&paths[0]).fuzzy_eq(2.0 * 0.52f64.sqrt()));

        // source equals target
        assert!(paths[1].is_empty());

        // adjacent corner reached directly along the boundary edge
        assert_eq!(paths[2].len(), 1);
        assert!(path_length(&paths[2]).fuzzy_eq(1.0));

        // unreachable exterior point degrades to an empty result
        assert!(paths[3].is_empty());
    }

    #[test]
    fn multi_target_shares_one_search() {
        let mut graph = VisibilityGraph::new(unit_square());
        let targets = [v(1.0, 1.0), v(0.5, 0.5)];
        let paths = graph.shortest_paths(v(0.0, 0.0), &targets);

        assert_eq!(paths.len(), 2);
        assert_path_chains(&paths[0], v(0.0, 0.0), v(1.0, 1.0));
        assert_path_chains(&paths[1], v(0.0, 0.0), v(0.5, 0.5));
        assert!(path_length(&paths[1]).fuzzy_eq(0.5f64 * 2.0f64.sqrt()));
    }

    #[test]
    fn shortest_path_over_longer_detour() {
        // rectangle with a tall thin wall hole forcing a detour over or under it
        let polygon = Polygon::new(
            ring![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)],
            vec![ring![(1.9, 0.5), (2.1, 0.5), (2.1, 2.5), (1.9, 2.5)]],
        );
        let mut graph = VisibilityGraph::new(polygon);

        let p0 = v(1.0, 1.5);
        let p1 = v(3.0, 1.5);
        let path = graph.shortest_path(p0, p1);

        assert_path_chains(&path, p0, p1);
        let direct = (p1 - p0).length();
        assert!(path_length(&path) > direct);
        // route passes the wall ends, not through the wall
        for edge in path.iter() {
            assert!(graph.is_visible(edge.source, edge.target));
        }
    }
}
