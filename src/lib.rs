//! 2D visibility graph construction and shortest path queries for polygons with holes.
//!
//! A visibility graph connects every pair of points that can "see" each other along a straight
//! line lying entirely inside a polygon's closed region (interior plus boundary, avoiding the
//! exterior and any hole's open interior). Shortest path queries run Dijkstra over the graph
//! with Euclidean edge weights, joining arbitrary query points to the graph on demand.
//!
//! # Examples
//!
//! ```
//! use polyvis::core::math::Vector2;
//! use polyvis::polygon::Polygon;
//! use polyvis::ring;
//! use polyvis::visibility::{path_length, VisibilityGraph};
//!
//! // unit square shell with a centered square hole
//! let shell = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let hole = ring![(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)];
//! let mut graph = VisibilityGraph::new(Polygon::new(shell, vec![hole]));
//!
//! // opposite shell corners cannot see each other through the hole
//! assert!(!graph.is_visible(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)));
//!
//! // the shortest path routes around the hole and is longer than the straight line
//! let path = graph.shortest_path(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
//! assert_eq!(path.len(), 2);
//! assert!(path_length(&path) > 2.0f64.sqrt());
//! ```
mod macros;

pub mod core;
pub mod polygon;
pub mod visibility;
