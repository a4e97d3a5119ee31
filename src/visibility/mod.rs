//! This module has the visibility graph: construction from a polygon's boundary rings, dynamic
//! insertion of query points, read-only edge/vertex projections, and Dijkstra shortest path
//! queries over the graph.
mod shortest_path;
mod vis_edge;
mod vis_graph;

pub use shortest_path::*;
pub use vis_edge::*;
pub use vis_graph::*;
