use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{VisEdge, VisibilityGraph};
use crate::core::math::Vector2;
use crate::core::traits::Real;

/// Sum of the Euclidean lengths of the path edges given.
#[inline]
pub fn path_length<T>(path: &[VisEdge<T>]) -> T
where
    T: Real,
{
    path.iter().fold(T::zero(), |acc, e| acc + e.length())
}

/// Min-heap entry for the Dijkstra search (reverse ordered on distance).
struct HeapNode<T> {
    dist: T,
    index: usize,
}

impl<T> PartialEq for HeapNode<T>
where
    T: Real,
{
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.index == other.index
    }
}

impl<T> Eq for HeapNode<T> where T: Real {}

impl<T> PartialOrd for HeapNode<T>
where
    T: Real,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.dist.partial_cmp(&self.dist)
    }
}

impl<T> Ord for HeapNode<T>
where
    T: Real,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl<T> VisibilityGraph<T>
where
    T: Real,
{
    /// Shortest path by total Euclidean edge length from `p0` to `p1`.
    ///
    /// Both points are first joined to the graph via
    /// [add_vis_edges_for_point](VisibilityGraph::add_vis_edges_for_point) (a no-op for polygon
    /// boundary points), then a Dijkstra search runs from `p0`. The result is the ordered edge
    /// sequence from `p0` to `p1` with each edge directed along the traversal. If `p0` and `p1`
    /// are fuzzy equal, or no path exists (e.g. an inserted point with zero visible vertexes),
    /// the result is an empty sequence rather than an error.
    pub fn shortest_path(&mut self, p0: Vector2<T>, p1: Vector2<T>) -> Vec<VisEdge<T>> {
        self.shortest_paths(p0, &[p1]).pop().unwrap_or_default()
    }

    /// Shortest paths by total Euclidean edge length from `p0` to each point of `targets`.
    ///
    /// All points are first joined to the graph via
    /// [add_vis_edges_for_point](VisibilityGraph::add_vis_edges_for_point), then a single
    /// Dijkstra search from `p0` serves every target. The result holds one path per target in
    /// the same order as `targets`; an unreachable target (or a target fuzzy equal to `p0`)
    /// yields an empty sequence at its position.
    pub fn shortest_paths(
        &mut self,
        p0: Vector2<T>,
        targets: &[Vector2<T>],
    ) -> Vec<Vec<VisEdge<T>>> {
        self.add_vis_edges_for_point(p0);
        for &target in targets {
            self.add_vis_edges_for_point(target);
        }

        let source = match self.find_vertex(p0) {
            Some(i) => i,
            None => return vec![Vec::new(); targets.len()],
        };

        let prev = self.dijkstra(source);

        targets
            .iter()
            .map(|&target| match self.find_vertex(target) {
                Some(t) => self.extract_path(source, t, &prev),
                None => Vec::new(),
            })
            .collect()
    }

    /// Single source Dijkstra over the current graph with edge weight = Euclidean length.
    /// Returns the predecessor of each vertex on its shortest path from `source` (`None` for
    /// unreached vertexes and for `source` itself).
    fn dijkstra(&self, source: usize) -> Vec<Option<usize>> {
        let vertex_count = self.vertex_data.len();
        let mut dist = vec![<T as Real>::max_value(); vertex_count];
        let mut prev = vec![None; vertex_count];
        let mut visited = vec![false; vertex_count];
        let mut heap = BinaryHeap::new();

        dist[source] = T::zero();
        heap.push(HeapNode {
            dist: T::zero(),
            index: source,
        });

        while let Some(HeapNode { dist: d, index }) = heap.pop() {
            if visited[index] {
                continue;
            }
            visited[index] = true;

            for &nb in &self.adjacency[index] {
                if visited[nb] {
                    continue;
                }
                let nd = d + (self.vertex_data[nb] - self.vertex_data[index]).length();
                if nd < dist[nb] {
                    dist[nb] = nd;
                    prev[nb] = Some(index);
                    heap.push(HeapNode {
                        dist: nd,
                        index: nb,
                    });
                }
            }
        }

        prev
    }

    /// Walk the predecessor chain from `target` back to `source` and return the path edges in
    /// traversal order. Empty if `target` equals `source` or was never reached.
    fn extract_path(&self, source: usize, target: usize, prev: &[Option<usize>]) -> Vec<VisEdge<T>> {
        if source == target {
            return Vec::new();
        }

        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            match prev[current] {
                Some(p) => {
                    edges.push(VisEdge::new(self.vertex_data[p], self.vertex_data[current]));
                    current = p;
                }
                // target unreachable from source
                None => return Vec::new(),
            }
        }

        edges.reverse();
        edges
    }
}
