use std::collections::BTreeSet;

use rayon::prelude::*;
use static_aabb2d_index::StaticAABB2DIndex;

use super::VisEdge;
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::polygon::{polygon_covers_segment_opt, Polygon, SegContainsOptions};

/// Struct to hold options parameters when constructing a [VisibilityGraph].
#[derive(Debug, Clone)]
pub struct VisGraphOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal. Used both by the
    /// containment predicate and for matching query points against existing graph vertexes.
    pub pos_equal_eps: T,
}

impl<T> VisGraphOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> Default for VisGraphOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Undirected, simple, weighted graph connecting every pair of points that can see each other
/// inside a [Polygon]'s closed region.
///
/// Construction adds all boundary points as vertexes, every ring's consecutive point pairs as
/// unconditional boundary edges, and an edge for every remaining boundary point pair that passes
/// the visibility test. Arbitrary query points join the graph later through
/// [VisibilityGraph::add_vis_edges_for_point]; vertexes and edges are only ever added, never
/// removed or reweighted.
///
/// Edge weights are not stored: they are derived from endpoint distance ([VisEdge::length]).
pub struct VisibilityGraph<T = f64>
where
    T: Real,
{
    polygon: Polygon<T>,
    seg_aabb_index: Option<StaticAABB2DIndex<T>>,
    pub(crate) vertex_data: Vec<Vector2<T>>,
    pub(crate) adjacency: Vec<BTreeSet<usize>>,
    boundary_count: usize,
    shell_count: usize,
    pos_equal_eps: T,
}

impl<T> VisibilityGraph<T>
where
    T: Real,
{
    /// Construct the full visibility graph for `polygon` using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyvis::polygon::Polygon;
    /// # use polyvis::ring;
    /// # use polyvis::visibility::VisibilityGraph;
    /// // a convex polygon with no holes yields a complete graph on its vertexes
    /// let polygon = Polygon::new(ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], Vec::new());
    /// let graph = VisibilityGraph::new(polygon);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 6);
    /// ```
    #[inline]
    pub fn new(polygon: Polygon<T>) -> Self {
        Self::new_opt(polygon, &VisGraphOptions::new())
    }

    /// Same as [VisibilityGraph::new] but with [VisGraphOptions] parameter.
    pub fn new_opt(polygon: Polygon<T>, options: &VisGraphOptions<T>) -> Self {
        let seg_aabb_index = polygon.create_seg_aabb_index();
        let vertex_data: Vec<Vector2<T>> = polygon.iter_vertexes().collect();
        let boundary_count = vertex_data.len();
        let shell_count = polygon.shell().vertex_count();
        let mut adjacency = vec![BTreeSet::new(); boundary_count];

        // ring edges are never visibility tested, they are the polygon's own boundary
        let mut offset = 0;
        for ring in polygon.rings() {
            let n = ring.vertex_count();
            for i in 0..n {
                let a = offset + i;
                let b = offset + (i + 1) % n;
                adjacency[a].insert(b);
                adjacency[b].insert(a);
            }
            offset += n;
        }

        let mut graph = VisibilityGraph {
            polygon,
            seg_aabb_index,
            vertex_data,
            adjacency,
            boundary_count,
            shell_count,
            pos_equal_eps: options.pos_equal_eps,
        };

        graph.build_interior_edges();
        graph
    }

    /// Test all boundary point pairs not already connected by a ring edge and add a visibility
    /// edge for each pair that passes. Pair tests are independent reads of the immutable polygon
    /// so they fan out across threads; the surviving pairs are merged by this single writer.
    fn build_interior_edges(&mut self) {
        let boundary_count = self.boundary_count;
        let candidates: Vec<(usize, usize)> = (0..boundary_count)
            .flat_map(|i| ((i + 1)..boundary_count).map(move |j| (i, j)))
            .filter(|&(i, j)| !self.adjacency[i].contains(&j))
            .collect();

        let polygon = &self.polygon;
        let vertex_data = &self.vertex_data;
        let options = SegContainsOptions {
            seg_aabb_index: self.seg_aabb_index.as_ref(),
            pos_equal_eps: self.pos_equal_eps,
        };

        let visible: Vec<(usize, usize)> = candidates
            .par_iter()
            .copied()
            .filter(|&(i, j)| {
                polygon_covers_segment_opt(polygon, vertex_data[i], vertex_data[j], &options)
            })
            .collect();

        for (i, j) in visible {
            self.adjacency[i].insert(j);
            self.adjacency[j].insert(i);
        }
    }

    /// The polygon the graph was constructed from.
    #[inline]
    pub fn polygon(&self) -> &Polygon<T> {
        &self.polygon
    }

    /// All graph vertexes: polygon boundary points first (shell then holes, each in ring order)
    /// followed by any inserted foreign points in insertion order.
    #[inline]
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertex_data
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    /// Count of the polygon's original boundary vertexes (always the first vertexes of
    /// [VisibilityGraph::vertexes]).
    #[inline]
    pub fn boundary_vertex_count(&self) -> usize {
        self.boundary_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Test if the closed segment between `p0` and `p1` lies entirely within the polygon's
    /// closed region (boundary inclusive). The points are not required to be graph vertexes.
    #[inline]
    pub fn is_visible(&self, p0: Vector2<T>, p1: Vector2<T>) -> bool {
        polygon_covers_segment_opt(&self.polygon, p0, p1, &self.seg_contains_options())
    }

    /// All current graph vertexes visible from `p0`, excluding `p0` itself.
    ///
    /// Note this scans the graph's *current* vertex set: foreign points inserted earlier are
    /// included alongside the polygon boundary points.
    pub fn visible_points_by_point(&self, p0: Vector2<T>) -> Vec<Vector2<T>> {
        self.visible_vertex_indexes(p0)
            .into_iter()
            .map(|i| self.vertex_data[i])
            .collect()
    }

    /// Join `point` to the graph by adding it as a vertex together with a visibility edge to
    /// every currently visible vertex.
    ///
    /// No-op if `point` is one of the polygon's original boundary vertexes (their edges were
    /// fully computed at construction). A point with no visible vertexes is still added as an
    /// isolated vertex. Calling again after the graph has gained vertexes re-scans against the
    /// current vertex set, so foreign points become mutually connected when visible and
    /// insertion order determines which foreign-to-foreign edges exist at any moment; existing
    /// edges are never removed or duplicated.
    pub fn add_vis_edges_for_point(&mut self, point: Vector2<T>) {
        if self.boundary_vertex_index(point).is_some() {
            return;
        }

        let visible = self.visible_vertex_indexes(point);

        let index = match self.find_vertex(point) {
            Some(i) => i,
            None => {
                self.vertex_data.push(point);
                self.adjacency.push(BTreeSet::new());
                self.vertex_data.len() - 1
            }
        };

        for other in visible {
            if other == index {
                continue;
            }
            self.adjacency[index].insert(other);
            self.adjacency[other].insert(index);
        }
    }

    /// Join every point of `points` to the graph in order via
    /// [VisibilityGraph::add_vis_edges_for_point].
    ///
    /// Points are processed sequentially so later points also test visibility against earlier
    /// inserted ones.
    pub fn add_vis_edges_for_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        for point in points {
            self.add_vis_edges_for_point(point);
        }
    }

    /// Iterate all edges of the graph (boundary, interior visibility, and foreign point edges),
    /// each undirected edge yielded once.
    #[inline]
    pub fn iter_edges(&self) -> impl Iterator<Item = VisEdge<T>> + '_ {
        self.iter_edge_indexes()
            .map(move |(i, j)| VisEdge::new(self.vertex_data[i], self.vertex_data[j]))
    }

    /// Edges whose endpoints are both polygon boundary points.
    #[inline]
    pub fn boundary_edges(&self) -> impl Iterator<Item = VisEdge<T>> + '_ {
        let boundary_count = self.boundary_count;
        self.iter_edge_indexes()
            .filter(move |&(i, j)| i < boundary_count && j < boundary_count)
            .map(move |(i, j)| VisEdge::new(self.vertex_data[i], self.vertex_data[j]))
    }

    /// Edges whose endpoints are both shell ring points.
    #[inline]
    pub fn shell_edges(&self) -> impl Iterator<Item = VisEdge<T>> + '_ {
        let shell_count = self.shell_count;
        self.iter_edge_indexes()
            .filter(move |&(i, j)| i < shell_count && j < shell_count)
            .map(move |(i, j)| VisEdge::new(self.vertex_data[i], self.vertex_data[j]))
    }

    /// Edges whose endpoints both lie on hole rings (not necessarily the same hole).
    #[inline]
    pub fn hole_edges(&self) -> impl Iterator<Item = VisEdge<T>> + '_ {
        let shell_count = self.shell_count;
        let boundary_count = self.boundary_count;
        let on_hole = move |i: usize| i >= shell_count && i < boundary_count;
        self.iter_edge_indexes()
            .filter(move |&(i, j)| on_hole(i) && on_hole(j))
            .map(move |(i, j)| VisEdge::new(self.vertex_data[i], self.vertex_data[j]))
    }

    /// Vertexes not original to the polygon (inserted query points), in insertion order.
    #[inline]
    pub fn foreign_vertexes(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.vertex_data[self.boundary_count..].iter().copied()
    }

    /// Edges touching at least one foreign (non-boundary) vertex.
    #[inline]
    pub fn foreign_edges(&self) -> impl Iterator<Item = VisEdge<T>> + '_ {
        let boundary_count = self.boundary_count;
        self.iter_edge_indexes()
            .filter(move |&(i, j)| i >= boundary_count || j >= boundary_count)
            .map(move |(i, j)| VisEdge::new(self.vertex_data[i], self.vertex_data[j]))
    }

    /// Test if the graph contains an edge between the two points given (in either endpoint
    /// order).
    pub fn contains_edge(&self, p0: Vector2<T>, p1: Vector2<T>) -> bool {
        match (self.find_vertex(p0), self.find_vertex(p1)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    pub(crate) fn seg_contains_options(&self) -> SegContainsOptions<'_, T> {
        SegContainsOptions {
            seg_aabb_index: self.seg_aabb_index.as_ref(),
            pos_equal_eps: self.pos_equal_eps,
        }
    }

    /// Index of the graph vertex fuzzy equal to `point`, if any.
    pub(crate) fn find_vertex(&self, point: Vector2<T>) -> Option<usize> {
        let eps = self.pos_equal_eps;
        self.vertex_data
            .iter()
            .position(|v| v.fuzzy_eq_eps(point, eps))
    }

    /// Index of the polygon boundary vertex fuzzy equal to `point`, if any.
    fn boundary_vertex_index(&self, point: Vector2<T>) -> Option<usize> {
        let eps = self.pos_equal_eps;
        self.vertex_data[..self.boundary_count]
            .iter()
            .position(|v| v.fuzzy_eq_eps(point, eps))
    }

    /// Indexes of all current vertexes visible from `point`, excluding any vertex fuzzy equal to
    /// `point` itself. Visibility scans are independent reads so they fan out across threads.
    fn visible_vertex_indexes(&self, point: Vector2<T>) -> Vec<usize> {
        let eps = self.pos_equal_eps;
        let options = self.seg_contains_options();
        let polygon = &self.polygon;
        self.vertex_data
            .par_iter()
            .copied()
            .enumerate()
            .filter(|&(_, v)| !v.fuzzy_eq_eps(point, eps))
            .filter(|&(_, v)| polygon_covers_segment_opt(polygon, point, v, &options))
            .map(|(i, _)| i)
            .collect()
    }

    fn iter_edge_indexes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, nbrs)| {
            nbrs.iter()
                .copied()
                .filter(move |&j| i < j)
                .map(move |j| (i, j))
        })
    }
}
