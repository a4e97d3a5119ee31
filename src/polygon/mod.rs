//! This module has the polygon data types (shell ring plus hole rings) and the
//! boundary-inclusive point/segment containment predicates built on them.
mod contains;
mod ring;

use crate::core::math::{min_max, Vector2};
use crate::core::traits::Real;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

pub use contains::*;
pub use ring::*;

/// A polygon with holes: one shell [Ring] (outer boundary) plus zero or more hole rings.
///
/// The shell is conventionally wound counter clockwise and holes clockwise, but all containment
/// predicates are winding direction agnostic. Holes are assumed to lie strictly inside the shell
/// and to not intersect each other or the shell; this is the caller's responsibility and is not
/// validated.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    shell: Ring<T>,
    holes: Vec<Ring<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new [Polygon] from a shell ring and a collection of hole rings.
    ///
    /// Each ring must satisfy the ring invariant (at least 3 vertexes, consecutive vertexes
    /// distinct including the wrap-around pair). Violations are a programmer error
    /// (debug asserted, undefined behavior in release builds).
    pub fn new(shell: Ring<T>, holes: Vec<Ring<T>>) -> Self {
        debug_assert!(shell.is_valid(), "shell ring violates the ring invariant");
        debug_assert!(
            holes.iter().all(|h| h.is_valid()),
            "hole ring violates the ring invariant"
        );
        Polygon { shell, holes }
    }

    /// The outer boundary ring.
    #[inline]
    pub fn shell(&self) -> &Ring<T> {
        &self.shell
    }

    /// The hole rings (regions excluded from the polygon interior).
    #[inline]
    pub fn holes(&self) -> &[Ring<T>] {
        &self.holes
    }

    /// Iterate all rings, shell first then holes in order.
    #[inline]
    pub fn rings(&self) -> impl Iterator<Item = &Ring<T>> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }

    /// Total vertex count across the shell and all holes.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rings().map(|r| r.vertex_count()).sum()
    }

    /// Iterate all boundary vertexes, shell first then holes, each in ring order.
    #[inline]
    pub fn iter_vertexes(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.rings().flat_map(|r| r.iter_vertexes())
    }

    /// Total boundary segment count across the shell and all holes (equals [Polygon::vertex_count]
    /// since every ring is closed).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertex_count()
    }

    /// The boundary segment at flattened `index` (shell segments first then each hole's in order).
    ///
    /// Panics if `index` is out of range.
    pub fn segment_at(&self, index: usize) -> (Vector2<T>, Vector2<T>) {
        let mut i = index;
        for ring in self.rings() {
            if i < ring.vertex_count() {
                return ring.segment_at(i);
            }
            i -= ring.vertex_count();
        }
        panic!("segment index out of range");
    }

    /// Iterate all boundary segments, shell first then holes, each in ring order with the
    /// wrap-around segment last.
    #[inline]
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.rings().flat_map(|r| r.iter_segments())
    }

    /// Create a spatial index of the bounding boxes of all boundary segments.
    ///
    /// Item indexes in the returned index position into [Polygon::segment_at]. Returns `None` if
    /// the index fails to build (no segments).
    pub fn create_seg_aabb_index(&self) -> Option<StaticAABB2DIndex<T>> {
        let seg_count = self.segment_count();
        if seg_count == 0 {
            return None;
        }

        let mut builder = StaticAABB2DIndexBuilder::new(seg_count);
        for (p0, p1) in self.iter_segments() {
            let (min_x, max_x) = min_max(p0.x, p1.x);
            let (min_y, max_y) = min_max(p0.y, p1.y);
            builder.add(min_x, min_y, max_x, max_y);
        }

        builder.build().ok()
    }

    /// Boundary-inclusive point containment using default options.
    ///
    /// See [polygon_contains_point].
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        polygon_contains_point(self, point)
    }

    /// Boundary-inclusive segment containment using default options.
    ///
    /// See [polygon_covers_segment].
    #[inline]
    pub fn covers_segment(&self, p0: Vector2<T>, p1: Vector2<T>) -> bool {
        polygon_covers_segment(self, p0, p1)
    }
}
