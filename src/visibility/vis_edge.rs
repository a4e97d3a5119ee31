use crate::core::math::Vector2;
use crate::core::traits::Real;

/// An undirected visibility graph edge between two points.
///
/// The `source`/`target` field names carry no direction meaning for graph membership (two edges
/// with the same unordered, fuzzy equal endpoint pair are the same edge); paths returned from
/// shortest path queries orient each edge along the traversal so `target` chains into the next
/// edge's `source`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisEdge<T = f64> {
    pub source: Vector2<T>,
    pub target: Vector2<T>,
}

impl<T> VisEdge<T>
where
    T: Real,
{
    /// Create a new edge between the two points given.
    #[inline]
    pub fn new(source: Vector2<T>, target: Vector2<T>) -> Self {
        VisEdge { source, target }
    }

    /// Euclidean distance between the edge endpoints (the edge weight in shortest path queries).
    #[inline]
    pub fn length(&self) -> T {
        (self.target - self.source).length()
    }

    /// The same edge with `source` and `target` swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        VisEdge::new(self.target, self.source)
    }

    /// Fuzzy compare with another edge ignoring endpoint order.
    pub fn fuzzy_eq_unordered_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        (self.source.fuzzy_eq_eps(other.source, fuzzy_epsilon)
            && self.target.fuzzy_eq_eps(other.target, fuzzy_epsilon))
            || (self.source.fuzzy_eq_eps(other.target, fuzzy_epsilon)
                && self.target.fuzzy_eq_eps(other.source, fuzzy_epsilon))
    }
}
