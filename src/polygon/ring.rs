use crate::core::math::{dist_squared, is_left, line_seg_closest_point, Vector2};
use crate::core::traits::Real;

/// Ordered, implicitly closed loop of 2D points: the last vertex connects back to the first.
///
/// Represents either a polygon shell (outer boundary) or one hole. Invariant (caller's
/// responsibility): at least 3 vertexes, consecutive vertexes distinct including the wrap-around
/// pair.
#[derive(Debug, Clone)]
pub struct Ring<T = f64> {
    /// Contiguous sequence of vertexes.
    pub vertex_data: Vec<Vector2<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Create a new [Ring] from the vertexes given.
    #[inline]
    pub fn new(vertex_data: Vec<Vector2<T>>) -> Self {
        Ring { vertex_data }
    }

    /// Create a new empty [Ring] with `capacity` reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Add a vertex to the ring with `x` and `y` values given.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.vertex_data.get(index).copied()
    }

    /// Vertex at `index` position. Panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Vector2<T> {
        self.vertex_data[index]
    }

    #[inline]
    pub fn iter_vertexes(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.vertex_data.iter().copied()
    }

    /// Segment starting at the vertex at `index` position, wrapping around to the first vertex
    /// for the last segment. Panics if `index` is out of bounds.
    #[inline]
    pub fn segment_at(&self, index: usize) -> (Vector2<T>, Vector2<T>) {
        (
            self.vertex_data[index],
            self.vertex_data[(index + 1) % self.vertex_data.len()],
        )
    }

    /// Iterate all segments of the ring in order, the wrap-around segment last.
    #[inline]
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        (0..self.vertex_count()).map(move |i| self.segment_at(i))
    }

    /// Returns true if the ring satisfies the ring invariant: at least 3 vertexes and all
    /// consecutive vertexes distinct (including the wrap-around pair).
    pub fn is_valid(&self) -> bool {
        self.vertex_count() >= 3
            && self
                .iter_segments()
                .all(|(v1, v2)| !v1.fuzzy_eq_eps(v2, T::fuzzy_epsilon()))
    }

    /// Calculate the winding number for a `point` relative to the ring.
    ///
    /// The winding number is signed by the ring direction (positive for counter clockwise) and
    /// zero if the point is outside the closed loop. The result for a point exactly on the ring
    /// boundary is not defined, use [Ring::on_boundary_eps] first where that matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyvis::ring;
    /// # use polyvis::core::math::Vector2;
    /// let square = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert_eq!(square.winding_number(Vector2::new(1.0, 1.0)), 1);
    /// assert_eq!(square.winding_number(Vector2::new(3.0, 1.0)), 0);
    /// ```
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if self.vertex_count() < 3 {
            return 0;
        }

        let mut winding = 0;
        for (v1, v2) in self.iter_segments() {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// Returns true if `point` lies within `epsilon` distance of any segment of the ring.
    pub fn on_boundary_eps(&self, point: Vector2<T>, epsilon: T) -> bool {
        self.iter_segments().any(|(v1, v2)| {
            dist_squared(line_seg_closest_point(v1, v2, point), point) <= epsilon * epsilon
        })
    }
}
