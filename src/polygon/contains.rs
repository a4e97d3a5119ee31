use super::Polygon;
use crate::core::math::{
    dist_squared, line_seg_closest_point, midpoint, min_max, point_from_parametric, seg_seg_intr,
    SegSegIntr, Vector2,
};
use crate::core::traits::Real;
use static_aabb2d_index::StaticAABB2DIndex;

/// Struct to hold options parameters when performing point/segment containment queries.
#[derive(Debug, Clone)]
pub struct SegContainsOptions<'a, T>
where
    T: Real,
{
    /// Spatial index of the polygon's boundary segment bounding boxes
    /// ([Polygon::create_seg_aabb_index]). If `None` is given then every boundary segment is
    /// tested. The index item positions must match [Polygon::segment_at] positions.
    pub seg_aabb_index: Option<&'a StaticAABB2DIndex<T>>,
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<'a, T> SegContainsOptions<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            seg_aabb_index: None,
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<'a, T> Default for SegContainsOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Test if a polygon contains a point, boundary inclusive.
///
/// A point is contained if it lies on any ring boundary (shell or hole), or strictly inside the
/// shell and strictly outside every hole.
///
/// # Examples
///
/// ```
/// # use polyvis::polygon::*;
/// # use polyvis::ring;
/// # use polyvis::core::math::Vector2;
/// let polygon = Polygon::new(
///     ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
///     vec![ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]],
/// );
/// assert!(polygon_contains_point(&polygon, Vector2::new(0.5, 0.5)));
/// // hole interior is excluded but the hole boundary itself is included
/// assert!(!polygon_contains_point(&polygon, Vector2::new(2.0, 2.0)));
/// assert!(polygon_contains_point(&polygon, Vector2::new(1.0, 2.0)));
/// ```
#[inline]
pub fn polygon_contains_point<T>(polygon: &Polygon<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    polygon_contains_point_opt(polygon, point, &Default::default())
}

/// Same as [polygon_contains_point] but with [SegContainsOptions] parameter.
pub fn polygon_contains_point_opt<T>(
    polygon: &Polygon<T>,
    point: Vector2<T>,
    options: &SegContainsOptions<T>,
) -> bool
where
    T: Real,
{
    let eps = options.pos_equal_eps;

    let on_boundary = match options.seg_aabb_index {
        Some(index) => {
            let mut query_stack = Vec::new();
            index
                .query_with_stack(
                    point.x - eps,
                    point.y - eps,
                    point.x + eps,
                    point.y + eps,
                    &mut query_stack,
                )
                .into_iter()
                .any(|i| {
                    let (v1, v2) = polygon.segment_at(i);
                    dist_squared(line_seg_closest_point(v1, v2, point), point) <= eps * eps
                })
        }
        None => polygon.rings().any(|r| r.on_boundary_eps(point, eps)),
    };

    if on_boundary {
        return true;
    }

    if polygon.shell().winding_number(point) == 0 {
        return false;
    }

    polygon.holes().iter().all(|h| h.winding_number(point) == 0)
}

/// Test if a polygon covers a line segment, boundary inclusive.
///
/// Returns true iff the closed segment `[p0, p1]` lies entirely within the polygon's closed
/// region: no point of the segment in the exterior of the shell and no point of the segment in
/// the open interior of any hole. Touching a shell or hole boundary (including running along it)
/// still counts as covered.
///
/// The segment is split at every parametric position where it intersects a boundary segment
/// (collinear overlaps contribute both overlap ends); the segment is covered iff both endpoints
/// and the midpoint of every split sub-interval are contained per [polygon_contains_point].
///
/// # Examples
///
/// ```
/// # use polyvis::polygon::*;
/// # use polyvis::ring;
/// # use polyvis::core::math::Vector2;
/// let polygon = Polygon::new(
///     ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
///     vec![ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]],
/// );
/// // passes entirely left of the hole
/// assert!(polygon_covers_segment(&polygon, Vector2::new(0.5, 0.5), Vector2::new(0.5, 3.5)));
/// // crosses the hole interior
/// assert!(!polygon_covers_segment(&polygon, Vector2::new(0.5, 2.0), Vector2::new(3.5, 2.0)));
/// ```
#[inline]
pub fn polygon_covers_segment<T>(polygon: &Polygon<T>, p0: Vector2<T>, p1: Vector2<T>) -> bool
where
    T: Real,
{
    polygon_covers_segment_opt(polygon, p0, p1, &Default::default())
}

/// Same as [polygon_covers_segment] but with [SegContainsOptions] parameter.
pub fn polygon_covers_segment_opt<T>(
    polygon: &Polygon<T>,
    p0: Vector2<T>,
    p1: Vector2<T>,
    options: &SegContainsOptions<T>,
) -> bool
where
    T: Real,
{
    let eps = options.pos_equal_eps;

    if p0.fuzzy_eq_eps(p1, eps) {
        return polygon_contains_point_opt(polygon, p0, options);
    }

    if !polygon_contains_point_opt(polygon, p0, options)
        || !polygon_contains_point_opt(polygon, p1, options)
    {
        return false;
    }

    let seg_length = (p1 - p0).length();
    // epsilon applied to parametric values at a length/position scale
    let para_eps = eps / seg_length;

    let mut split_ts = vec![T::zero(), T::one()];
    let mut collect = |u1: Vector2<T>, u2: Vector2<T>| match seg_seg_intr(p0, p1, u1, u2, eps) {
        SegSegIntr::TrueIntersect { seg1_t, .. } => {
            split_ts.push(clamp_param(seg1_t));
        }
        SegSegIntr::Overlapping { seg1_t0, seg1_t1 } => {
            split_ts.push(clamp_param(seg1_t0));
            split_ts.push(clamp_param(seg1_t1));
        }
        _ => {}
    };

    match options.seg_aabb_index {
        Some(index) => {
            let (min_x, max_x) = min_max(p0.x, p1.x);
            let (min_y, max_y) = min_max(p0.y, p1.y);
            let mut query_stack = Vec::new();
            for i in index.query_with_stack(
                min_x - eps,
                min_y - eps,
                max_x + eps,
                max_y + eps,
                &mut query_stack,
            ) {
                let (u1, u2) = polygon.segment_at(i);
                collect(u1, u2);
            }
        }
        None => {
            for (u1, u2) in polygon.iter_segments() {
                collect(u1, u2);
            }
        }
    }

    split_ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    split_ts.dedup_by(|a, b| a.fuzzy_eq_eps(*b, para_eps));

    split_ts.windows(2).all(|w| {
        let mid = midpoint(
            point_from_parametric(p0, p1, w[0]),
            point_from_parametric(p0, p1, w[1]),
        );
        polygon_contains_point_opt(polygon, mid, options)
    })
}

#[inline]
fn clamp_param<T>(t: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(t, T::zero()), T::one())
}
