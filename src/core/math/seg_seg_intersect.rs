use super::{base_math::parametric_from_point, point_from_parametric, Vector2};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// No intersect, segments are parallel and not collinear.
    NoIntersect,
    /// There is a true intersect between the line segments.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments overlap each other (are collinear) by some amount.
    Overlapping {
        /// Parametric value for start of coincidence along the first segment.
        seg1_t0: T,
        /// Parametric value for end of coincidence along the first segment.
        seg1_t1: T,
    },
    /// There is an intersect between the lines but one or both of the segments must be extended.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersects between two line segments.
///
/// This function returns the parametric solution(s) using the general
/// line segment equation `P(t) = p0 + t * (p1 - p0)`.
/// Note that this equation holds for both line segments.
///
/// Segments are defined by `v1->v2` and `u1->u2`. Handles the cases where the segments may be
/// parallel, collinear, or single points. Collinear overlap is reported as the parametric
/// interval of coincidence along the *first* segment, which is the segment being split by
/// containment queries.
///
/// # Examples
///
/// ```
/// # use polyvis::core::traits::*;
/// # use polyvis::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(1.0, 0.0);
/// let u1 = Vector2::new(0.5, -1.0);
/// let u2 = Vector2::new(0.5, 1.0);
/// if let SegSegIntr::TrueIntersect { seg1_t: t1, seg2_t: t2 } = seg_seg_intr(v1, v2, u1, u2, 1e-5) {
///    assert_eq!(t1, 0.5);
///    assert_eq!(t2, 0.5);
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
///```
pub fn seg_seg_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    // This implementation works by processing the segments in parametric equation form and using
    // perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    // http://mathworld.wolfram.com/PerpDotProduct.html

    use SegSegIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    let eps = epsilon;

    // segment lengths are used to scale parametric t value for fuzzy comparing
    // this ensures when comparing parametric values the epsilon value is applied with numbers at a
    // length/position scale, e.g., a difference in parametric t value of 0.1 represents a much
    // greater position difference for a segment with a length of 1,000,000 vs. a segment with a
    // length of 0.01, multiplying by the length first ensures that is accounted for to use with the
    // epsilon value
    let seg1_length = (v2 - v1).length();
    let seg2_length = (u2 - u1).length();

    // threshold check here to avoid almost parallel lines resulting in very distant intersection
    if !v_pdot_u.fuzzy_eq_zero_eps(eps) {
        // segments not parallel or collinear
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }
        return TrueIntersect { seg1_t, seg2_t };
    }

    // segments are parallel and possibly collinear
    let v_pdot_w = v.perp_dot(w);
    let u_pdot_w = u.perp_dot(w);

    // threshold check here, we consider almost parallel lines to be parallel
    if !v_pdot_w.fuzzy_eq_zero_eps(eps) || !u_pdot_w.fuzzy_eq_zero_eps(eps) {
        // parallel and not collinear so no intersect
        return NoIntersect;
    }

    // either collinear or degenerate (segments are single points)
    let v_is_point = v1.fuzzy_eq_eps(v2, eps);
    let u_is_point = u1.fuzzy_eq_eps(u2, eps);

    if v_is_point && u_is_point {
        // both segments are points
        if v1.fuzzy_eq_eps(u1, eps) {
            // same point
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        // distinct points
        return NoIntersect;
    }

    if v_is_point {
        // v is point and u is not a point
        let seg2_t = parametric_from_point(u1, u2, v1, eps);
        if (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }

        return NoIntersect;
    }

    if u_is_point {
        // u is point and v is not a point
        let seg1_t = parametric_from_point(v1, v2, u1, eps);
        if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps) {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }

        return NoIntersect;
    }

    // neither segment is a point, check if they overlap
    let w2 = u2 - v1;
    let (mut seg1_t0, mut seg1_t1) = if v.x.fuzzy_eq_zero_eps(eps) {
        (-w.y / v.y, w2.y / v.y)
    } else {
        (-w.x / v.x, w2.x / v.x)
    };

    if seg1_t0 > seg1_t1 {
        std::mem::swap(&mut seg1_t0, &mut seg1_t1);
    }

    // using threshold check here to make intersect "sticky" to prefer considering it an intersect
    if !(seg1_t0 * seg1_length).fuzzy_lt_eps(seg1_length, eps)
        || !(seg1_t1 * seg1_length).fuzzy_gt_eps(T::zero(), eps)
    {
        return NoIntersect;
    }

    seg1_t0 = num_traits::real::Real::max(seg1_t0, T::zero());
    seg1_t1 = num_traits::real::Real::min(seg1_t1, T::one());

    if ((seg1_t1 - seg1_t0) * seg1_length).fuzzy_eq_zero_eps(eps) {
        // intersect is a single point (segments line up end to end)
        // determine if seg2_t is 0.0 or 1.0
        let touch_point = point_from_parametric(v1, v2, seg1_t0);
        let seg2_t = if touch_point.fuzzy_eq_eps(u1, eps) {
            T::zero()
        } else {
            T::one()
        };

        return TrueIntersect {
            seg1_t: seg1_t0,
            seg2_t,
        };
    }

    Overlapping { seg1_t0, seg1_t1 }
}
