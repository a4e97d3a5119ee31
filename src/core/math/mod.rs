//! Core/common math functions for working with 2D points, segments, and intersections.
mod base_math;
mod seg_seg_intersect;
mod vector2;

pub use base_math::*;
pub use seg_seg_intersect::{seg_seg_intr, SegSegIntr};
pub use vector2::Vector2;
