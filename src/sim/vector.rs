//! 2D vector helpers on top of `glam::Vec2`
//!
//! Addition, subtraction, scaling, dot product and length come from glam.
//! What lives here is the segment math the fret collision needs.

use glam::Vec2;

/// Segments shorter than this (squared) are treated as a single point
pub const DEGENERATE_SEGMENT_SQ: f32 = 1e-8;

/// Unit vector in the direction of `v`, or zero if `v` has no length
#[inline]
pub fn safe_normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Left-hand perpendicular: (-y, x)
#[inline]
pub fn left_perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Closest point on the closed segment [a, b] to `p`
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq < DEGENERATE_SEGMENT_SQ {
        return a;
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    a + seg * t
}

/// Shortest distance from `p` to the closed segment [a, b]
///
/// The projection is clamped to the segment, so points past either end
/// measure to that endpoint rather than to the infinite line.
#[inline]
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p - closest_point_on_segment(p, a, b)).length()
}
