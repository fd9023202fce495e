//! Fret collision detection and response
//!
//! The ball is a circle of `radius` riding a circular path; frets are radial
//! line segments. Contact is a plain point-to-segment distance test, and only
//! the first fret hit in scan order is resolved.

use glam::Vec2;

use super::vector::{DEGENERATE_SEGMENT_SQ, distance_point_to_segment, left_perp, safe_normalize};
use crate::consts::{FRET_FRICTION_RETAIN, RESTITUTION};
use crate::wheel::Fret;

/// A detected ball/fret contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretContact {
    /// Index of the fret in scan order
    pub index: usize,
    /// Wheel-relative angle of the fret (degrees)
    pub fret_angle: f32,
    /// Absolute endpoints at the time of contact
    pub start: Vec2,
    pub end: Vec2,
    /// Distance from ball center to the segment
    pub distance: f32,
}

/// Find the first fret the ball touches
///
/// Zero-length frets are skipped: they have no direction to bounce off.
pub fn find_fret_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    frets: &[Fret],
    wheel_rotation: f32,
) -> Option<FretContact> {
    frets.iter().enumerate().find_map(|(index, fret)| {
        let (start, end) = fret.line_endpoints(wheel_rotation);
        if (end - start).length_squared() < DEGENERATE_SEGMENT_SQ {
            return None;
        }

        let distance = distance_point_to_segment(ball_pos, start, end);
        (distance <= ball_radius).then_some(FretContact {
            index,
            fret_angle: fret.angle,
            start,
            end,
            distance,
        })
    })
}

/// Collision normal of a fret: its left perpendicular, normalized
#[inline]
pub fn fret_normal(start: Vec2, end: Vec2) -> Vec2 {
    safe_normalize(left_perp(end - start))
}

/// Inelastic bounce off a surface with the given unit normal
///
/// The normal part is reversed and scaled by restitution, the tangential
/// part loses a fixed share to friction.
pub fn bounce_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    let normal_part = normal * velocity.dot(normal);
    let tangent_part = velocity - normal_part;
    -normal_part * RESTITUTION + tangent_part * FRET_FRICTION_RETAIN
}

/// Linear velocity of a ball moving along its circular path
///
/// `position` in degrees, `angular_velocity` in degrees/s. The direction is
/// the counter-clockwise tangent at `position`.
pub fn tangential_velocity(position: f32, angular_velocity: f32, path_radius: f32) -> Vec2 {
    let theta = position.to_radians();
    let speed = angular_velocity.to_radians() * path_radius;
    Vec2::new(-theta.sin(), theta.cos()) * speed
}
