//! Wheel geometry: radial frets and the provider seam the ball reads through
//!
//! Fret angles are relative to the wheel. Their absolute position rotates with
//! the wheel, so endpoints are always computed against a rotation angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{normalize_degrees, polar_to_cartesian};

/// European single-zero pocket order, clockwise from zero
pub const EUROPEAN_POCKETS: [u32; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// A radial divider between two pockets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fret {
    /// Angle relative to the wheel (degrees)
    pub angle: f32,
    /// Distance of the inner end from the wheel center
    pub inner_radius: f32,
    /// Distance of the outer end from the wheel center
    pub outer_radius: f32,
}

impl Fret {
    pub fn new(angle: f32, inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            angle: normalize_degrees(angle),
            inner_radius,
            outer_radius,
        }
    }

    /// Inner and outer endpoints in absolute cartesian space
    pub fn line_endpoints(&self, wheel_rotation: f32) -> (Vec2, Vec2) {
        let theta = self.angle + wheel_rotation;
        (
            polar_to_cartesian(self.inner_radius, theta),
            polar_to_cartesian(self.outer_radius, theta),
        )
    }
}

/// Read-only view of the wheel the ball collides against
pub trait WheelProvider {
    /// Current wheel rotation (degrees)
    fn rotation_angle(&self) -> f32;
    /// Frets in collision scan order
    fn frets(&self) -> &[Fret];
}

impl<W: WheelProvider + ?Sized> WheelProvider for &W {
    fn rotation_angle(&self) -> f32 {
        (**self).rotation_angle()
    }

    fn frets(&self) -> &[Fret] {
        (**self).frets()
    }
}

/// Wheel layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Number of pockets (and frets)
    pub pocket_count: usize,
    pub fret_inner_radius: f32,
    pub fret_outer_radius: f32,
    /// Starting rotation (degrees)
    pub rotation: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pocket_count: POCKET_COUNT,
            fret_inner_radius: FRET_INNER_RADIUS,
            fret_outer_radius: FRET_OUTER_RADIUS,
            rotation: 0.0,
        }
    }
}

/// A roulette wheel with evenly spaced frets
#[derive(Debug, Clone)]
pub struct Wheel {
    rotation: f32,
    frets: Vec<Fret>,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::from_config(&WheelConfig::default())
    }
}

impl Wheel {
    /// Build a wheel with one fret at the start of every pocket
    pub fn from_config(config: &WheelConfig) -> Self {
        let count = config.pocket_count.max(1);
        let span = 360.0 / count as f32;
        let frets = (0..count)
            .map(|i| {
                Fret::new(
                    i as f32 * span,
                    config.fret_inner_radius,
                    config.fret_outer_radius,
                )
            })
            .collect();

        Self {
            rotation: normalize_degrees(config.rotation),
            frets,
        }
    }

    /// Wheel with an explicit fret list (scan order is preserved)
    pub fn with_frets(rotation: f32, frets: Vec<Fret>) -> Self {
        Self {
            rotation: normalize_degrees(rotation),
            frets,
        }
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    /// Angular width of one pocket (degrees)
    pub fn pocket_span(&self) -> f32 {
        360.0 / self.frets.len().max(1) as f32
    }

    /// Pocket number under an absolute angle
    ///
    /// Pocket `i` spans from fret `i` to fret `i + 1`. The standard European
    /// numbering is used for a 37-pocket wheel, the pocket index otherwise.
    pub fn pocket_at(&self, absolute_angle: f32) -> u32 {
        let relative = normalize_degrees(absolute_angle - self.rotation);
        let count = self.frets.len().max(1);
        let index = ((relative / self.pocket_span()) as usize).min(count - 1);

        if count == EUROPEAN_POCKETS.len() {
            EUROPEAN_POCKETS[index]
        } else {
            index as u32
        }
    }
}

impl WheelProvider for Wheel {
    fn rotation_angle(&self) -> f32 {
        self.rotation
    }

    fn frets(&self) -> &[Fret] {
        &self.frets
    }
}
