//! Roulette Sim - ball motion on a spinning roulette wheel
//!
//! Core modules:
//! - `sim`: Deterministic ball stepper (decay, drop, fret collisions, stopping)
//! - `wheel`: Wheel geometry and the fret provider seam
//! - `config`: Data-driven simulation tuning (JSON)
//! - `report`: Read-only snapshots for display
//! - `error`: Error type shared by construction, update and config loading

pub mod config;
pub mod error;
pub mod report;
pub mod sim;
pub mod wheel;

pub use config::SimConfig;
pub use error::SimError;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Default fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Tick cap for `run_to_rest` so a misconfigured spin cannot loop forever
    pub const MAX_TICKS: u32 = 60 * 600;

    /// Fraction of normal speed kept (and reversed) after a fret bounce
    pub const RESTITUTION: f32 = 0.3;
    /// Fraction of tangential speed kept after a fret bounce (10% friction loss)
    pub const FRET_FRICTION_RETAIN: f32 = 0.9;

    /// Rolling resistance coefficient once the ball has dropped
    pub const ROLLING_RESISTANCE: f32 = 0.01;
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Solid sphere moment of inertia factor (I = 2/5 m r²)
    pub const SOLID_SPHERE_INERTIA: f32 = 0.4;

    /// Ball defaults
    pub const BALL_DECAY: f32 = 0.3;
    pub const BALL_DROP_THRESHOLD: f32 = 100.0;
    pub const BALL_STOP_THRESHOLD: f32 = 5.0;
    pub const BALL_MASS: f32 = 1.0;
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_PATH_RADIUS: f32 = 10.0;

    /// Wheel defaults (European single zero)
    pub const POCKET_COUNT: usize = 37;
    pub const FRET_INNER_RADIUS: f32 = 8.5;
    pub const FRET_OUTER_RADIUS: f32 = 11.5;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of a vector in degrees, normalized to [0, 360)
#[inline]
pub fn heading_degrees(v: Vec2) -> f32 {
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!(normalize_degrees(-1e-9) < 360.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 90.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_degrees() {
        assert!((heading_degrees(Vec2::new(0.0, -1.0)) - 270.0).abs() < 1e-4);
        assert!((heading_degrees(Vec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
    }
}
