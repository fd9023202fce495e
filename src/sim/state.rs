//! Ball state and core simulation types

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, require_non_negative, require_positive};

/// Where the ball is in its one-way lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// Riding the outer track, only decaying
    Spinning,
    /// Dropped into the pocket ring, colliding with frets
    Dropping,
    /// At rest; further updates do nothing
    Stopped,
}

/// Notifications emitted by `update`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SimEvent {
    /// Angular velocity fell to the drop threshold (once)
    DropStarted,
    /// Ball hit the fret at this wheel-relative angle (at most once per tick)
    CollisionOccurred { fret_angle: f32 },
    /// Ball came to rest (once)
    Stopped,
}

/// Tunable ball parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallParams {
    /// Exponential decay rate of angular velocity (1/s)
    pub decay_coefficient: f32,
    /// Angular velocity (deg/s) at or below which the ball stops
    pub stopping_threshold: f32,
    /// Angular velocity (deg/s) at or below which the ball drops
    pub drop_threshold: f32,
    pub mass: f32,
    /// Physical radius of the ball
    pub radius: f32,
    /// Radius of the ball's circular path around the wheel center
    pub path_radius: f32,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            decay_coefficient: BALL_DECAY,
            stopping_threshold: BALL_STOP_THRESHOLD,
            drop_threshold: BALL_DROP_THRESHOLD,
            mass: BALL_MASS,
            radius: BALL_RADIUS,
            path_radius: BALL_PATH_RADIUS,
        }
    }
}

impl BallParams {
    /// Reject values that would make the physics degenerate
    pub fn validate(&self) -> Result<(), SimError> {
        require_non_negative("decay_coefficient", self.decay_coefficient)?;
        require_non_negative("stopping_threshold", self.stopping_threshold)?;
        require_non_negative("drop_threshold", self.drop_threshold)?;
        require_positive("mass", self.mass)?;
        require_positive("radius", self.radius)?;
        require_positive("path_radius", self.path_radius)?;
        Ok(())
    }

    /// Solid sphere moment of inertia: 0.4 * m * r²
    #[inline]
    pub fn moment_of_inertia(&self) -> f32 {
        SOLID_SPHERE_INERTIA * self.mass * self.radius * self.radius
    }

    /// Constant angular deceleration from rolling resistance
    pub fn rolling_deceleration(&self) -> f32 {
        let torque = ROLLING_RESISTANCE * self.path_radius * self.mass * GRAVITY;
        torque / self.moment_of_inertia()
    }
}

/// Kinematic state of the ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Angular position (degrees, [0, 360))
    pub position: f32,
    /// Angular speed (degrees/s, never negative)
    pub angular_velocity: f32,
    /// Launch speed the decay curve is anchored to (degrees/s)
    pub initial_angular_velocity: f32,
    /// Simulated seconds since launch
    pub elapsed_time: f32,
    pub phase: BallPhase,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: 0.0,
            angular_velocity: 0.0,
            initial_angular_velocity: 0.0,
            elapsed_time: 0.0,
            phase: BallPhase::Spinning,
        }
    }
}

impl Ball {
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.phase == BallPhase::Stopped
    }

    #[inline]
    pub fn has_dropped(&self) -> bool {
        self.phase != BallPhase::Spinning
    }
}
