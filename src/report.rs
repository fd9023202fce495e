//! Read-only ball snapshots for display

use serde::Serialize;

use crate::sim::{BallPhase, BallSim, SimEvent};
use crate::wheel::WheelProvider;

/// What a display needs to draw the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSnapshot {
    pub position: f32,
    pub angular_velocity: f32,
    pub phase: BallPhase,
    pub is_stopped: bool,
    pub elapsed_time: f32,
}

impl BallSnapshot {
    pub fn capture<W: WheelProvider>(sim: &BallSim<W>) -> Self {
        Self {
            position: sim.position(),
            angular_velocity: sim.angular_velocity(),
            phase: sim.phase(),
            is_stopped: sim.is_stopped(),
            elapsed_time: sim.elapsed_time(),
        }
    }

    /// One-line console status
    pub fn status_line(&self) -> String {
        let phase = match self.phase {
            BallPhase::Spinning => "spinning",
            BallPhase::Dropping => "dropping",
            BallPhase::Stopped => "stopped",
        };
        format!(
            "t={:>6.2}s  pos={:>6.1}°  vel={:>7.1}°/s  {}",
            self.elapsed_time, self.position, self.angular_velocity, phase
        )
    }
}

/// Human readable text for an event
pub fn describe_event(event: &SimEvent) -> String {
    match event {
        SimEvent::DropStarted => "Ball dropped into the pocket ring".to_string(),
        SimEvent::CollisionOccurred { fret_angle } => {
            format!("Ball hit fret at {fret_angle:.1}°")
        }
        SimEvent::Stopped => "Ball came to rest".to_string(),
    }
}
