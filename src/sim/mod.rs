//! Deterministic ball simulation
//!
//! This module must stay pure and deterministic:
//! - Caller-driven timestep, no internal timing
//! - Stable fret iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{FretContact, bounce_velocity, find_fret_contact, fret_normal};
pub use state::{Ball, BallParams, BallPhase, SimEvent};
pub use tick::{BallSim, SpinOutcome};
pub use vector::distance_point_to_segment;
