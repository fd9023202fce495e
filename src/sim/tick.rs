//! Per-tick ball stepping
//!
//! Each `update` runs, in order: elapsed time, exponential decay, drop check,
//! position integration, (once dropped) fret collision and rolling resistance,
//! then the stop check. Later steps read what earlier steps wrote.

use serde::Serialize;

use super::collision::{bounce_velocity, find_fret_contact, fret_normal, tangential_velocity};
use super::state::{Ball, BallParams, BallPhase, SimEvent};
use crate::error::{SimError, require_finite, require_non_negative};
use crate::wheel::{Wheel, WheelProvider};
use crate::{heading_degrees, normalize_degrees, polar_to_cartesian};

/// Result of running a spin until the ball rests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    /// Resting angular position (degrees)
    pub position: f32,
    /// Pocket under the ball, if it stopped
    pub pocket: Option<u32>,
    pub ticks: u32,
    pub elapsed_time: f32,
    pub collisions: u32,
    pub stopped: bool,
}

/// Ball simulation bound to a wheel
///
/// The wheel is only read. Its owner may rotate it between updates through
/// `wheel_mut`.
#[derive(Debug, Clone)]
pub struct BallSim<W = Wheel> {
    wheel: W,
    params: BallParams,
    ball: Ball,
    events: Vec<SimEvent>,
}

impl<W: WheelProvider> BallSim<W> {
    /// Bind a new, unlaunched ball to `wheel`
    pub fn new(wheel: W, params: BallParams) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self {
            wheel,
            params,
            ball: Ball::default(),
            events: Vec::new(),
        })
    }

    /// Start a spin at `position` (degrees) with the given launch speed (degrees/s)
    pub fn launch(&mut self, position: f32, initial_angular_velocity: f32) -> Result<(), SimError> {
        require_finite("position", position)?;
        require_non_negative("initial_angular_velocity", initial_angular_velocity)?;
        self.ball = Ball {
            position: normalize_degrees(position),
            angular_velocity: initial_angular_velocity,
            initial_angular_velocity,
            elapsed_time: 0.0,
            phase: BallPhase::Spinning,
        };
        self.events.clear();
        Ok(())
    }

    /// Advance the ball by `dt` seconds
    ///
    /// Does nothing once the ball has stopped. A non-positive `dt` is
    /// rejected before any state changes.
    pub fn update(&mut self, dt: f32) -> Result<(), SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Rejected update with dt={}", dt);
            return Err(SimError::InvalidTimestep(dt));
        }
        if self.ball.is_stopped() {
            return Ok(());
        }

        self.ball.elapsed_time += dt;
        self.ball.angular_velocity = self.ball.initial_angular_velocity
            * (-self.params.decay_coefficient * self.ball.elapsed_time).exp();

        if self.ball.phase == BallPhase::Spinning
            && self.ball.angular_velocity <= self.params.drop_threshold
        {
            self.ball.phase = BallPhase::Dropping;
            self.emit(SimEvent::DropStarted);
            log::info!(
                "Ball dropped at t={:.2}s, {:.1} deg/s",
                self.ball.elapsed_time,
                self.ball.angular_velocity
            );
        }

        self.ball.position =
            normalize_degrees(self.ball.position + self.ball.angular_velocity * dt);

        if self.ball.has_dropped() {
            self.resolve_fret_collision();
            self.apply_rolling_resistance(dt);
        }

        if self.ball.angular_velocity <= self.params.stopping_threshold {
            self.ball.angular_velocity = 0.0;
            self.ball.phase = BallPhase::Stopped;
            self.emit(SimEvent::Stopped);
            log::info!(
                "Ball stopped at {:.1} deg after {:.2}s",
                self.ball.position,
                self.ball.elapsed_time
            );
        }

        Ok(())
    }

    /// Resolve at most one fret contact this tick
    fn resolve_fret_collision(&mut self) {
        let ball_pos = polar_to_cartesian(self.params.path_radius, self.ball.position);
        let Some(contact) = find_fret_contact(
            ball_pos,
            self.params.radius,
            self.wheel.frets(),
            self.wheel.rotation_angle(),
        ) else {
            return;
        };

        let normal = fret_normal(contact.start, contact.end);
        let velocity = tangential_velocity(
            self.ball.position,
            self.ball.angular_velocity,
            self.params.path_radius,
        );
        let bounced = bounce_velocity(velocity, normal);

        // Speed only; the new heading becomes the ball's angular position
        self.ball.angular_velocity = (bounced.length() / self.params.path_radius).to_degrees();
        self.ball.position = heading_degrees(bounced);

        self.emit(SimEvent::CollisionOccurred {
            fret_angle: contact.fret_angle,
        });
        log::debug!(
            "Fret {} ({:.1} deg) hit at {:.3} from center, speed now {:.1} deg/s",
            contact.index,
            contact.fret_angle,
            contact.distance,
            self.ball.angular_velocity
        );
    }

    fn apply_rolling_resistance(&mut self, dt: f32) {
        let decel = self.params.rolling_deceleration();
        self.ball.angular_velocity = (self.ball.angular_velocity - decel * dt).max(0.0);
    }

    fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    ///
    /// Events queue up until drained, so a caller driving `update` directly
    /// should drain every tick. `run_to_rest` drains for you.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Step at a fixed `dt` until the ball stops or `max_ticks` is reached
    ///
    /// After every tick `on_tick` sees the sim and the events that tick
    /// emitted; those events are drained from the queue.
    pub fn run_to_rest<F>(
        &mut self,
        dt: f32,
        max_ticks: u32,
        mut on_tick: F,
    ) -> Result<SpinOutcome, SimError>
    where
        F: FnMut(&Self, &[SimEvent]),
    {
        let mut ticks = 0;
        let mut collisions = 0;

        while !self.ball.is_stopped() && ticks < max_ticks {
            self.update(dt)?;
            ticks += 1;

            let events = self.drain_events();
            collisions += events
                .iter()
                .filter(|e| matches!(e, SimEvent::CollisionOccurred { .. }))
                .count() as u32;
            on_tick(self, &events);
        }

        Ok(SpinOutcome {
            position: self.ball.position,
            pocket: None,
            ticks,
            elapsed_time: self.ball.elapsed_time,
            collisions,
            stopped: self.ball.is_stopped(),
        })
    }

    pub fn position(&self) -> f32 {
        self.ball.position
    }

    pub fn angular_velocity(&self) -> f32 {
        self.ball.angular_velocity
    }

    pub fn is_stopped(&self) -> bool {
        self.ball.is_stopped()
    }

    pub fn has_dropped(&self) -> bool {
        self.ball.has_dropped()
    }

    pub fn phase(&self) -> BallPhase {
        self.ball.phase
    }

    pub fn elapsed_time(&self) -> f32 {
        self.ball.elapsed_time
    }

    pub fn params(&self) -> &BallParams {
        &self.params
    }

    pub fn wheel(&self) -> &W {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut W {
        &mut self.wheel
    }
}

impl BallSim<Wheel> {
    /// Run to rest and resolve the pocket the ball landed in
    pub fn spin_to_pocket<F>(
        &mut self,
        dt: f32,
        max_ticks: u32,
        on_tick: F,
    ) -> Result<SpinOutcome, SimError>
    where
        F: FnMut(&Self, &[SimEvent]),
    {
        let mut outcome = self.run_to_rest(dt, max_ticks, on_tick)?;
        if outcome.stopped {
            outcome.pocket = Some(self.wheel.pocket_at(outcome.position));
        }
        Ok(outcome)
    }
}
