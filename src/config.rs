//! Simulation configuration
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, require_non_negative, require_positive};
use crate::sim::BallParams;
use crate::wheel::WheelConfig;

/// Launch speed and start position chosen for a spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Launch {
    /// Starting angular position (degrees)
    pub position: f32,
    /// Initial angular velocity (degrees/s)
    pub speed: f32,
}

/// Full simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ball: BallParams,
    pub wheel: WheelConfig,
    /// Slowest launch (degrees/s)
    pub launch_speed_min: f32,
    /// Fastest launch (degrees/s)
    pub launch_speed_max: f32,
    /// Fixed timestep (seconds)
    pub timestep: f32,
    /// Give up after this many ticks
    pub max_ticks: u32,
    /// Seed for the launch RNG
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball: BallParams::default(),
            wheel: WheelConfig::default(),
            launch_speed_min: 600.0,
            launch_speed_max: 900.0,
            timestep: SIM_DT,
            max_ticks: MAX_TICKS,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.ball.validate()?;
        require_positive("timestep", self.timestep)?;
        require_non_negative("launch_speed_min", self.launch_speed_min)?;
        require_non_negative("launch_speed_max", self.launch_speed_max)?;
        if self.launch_speed_max < self.launch_speed_min {
            return Err(SimError::InvalidParameter {
                name: "launch_speed_max",
                value: self.launch_speed_max,
            });
        }
        if self.wheel.pocket_count == 0 {
            return Err(SimError::InvalidParameter {
                name: "pocket_count",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Deterministic launch for this config's seed
    pub fn launch(&self) -> Launch {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let position = rng.random_range(0.0..360.0);
        let speed = if self.launch_speed_max > self.launch_speed_min {
            rng.random_range(self.launch_speed_min..self.launch_speed_max)
        } else {
            self.launch_speed_min
        };
        Launch { position, speed }
    }
}
