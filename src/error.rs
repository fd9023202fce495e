//! Error type for simulation setup, stepping and config loading

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// `update` was called with a non-positive or non-finite timestep
    InvalidTimestep(f32),
    /// A tunable is outside its valid range
    InvalidParameter { name: &'static str, value: f32 },
    /// Config file could not be parsed
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep(dt) => write!(f, "invalid timestep: {dt} (must be > 0)"),
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value}")
            }
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

/// Require a strictly positive, finite value
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

/// Require a finite value
pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

/// Require a non-negative, finite value
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("mass", 1.0).is_ok());
        assert!(require_positive("mass", 0.0).is_err());
        assert!(require_positive("mass", f32::NAN).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("decay", 0.0).is_ok());
        assert!(require_non_negative("decay", -0.1).is_err());
        assert!(require_non_negative("decay", f32::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("position", -720.0).is_ok());
        assert!(require_finite("position", f32::NAN).is_err());
        assert!(require_finite("position", f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = SimError::InvalidParameter {
            name: "radius",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid parameter radius: -1");
        assert!(SimError::InvalidTimestep(0.0).to_string().contains("timestep"));
    }
}
