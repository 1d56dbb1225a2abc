//! Simulation configuration
//!
//! All fields have defaults, so a partial (or empty) JSON object is a valid
//! configuration:
//!
//! ```
//! use orrery::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(r#"{ "collisionsEnabled": true }"#).unwrap();
//! assert!(config.collisions_enabled);
//! assert_eq!(config.gravitational_constant, 0.5);
//! assert_eq!(config.trail_length, 300);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Gravitational constant scaled for the default (visual) unit system
pub const DEFAULT_G: f64 = 0.5;

/// Number of past positions kept per body
pub const DEFAULT_TRAIL_LENGTH: usize = 300;

/// Smallest separation used in the force law
///
/// Only reachable when collisions are disabled and two bodies pass through
/// each other. Keeps the force finite; it is not a physical softening.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Gravitational constant in simulation units
    pub gravitational_constant: f64,
    /// Merge overlapping bodies instead of letting them attract
    pub collisions_enabled: bool,
    /// Maximum points per trail (0 disables trail recording)
    pub trail_length: usize,
    /// Distance floor for the force law
    pub min_distance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_G,
            collisions_enabled: false,
            trail_length: DEFAULT_TRAIL_LENGTH,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration from JSON and validates it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style toggle for collisions
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    /// Builder-style override of the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "gravitational constant must be finite and > 0, got {g}"
            )));
        }
        let floor = self.min_distance;
        if !floor.is_finite() || floor <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "minimum distance must be finite and > 0, got {floor}"
            )));
        }
        Ok(())
    }
}
