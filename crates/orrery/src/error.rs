//! Error types for the simulation core

use thiserror::Error;

/// Failures reported synchronously to callers of the simulation API
///
/// Every variant is caller-correctable. A rejected call leaves the
/// simulation exactly as it was before the call.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A body was described with a non-positive (or non-finite) mass or radius
    #[error("invalid body state for '{name}': mass={mass}, radius={radius} (both must be finite and > 0)")]
    InvalidBodyState { name: String, mass: f64, radius: f64 },

    /// An index did not refer to a live body
    #[error("body index {index} out of range (body count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The simulation configuration is unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or body data could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
