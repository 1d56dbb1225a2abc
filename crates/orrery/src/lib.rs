//! Newtonian N-body simulation core
//!
//! Pairwise gravity, semi-implicit Euler integration, merging collisions
//! and a body registry that keeps trails and the camera follow reference
//! aligned with the bodies. Rendering and input handling live outside this
//! crate and only read the [`snapshot::Snapshot`]s it produces.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod presets;
pub mod simulation;
pub mod snapshot;
pub mod trail;

pub use body::{Body, BodyId, BodyState};
pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
pub use simulation::Simulation;
pub use snapshot::{BodySnapshot, Snapshot, StepReport};

#[cfg(test)]
mod body_test;
