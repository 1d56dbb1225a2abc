//! Read-only copies of simulation state for rendering

use serde::Serialize;

use crate::body::{Body, BodyId};
use crate::collisions::MergeRecord;

/// Per-body readout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: BodyId,
    pub name: String,
    pub color: u32,
    pub mass: f64,
    pub radius: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            name: body.name.clone(),
            color: body.color,
            mass: body.mass,
            radius: body.radius,
            position: [body.position.x, body.position.y, body.position.z],
            velocity: [body.velocity.x, body.velocity.y, body.velocity.z],
        }
    }
}

/// Complete simulation readout
///
/// Owns all of its data; holding one never borrows the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Simulation time
    pub time: f64,
    /// Steps taken since construction or the last reset
    pub steps: u64,
    /// Live bodies in registry order
    pub bodies: Vec<BodySnapshot>,
    /// Index of the followed body, if any
    pub follow: Option<usize>,
}

impl Snapshot {
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

/// Result of one `Simulation::step`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub snapshot: Snapshot,
    /// Mergers applied during the step, in application order
    pub mergers: Vec<MergeRecord>,
}
