//! Per-simulation state held on behalf of JavaScript callers
//!
//! Everything here is plain Rust so it can be exercised without a JS
//! runtime; `lib.rs` only adds the `wasm_bindgen` surface.

use serde::Serialize;

use orrery::body::BodyId;
use orrery::{BodyState, Result, Simulation, SimulationConfig, SimulationError, StepReport};

/// Trail points of one body, keyed by its stable id
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSnapshot {
    pub id: BodyId,
    /// Oldest first, [x, y, z] each
    pub points: Vec<[f64; 3]>,
}

/// Conserved quantities for diagnostics overlays
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySnapshot {
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub momentum: [f64; 3],
    pub total_mass: f64,
}

/// A simulation plus the playback speed chosen by the UI
///
/// The time scale belongs to the caller, not the physics: it only
/// multiplies the frame timestep before it reaches `Simulation::step`.
pub struct Handle {
    pub simulation: Simulation,
    time_scale: f64,
}

impl Handle {
    pub fn new(config: SimulationConfig, bodies: Vec<BodyState>) -> Result<Self> {
        Ok(Self {
            simulation: Simulation::new(config, bodies)?,
            time_scale: 1.0,
        })
    }

    pub fn solar_system(config: SimulationConfig) -> Result<Self> {
        Ok(Self {
            simulation: Simulation::with_solar_system(config)?,
            time_scale: 1.0,
        })
    }

    /// Advance by one rendered frame
    pub fn frame(&mut self, frame_dt: f64) -> StepReport {
        self.simulation.step(frame_dt * self.time_scale)
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f64) -> Result<()> {
        if !scale.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "time scale must be finite, got {scale}"
            )));
        }
        self.time_scale = scale;
        Ok(())
    }

    pub fn trails(&self) -> Vec<TrailSnapshot> {
        self.simulation
            .bodies()
            .iter()
            .zip(self.simulation.trails())
            .map(|(body, trail)| TrailSnapshot {
                id: body.id,
                points: trail.to_vec(),
            })
            .collect()
    }

    pub fn energy(&self) -> EnergySnapshot {
        let sim = &self.simulation;
        let kinetic_energy = sim.kinetic_energy();
        let potential_energy = sim.potential_energy();
        let p = sim.total_momentum();

        EnergySnapshot {
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
            momentum: [p.x, p.y, p.z],
            total_mass: sim.total_mass(),
        }
    }
}
