//! WASM bindings for the orrery simulation.
//!
//! This crate exposes the physics core to a browser renderer. The renderer
//! owns the scene graph, camera and input; it sends commands here and draws
//! the snapshots it gets back.
//!
//! # Architecture
//!
//! Simulations are stored in thread-local storage (WASM is single-threaded).
//! Functions take an opaque simulation ID and return serializable snapshots;
//! the live state never leaves Rust.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! // Sun and five planets, collisions on
//! const simId = simulation_create_solar_system({ collisionsEnabled: true });
//!
//! // Add a comet
//! const index = simulation_add_body(simId, {
//!   name: "Comet",
//!   color: 0xffffff,
//!   mass: 0.1,
//!   radius: 2.0,
//!   position: [150.0, 0.0, 0.0],
//!   velocity: [0.0, 0.5, 0.0]
//! });
//!
//! // Once per animation frame
//! simulation_set_time_scale(simId, 2.0);
//! const { snapshot, mergers } = simulation_step(simId, FRAME_DT);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use orrery::presets::FRAME_DT;
use orrery::{BodyState, SimulationConfig};

pub mod handle;

#[cfg(test)]
mod handle_test;

use handle::Handle;

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// `undefined` and `null` mean "all defaults"
fn config_from_js(value: JsValue) -> Result<SimulationConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(SimulationConfig::default());
    }
    let config: SimulationConfig = from_js(value)?;
    config.validate()?;
    Ok(config)
}

// =============================================================================
// Thread-local storage for simulation state
// =============================================================================

thread_local! {
    static SIMULATIONS: RefCell<HashMap<u32, Handle>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn register(handle: Handle) -> u32 {
    let id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATIONS.with(|sims| {
        sims.borrow_mut().insert(id, handle);
    });

    id
}

fn with_handle<T>(
    sim_id: u32,
    f: impl FnOnce(&mut Handle) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SIMULATIONS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let handle = sims
            .get_mut(&sim_id)
            .ok_or_else(|| JsError::new(&format!("Simulation {} not found", sim_id)))?;
        f(handle)
    })
}

// =============================================================================
// Simulation management functions
// =============================================================================

/// Create a simulation from a config object and an array of bodies.
///
/// # Arguments
/// * `config` - Partial `SimulationConfig` (camelCase), or undefined
/// * `bodies` - Array of `{ name, color, mass, radius, position, velocity }`
///
/// # Returns
/// A simulation ID for use with the other functions
#[wasm_bindgen]
pub fn simulation_create(config: JsValue, bodies: JsValue) -> Result<u32, JsError> {
    let config = config_from_js(config)?;
    let bodies: Vec<BodyState> = from_js(bodies)?;
    let handle = Handle::new(config, bodies)?;
    Ok(register(handle))
}

/// Create a simulation holding the sun-and-planets preset.
#[wasm_bindgen]
pub fn simulation_create_solar_system(config: JsValue) -> Result<u32, JsError> {
    let config = config_from_js(config)?;
    let handle = Handle::solar_system(config)?;
    Ok(register(handle))
}

/// Delete a simulation to free memory.
#[wasm_bindgen]
pub fn simulation_delete(sim_id: u32) {
    SIMULATIONS.with(|sims| {
        sims.borrow_mut().remove(&sim_id);
    });
}

// =============================================================================
// Body management
// =============================================================================

/// Add a body to the simulation.
///
/// # Returns
/// The new body's index
#[wasm_bindgen]
pub fn simulation_add_body(sim_id: u32, body: JsValue) -> Result<usize, JsError> {
    let body: BodyState = from_js(body)?;
    with_handle(sim_id, |h| Ok(h.simulation.add_body(body)?))
}

/// Remove the body at `index`.
///
/// # Returns
/// The removed body's ID
#[wasm_bindgen]
pub fn simulation_remove_body(sim_id: u32, index: usize) -> Result<u32, JsError> {
    with_handle(sim_id, |h| Ok(h.simulation.remove_body(index)?.id.0))
}

/// Restore the configuration the simulation was created with.
#[wasm_bindgen]
pub fn simulation_reset(sim_id: u32) -> Result<(), JsError> {
    with_handle(sim_id, |h| {
        h.simulation.reset();
        Ok(())
    })
}

// =============================================================================
// Controls
// =============================================================================

#[wasm_bindgen]
pub fn simulation_set_collisions(sim_id: u32, enabled: bool) -> Result<(), JsError> {
    with_handle(sim_id, |h| {
        h.simulation.set_collisions_enabled(enabled);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn simulation_set_paused(sim_id: u32, paused: bool) -> Result<(), JsError> {
    with_handle(sim_id, |h| {
        h.simulation.set_paused(paused);
        Ok(())
    })
}

/// Set the playback speed multiplier applied to every frame timestep.
#[wasm_bindgen]
pub fn simulation_set_time_scale(sim_id: u32, scale: f64) -> Result<(), JsError> {
    with_handle(sim_id, |h| Ok(h.set_time_scale(scale)?))
}

/// Select the body the camera follows; pass undefined to follow nothing.
#[wasm_bindgen]
pub fn simulation_set_follow(sim_id: u32, index: Option<usize>) -> Result<(), JsError> {
    with_handle(sim_id, |h| Ok(h.simulation.set_follow_target(index)?))
}

// =============================================================================
// Simulation stepping
// =============================================================================

/// Advance the simulation by one rendered frame.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `frame_dt` - Unscaled frame timestep (see `frame_dt()`)
///
/// # Returns
/// `{ snapshot, mergers }`
#[wasm_bindgen]
pub fn simulation_step(sim_id: u32, frame_dt: f64) -> Result<JsValue, JsError> {
    with_handle(sim_id, |h| to_js(&h.frame(frame_dt)))
}

/// Default frame timestep at time scale 1.0.
#[wasm_bindgen]
pub fn frame_dt() -> f64 {
    FRAME_DT
}

// =============================================================================
// State queries
// =============================================================================

/// Get the current snapshot without stepping.
#[wasm_bindgen]
pub fn simulation_snapshot(sim_id: u32) -> Result<JsValue, JsError> {
    with_handle(sim_id, |h| to_js(&h.simulation.snapshot()))
}

/// Get trail points of every body.
#[wasm_bindgen]
pub fn simulation_trails(sim_id: u32) -> Result<JsValue, JsError> {
    with_handle(sim_id, |h| to_js(&h.trails()))
}

/// Get energy, momentum and mass totals for diagnostics.
#[wasm_bindgen]
pub fn simulation_energy(sim_id: u32) -> Result<JsValue, JsError> {
    with_handle(sim_id, |h| to_js(&h.energy()))
}

#[wasm_bindgen]
pub fn simulation_body_count(sim_id: u32) -> Result<usize, JsError> {
    with_handle(sim_id, |h| Ok(h.simulation.len()))
}
