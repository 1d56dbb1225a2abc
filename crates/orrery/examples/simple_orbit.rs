//! Simple binary orbit example
//!
//! Two equal bodies on a circular orbit around their center of mass.
//! Prints separation and energy so the bounded error of the semi-implicit
//! Euler integrator can be watched over many orbits.
//!
//! Run with: cargo run --package orrery --example simple_orbit

use orrery::presets::binary;
use orrery::{Simulation, SimulationConfig};

fn main() -> orrery::Result<()> {
    env_logger::init();

    println!("Orrery Simple Orbit: circular binary\n");

    let g = 0.5;
    let (mass, separation) = (100.0, 40.0);
    let config = SimulationConfig::default().with_gravitational_constant(g);
    let mut sim = Simulation::new(config, binary(mass, 1.0, separation, g))?;

    // Period of a circular binary: 2π √(d³ / (G (m1 + m2)))
    let period = 2.0 * std::f64::consts::PI * (separation.powi(3) / (g * 2.0 * mass)).sqrt();
    let steps_per_orbit = 1_000;
    let dt = period / steps_per_orbit as f64;
    let orbits = 10;

    let e0 = sim.total_energy();
    println!("Period: {:.3}, dt: {:.5}, initial energy: {:.6}\n", period, dt, e0);
    println!("{:>6} {:>12} {:>14}", "orbit", "separation", "energy error");

    for orbit in 1..=orbits {
        sim.advance(dt, steps_per_orbit);

        let bodies = sim.bodies();
        let d = bodies[0].distance_to(&bodies[1]);
        let error = (sim.total_energy() - e0) / e0.abs();
        println!("{:>6} {:>12.6} {:>14.3e}", orbit, d, error);
    }

    println!("\nTrail points kept for the primary: {}", sim.trail(0).map_or(0, |t| t.len()));
    Ok(())
}
