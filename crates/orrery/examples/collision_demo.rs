//! Collision and merger example
//!
//! Runs the sun-and-planets preset with collisions enabled and reports each
//! merger as it happens.
//!
//! Run with: RUST_LOG=debug cargo run --package orrery --example collision_demo

use orrery::presets::FRAME_DT;
use orrery::{Simulation, SimulationConfig};

fn main() -> orrery::Result<()> {
    env_logger::init();

    println!("Orrery Collision Demo\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig::default().with_collisions(true);
    let mut sim = Simulation::with_solar_system(config)?;

    println!("\nInitial system:");
    for (i, body) in sim.bodies().iter().enumerate() {
        println!(
            "  [{}] {:8} m={:7.2} r={:5.2} pos=({:7.2}, {:7.2}, {:7.2})",
            i, body.name, body.mass, body.radius, body.position.x, body.position.y, body.position.z
        );
    }

    let p0 = sim.total_momentum();
    let m0 = sim.total_mass();
    let total_frames = 5_000;

    println!("\nSimulation parameters:");
    println!("  Frame timestep: {}", FRAME_DT);
    println!("  Frames: {}", total_frames);
    println!("  G: {}", sim.gravitational_constant());

    println!("\n{}", "=".repeat(60));
    println!("Starting simulation...\n");

    let mut merger_count = 0;
    for _ in 0..total_frames {
        let report = sim.step(FRAME_DT);
        for merger in &report.mergers {
            merger_count += 1;
            println!(
                "t={:8.2}: {} absorbed {} -> mass={:.3}, radius={:.3}",
                report.snapshot.time,
                merger.absorber_name,
                merger.absorbed_name,
                merger.mass,
                merger.radius
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Simulation complete!\n");
    println!("Final statistics:");
    println!("  Final time: {:.2}", sim.time());
    println!("  Surviving bodies: {}", sim.len());
    println!("  Mergers: {}", merger_count);
    println!(
        "  Mass change: {:.3e} (should be ~0)",
        sim.total_mass() - m0
    );
    println!(
        "  Momentum drift: {:.3e} (should be ~0)",
        (sim.total_momentum() - p0).magnitude()
    );

    for body in sim.bodies() {
        println!(
            "  {:8} m={:8.2} r={:6.2} speed={:.3}",
            body.name,
            body.mass,
            body.radius,
            body.speed()
        );
    }

    Ok(())
}
