use approx::assert_relative_eq;

use orrery::presets::FRAME_DT;
use orrery::{BodyState, SimulationConfig};

use crate::handle::Handle;

fn make_handle() -> Handle {
    Handle::new(
        SimulationConfig::default(),
        vec![
            BodyState::new("a", 0xffffff, 1.0, 1.0),
            BodyState::new("b", 0xffffff, 1.0, 1.0).at(10.0, 0.0, 0.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_frame_applies_time_scale() {
    let mut handle = make_handle();
    handle.set_time_scale(2.5).unwrap();

    let report = handle.frame(FRAME_DT);

    assert_relative_eq!(report.snapshot.time, FRAME_DT * 2.5);
}

#[test]
fn test_zero_time_scale_freezes_motion() {
    let mut handle = make_handle();
    handle.set_time_scale(0.0).unwrap();

    let report = handle.frame(FRAME_DT);

    assert_eq!(report.snapshot.bodies[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(report.snapshot.bodies[1].position, [10.0, 0.0, 0.0]);
}

#[test]
fn test_rejects_non_finite_time_scale() {
    let mut handle = make_handle();

    assert!(handle.set_time_scale(f64::NAN).is_err());
    assert_eq!(handle.time_scale(), 1.0);
}

#[test]
fn test_trails_keyed_by_id() {
    let mut handle = make_handle();
    handle.frame(FRAME_DT);
    handle.frame(FRAME_DT);
    handle.simulation.remove_body(0).unwrap();

    let trails = handle.trails();

    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].id.0, 1);
    assert_eq!(trails[0].points.len(), 2);
}

#[test]
fn test_energy_snapshot() {
    let handle = make_handle();

    let energy = handle.energy();

    assert_eq!(energy.kinetic_energy, 0.0);
    assert_relative_eq!(energy.potential_energy, -0.05);
    assert_relative_eq!(energy.total_energy, -0.05);
    assert_eq!(energy.total_mass, 2.0);
}

#[test]
fn test_solar_system_handle() {
    let handle = Handle::solar_system(SimulationConfig::default()).unwrap();
    assert_eq!(handle.simulation.len(), 6);
}
