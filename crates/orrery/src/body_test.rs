use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId, BodyState};
use crate::error::SimulationError;

fn make_body(mass: f64, position: [f64; 3], velocity: [f64; 3]) -> Body {
    let state = BodyState::new("test", 0xffffff, mass, 1.0)
        .at(position[0], position[1], position[2])
        .moving(velocity[0], velocity[1], velocity[2]);
    Body::from_state(BodyId(0), &state).unwrap()
}

#[test]
fn test_from_state_copies_fields() {
    let state = BodyState::new("Earth", 0x00bfff, 1.0, 6.0)
        .at(50.0, 0.0, 0.0)
        .moving(0.0, 0.0, 1.4);
    let body = Body::from_state(BodyId(7), &state).unwrap();

    assert_eq!(body.id, BodyId(7));
    assert_eq!(body.name, "Earth");
    assert_eq!(body.color, 0x00bfff);
    assert_eq!(body.mass, 1.0);
    assert_eq!(body.radius, 6.0);
    assert_eq!(body.position, Point3::new(50.0, 0.0, 0.0));
    assert_eq!(body.velocity, Vector3::new(0.0, 0.0, 1.4));
    assert_eq!(body.acceleration(), Vector3::zeros());
}

#[test]
fn test_to_state_round_trip() {
    let state = BodyState::new("Mars", 0xff6b6b, 0.8, 5.0)
        .at(0.0, 80.0, 0.0)
        .moving(1.1, 0.0, 0.0);
    let body = Body::from_state(BodyId(2), &state).unwrap();

    assert_eq!(body.to_state(), state);
}

#[test]
fn test_rejects_non_positive_mass() {
    let state = BodyState::new("ghost", 0, 0.0, 1.0);
    let err = Body::from_state(BodyId(0), &state).unwrap_err();

    assert!(matches!(err, SimulationError::InvalidBodyState { mass, .. } if mass == 0.0));
}

#[test]
fn test_rejects_negative_radius() {
    let state = BodyState::new("ghost", 0, 1.0, -2.0);
    assert!(matches!(
        state.validate(),
        Err(SimulationError::InvalidBodyState { .. })
    ));
}

#[test]
fn test_rejects_nan_and_infinite_values() {
    assert!(BodyState::new("nan", 0, f64::NAN, 1.0).validate().is_err());
    assert!(BodyState::new("inf", 0, 1.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_apply_force_divides_by_mass() {
    let mut body = make_body(4.0, [0.0; 3], [0.0; 3]);

    body.apply_force(Vector3::new(8.0, -4.0, 2.0));
    body.apply_force(Vector3::new(4.0, 0.0, 0.0));

    assert_eq!(body.acceleration(), Vector3::new(3.0, -1.0, 0.5));
}

#[test]
fn test_integrate_updates_velocity_before_position() {
    let mut body = make_body(1.0, [0.0; 3], [1.0, 0.0, 0.0]);
    body.apply_force(Vector3::new(2.0, 0.0, 0.0));

    body.integrate(1.0);

    // v = 1 + 2*1 = 3, x = 0 + 3*1 (explicit Euler would give 1)
    assert_eq!(body.velocity, Vector3::new(3.0, 0.0, 0.0));
    assert_eq!(body.position, Point3::new(3.0, 0.0, 0.0));
}

#[test]
fn test_integrate_clears_acceleration() {
    let mut body = make_body(1.0, [0.0; 3], [0.0; 3]);
    body.apply_force(Vector3::new(1.0, 1.0, 1.0));

    body.integrate(0.1);
    assert_eq!(body.acceleration(), Vector3::zeros());

    // A second step without new forces is pure drift
    let velocity = body.velocity;
    body.integrate(0.1);
    assert_eq!(body.velocity, velocity);
}

#[test]
fn test_integrate_zero_dt_is_noop() {
    let mut body = make_body(1.0, [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    body.apply_force(Vector3::new(1.0, 0.0, 0.0));

    body.integrate(0.0);

    assert_eq!(body.position, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(body.velocity, Vector3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_negative_dt_reverses_drift() {
    let mut body = make_body(1.0, [0.0; 3], [2.0, 0.0, 0.0]);

    body.integrate(1.0);
    body.integrate(-1.0);

    assert_eq!(body.position, Point3::origin());
}

#[test]
fn test_momentum() {
    let body = make_body(2.0, [1.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
    assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
}

#[test]
fn test_kinetic_energy() {
    let body = make_body(2.0, [0.0; 3], [3.0, 4.0, 0.0]);

    // KE = 0.5 * 2 * 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_and_speed() {
    let a = make_body(1.0, [0.0; 3], [0.0, 3.0, 4.0]);
    let b = make_body(1.0, [2.0, 3.0, 6.0], [0.0; 3]);

    assert_eq!(a.distance_to(&b), 7.0);
    assert_eq!(a.speed(), 5.0);
}

#[test]
fn test_volume() {
    let body = make_body(1.0, [0.0; 3], [0.0; 3]);
    assert_relative_eq!(body.volume(), 4.0 / 3.0 * std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn test_body_state_deserializes_camel_case() {
    let json = r#"{
        "name": "Comet",
        "color": 16777215,
        "mass": 0.1,
        "radius": 0.5,
        "position": [1.0, 2.0, 3.0],
        "velocity": [0.0, -1.0, 0.0]
    }"#;
    let state: BodyState = serde_json::from_str(json).unwrap();

    assert_eq!(state.name, "Comet");
    assert_eq!(state.position, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(state.velocity, Vector3::new(0.0, -1.0, 0.0));
}
