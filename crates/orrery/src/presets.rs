//! Ready-made initial configurations
//!
//! Values are in visual simulation units and pair with the default
//! gravitational constant (`G = 0.5`).

use crate::body::BodyState;

/// Simulation time advanced per rendered frame at time scale 1.0
pub const FRAME_DT: f64 = 0.16;

/// A heavy central star with five planets
///
/// Index 0 is the Sun, which renderers use as the default camera target.
///
/// # Examples
///
/// ```
/// use orrery::presets::solar_system;
///
/// let bodies = solar_system();
/// assert_eq!(bodies.len(), 6);
/// assert_eq!(bodies[0].name, "Sun");
/// assert!(bodies.iter().all(|b| b.validate().is_ok()));
/// ```
pub fn solar_system() -> Vec<BodyState> {
    vec![
        BodyState::new("Sun", 0xffff00, 1000.0, 15.0),
        BodyState::new("Earth", 0x00bfff, 1.0, 6.0)
            .at(50.0, 0.0, 0.0)
            .moving(0.0, 0.0, 1.4),
        BodyState::new("Mars", 0xff6b6b, 0.8, 5.0)
            .at(0.0, 80.0, 0.0)
            .moving(1.1, 0.0, 0.0),
        BodyState::new("Venus", 0xffa500, 0.9, 5.5)
            .at(-70.0, 0.0, 0.0)
            .moving(0.0, 0.0, -1.2),
        BodyState::new("Mercury", 0x8b7355, 0.6, 4.0)
            .at(40.0, 0.0, 40.0)
            .moving(-0.8, 0.0, 0.8),
        BodyState::new("Jupiter", 0xdaa520, 10.0, 12.0)
            .at(0.0, -120.0, 0.0)
            .moving(1.5, 0.0, 0.0),
    ]
}

/// Two equal bodies orbiting their common center of mass in the xz-plane
///
/// `separation` is the distance between the bodies, `mass` the mass of
/// each. Velocities give a circular orbit for the gravitational constant `g`.
pub fn binary(mass: f64, radius: f64, separation: f64, g: f64) -> Vec<BodyState> {
    // Each body circles at r = d/2 under F = G m² / d²
    let speed = (g * mass / (2.0 * separation)).sqrt();
    let half = separation / 2.0;

    vec![
        BodyState::new("Primary", 0xffd27f, mass, radius)
            .at(-half, 0.0, 0.0)
            .moving(0.0, 0.0, -speed),
        BodyState::new("Secondary", 0x9bb0ff, mass, radius)
            .at(half, 0.0, 0.0)
            .moving(0.0, 0.0, speed),
    ]
}
