//! Time integration
//!
//! Bodies carry their own accumulated acceleration, so an integrator only
//! needs the body slice and the timestep.

use crate::body::Body;

/// A time integrator for the simulation
pub trait Integrator: Send + Sync {
    /// Advance every body by one timestep using its accumulated acceleration
    ///
    /// # Arguments
    ///
    /// * `bodies` - Bodies to advance (modified in place)
    /// * `dt` - Timestep in simulation units; zero is a no-op, negative runs time backwards
    fn step(&self, bodies: &mut [Body], dt: f64);
}

/// Semi-implicit (symplectic) Euler integrator (1st order)
///
/// 1. Kick: v(t + dt) = v(t) + a(t) * dt
/// 2. Drift: x(t + dt) = x(t) + v(t + dt) * dt
///
/// Unlike explicit Euler, the drift uses the updated velocity, which keeps
/// orbital energy bounded instead of letting it grow without limit.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector3;
/// use orrery::body::{Body, BodyId, BodyState};
/// use orrery::integrator::{Integrator, SemiImplicitEuler};
///
/// let mut bodies = vec![Body::from_state(BodyId(0), &BodyState::new("a", 0, 1.0, 1.0)).unwrap()];
/// bodies[0].apply_force(Vector3::new(0.0, 1.0, 0.0));
///
/// SemiImplicitEuler.step(&mut bodies, 1.0);
/// assert_eq!(bodies[0].velocity.y, 1.0);
/// assert_eq!(bodies[0].position.y, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, bodies: &mut [Body], dt: f64) {
        bodies.iter_mut().for_each(|body| body.integrate(dt));
    }
}
