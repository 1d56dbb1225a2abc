//! Force models for the simulation
//!
//! A force model walks the live bodies once per step and accumulates
//! accelerations into them. When collisions are enabled it also reports
//! overlapping pairs, which receive no force for that step.

use crate::body::Body;
use crate::collisions::CollisionEvent;

pub mod gravity;


pub use gravity::DirectGravity;

/// A source of acceleration on the bodies of a simulation
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId, BodyState};
/// use orrery::forces::{DirectGravity, ForceModel};
///
/// let mut bodies = vec![
///     Body::from_state(BodyId(0), &BodyState::new("a", 0, 1.0, 1.0)).unwrap(),
///     Body::from_state(BodyId(1), &BodyState::new("b", 0, 1.0, 1.0).at(10.0, 0.0, 0.0)).unwrap(),
/// ];
///
/// let gravity = DirectGravity::new(0.5);
/// let contacts = gravity.accumulate(&mut bodies, false);
///
/// assert!(contacts.is_empty());
/// assert!(bodies[0].acceleration().x > 0.0);
/// assert!(bodies[1].acceleration().x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Accumulate accelerations for every pair of bodies
    ///
    /// # Arguments
    ///
    /// * `bodies` - Live bodies, in registry order
    /// * `collisions` - Whether overlapping pairs are reported instead of attracted
    ///
    /// # Returns
    ///
    /// Overlapping pairs, in pair order (i < j). Empty when `collisions` is false.
    fn accumulate(&self, bodies: &mut [Body], collisions: bool) -> Vec<CollisionEvent>;

    /// Potential energy of the configuration (optional)
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
