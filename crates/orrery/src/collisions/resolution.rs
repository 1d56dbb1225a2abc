//! Collision resolution through perfectly inelastic mergers
//!
//! The heavier body absorbs the lighter one. The merged body conserves:
//! - Total mass: m = m_a + m_b
//! - Momentum: v = (m_a v_a + m_b v_b) / m
//! - Volume (equal-density spheres): r = ∛(r_a³ + r_b³)
//!
//! The absorber keeps its own position, id, name and color.

use std::collections::HashSet;

use serde::Serialize;

use crate::body::{Body, BodyId};
use crate::collisions::CollisionEvent;

/// A planned merge, as indices into the body sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merger {
    pub absorber: usize,
    pub absorbed: usize,
}

/// What happened in a merge, for the rendering side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRecord {
    pub absorber: BodyId,
    pub absorber_name: String,
    pub absorbed: BodyId,
    pub absorbed_name: String,
    /// Mass of the merged body
    pub mass: f64,
    /// Radius of the merged body
    pub radius: f64,
}

/// Picks which body of a colliding pair survives
///
/// Greater mass wins. Equal masses go to the lower index, which is
/// always `event.first`.
pub fn choose_absorber(bodies: &[Body], event: &CollisionEvent) -> Merger {
    let (first, second) = (event.first, event.second);
    if bodies[second].mass > bodies[first].mass {
        Merger {
            absorber: second,
            absorbed: first,
        }
    } else {
        Merger {
            absorber: first,
            absorbed: second,
        }
    }
}

/// Turns the contacts of one force pass into a set of disjoint mergers
///
/// Handles collision cascades by:
/// 1. Taking the closest pairs first (ties keep pair order)
/// 2. Tracking which bodies already take part in a merger
/// 3. Skipping contacts that touch a consumed body
///
/// Skipped contacts are found again on the next step if the bodies still
/// overlap, against the enlarged absorber.
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId, BodyState};
/// use orrery::collisions::{detect_collisions, plan_mergers};
///
/// // A chain of overlaps: 0 touches 1, 1 touches 2
/// let bodies: Vec<Body> = [(0.0, 3.0), (1.0, 1.0), (2.0, 2.0)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(x, mass))| {
///         let state = BodyState::new(format!("b{i}"), 0, mass, 1.0).at(x, 0.0, 0.0);
///         Body::from_state(BodyId(i as u32), &state).unwrap()
///     })
///     .collect();
///
/// let mergers = plan_mergers(&bodies, detect_collisions(&bodies));
///
/// // Only one merger per body per step
/// assert_eq!(mergers.len(), 1);
/// assert_eq!(mergers[0].absorber, 0);
/// assert_eq!(mergers[0].absorbed, 1);
/// ```
pub fn plan_mergers(bodies: &[Body], mut events: Vec<CollisionEvent>) -> Vec<Merger> {
    events.sort_by(|a, b| a.separation.total_cmp(&b.separation));

    let mut consumed: HashSet<usize> = HashSet::new();

    events
        .iter()
        .filter_map(|event| {
            if consumed.contains(&event.first) || consumed.contains(&event.second) {
                return None;
            }
            consumed.insert(event.first);
            consumed.insert(event.second);
            Some(choose_absorber(bodies, event))
        })
        .collect()
}

/// Merge `absorbed` into `absorber`
///
/// Acceleration already gathered this step is combined the same way as
/// velocity, so forces that acted on either body act on the merged one.
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId, BodyState};
/// use orrery::collisions::merge_bodies;
///
/// let mut a = Body::from_state(BodyId(0), &BodyState::new("a", 0, 3.0, 2.0).moving(1.0, 0.0, 0.0)).unwrap();
/// let b = Body::from_state(BodyId(1), &BodyState::new("b", 0, 1.0, 1.0).at(2.5, 0.0, 0.0).moving(-1.0, 0.0, 0.0)).unwrap();
///
/// let p_initial = a.momentum() + b.momentum();
/// merge_bodies(&mut a, &b);
///
/// assert_eq!(a.mass, 4.0);
/// assert!((a.momentum() - p_initial).magnitude() < 1e-12);
/// assert!((a.radius - 9.0_f64.cbrt()).abs() < 1e-12);
/// assert_eq!(a.position.x, 0.0); // absorber stays put
/// ```
pub fn merge_bodies(absorber: &mut Body, absorbed: &Body) {
    let total_mass = absorber.mass + absorbed.mass;

    let velocity =
        (absorber.velocity * absorber.mass + absorbed.velocity * absorbed.mass) / total_mass;
    let acceleration =
        (absorber.acceleration() * absorber.mass + absorbed.acceleration() * absorbed.mass)
            / total_mass;
    let radius = (absorber.radius.powi(3) + absorbed.radius.powi(3)).cbrt();

    absorber.velocity = velocity;
    absorber.set_acceleration(acceleration);
    absorber.mass = total_mass;
    absorber.radius = radius;
}
