//! Overlap detection between spheres

use serde::Serialize;

use crate::body::Body;

/// Two bodies found overlapping during a force pass
///
/// Indices refer to the body order at the start of the pass; `first < second`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionEvent {
    pub first: usize,
    pub second: usize,
    /// Center-to-center distance
    pub separation: f64,
    /// Sum of radii that the separation fell below
    pub contact_distance: f64,
}

/// Checks whether two bodies overlap
///
/// Bodies touch when their separation is strictly less than the sum of
/// their radii.
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId, BodyState};
/// use orrery::collisions::check_pair;
///
/// let a = Body::from_state(BodyId(0), &BodyState::new("a", 0, 1.0, 6.0)).unwrap();
/// let b = Body::from_state(BodyId(1), &BodyState::new("b", 0, 1.0, 6.0).at(10.0, 0.0, 0.0)).unwrap();
///
/// let event = check_pair(0, 1, &a, &b).unwrap();
/// assert_eq!(event.separation, 10.0);
/// assert_eq!(event.contact_distance, 12.0);
/// ```
pub fn check_pair(first: usize, second: usize, a: &Body, b: &Body) -> Option<CollisionEvent> {
    let separation = a.distance_to(b);
    let contact_distance = a.radius + b.radius;

    (separation < contact_distance).then_some(CollisionEvent {
        first,
        second,
        separation,
        contact_distance,
    })
}

/// Finds every overlapping pair without touching forces
///
/// Same pair order as the force pass.
pub fn detect_collisions(bodies: &[Body]) -> Vec<CollisionEvent> {
    let n = bodies.len();

    (0..n)
        .flat_map(|i| ((i + 1)..n).filter_map(move |j| check_pair(i, j, &bodies[i], &bodies[j])))
        .collect()
}
