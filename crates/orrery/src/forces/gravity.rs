//! Direct pairwise Newtonian gravity (O(N²))

use nalgebra::Vector3;

use crate::body::Body;
use crate::collisions::CollisionEvent;
use crate::collisions::detection::check_pair;
use crate::config::DEFAULT_MIN_DISTANCE;
use crate::forces::ForceModel;

/// Direct O(N²) gravitational force computation
///
/// Each unordered pair is visited once; the force on the first body is
/// applied as-is and its exact negation goes to the second.
///
/// `min_distance` caps the force law for bodies that pass through each
/// other with collisions disabled. It only changes the result for pairs
/// closer than the floor.
#[derive(Debug, Clone)]
pub struct DirectGravity {
    /// Gravitational constant
    pub g: f64,
    /// Separation floor used in the inverse-square law
    pub min_distance: f64,
}

impl DirectGravity {
    pub fn new(g: f64) -> Self {
        Self {
            g,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    pub fn with_min_distance(g: f64, min_distance: f64) -> Self {
        Self { g, min_distance }
    }

    /// Force on `a` due to `b`
    ///
    /// `b` feels the negation. Coincident bodies exert no force on each
    /// other since the direction is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{Body, BodyId, BodyState};
    /// use orrery::forces::DirectGravity;
    ///
    /// let a = Body::from_state(BodyId(0), &BodyState::new("a", 0, 1.0, 1.0)).unwrap();
    /// let b = Body::from_state(BodyId(1), &BodyState::new("b", 0, 1.0, 1.0).at(10.0, 0.0, 0.0)).unwrap();
    ///
    /// let force = DirectGravity::new(0.5).pair_force(&a, &b);
    /// assert!((force.x - 0.005).abs() < 1e-15);
    /// ```
    pub fn pair_force(&self, a: &Body, b: &Body) -> Vector3<f64> {
        let delta = b.position - a.position;
        let dist_sq = delta.magnitude_squared();
        if dist_sq == 0.0 {
            return Vector3::zeros();
        }
        let dist = dist_sq.sqrt();
        let floor_sq = self.min_distance * self.min_distance;
        let force_mag = self.g * a.mass * b.mass / dist_sq.max(floor_sq);
        delta * (force_mag / dist)
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(&self, bodies: &mut [Body], collisions: bool) -> Vec<CollisionEvent> {
        let n = bodies.len();
        let mut contacts = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if collisions {
                    if let Some(event) = check_pair(i, j, &bodies[i], &bodies[j]) {
                        contacts.push(event);
                        continue;
                    }
                }

                let force = self.pair_force(&bodies[i], &bodies[j]);
                bodies[i].apply_force(force);
                bodies[j].apply_force(-force);
            }
        }

        contacts
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = a.distance_to(b).max(self.min_distance);
                    -self.g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
