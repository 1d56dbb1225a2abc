use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Caller-facing description of a body
///
/// Used to add bodies and to capture the initial configuration that
/// `Simulation::reset` restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyState {
    pub name: String,
    /// 24-bit RGB color, opaque to the physics
    pub color: u32,
    pub mass: f64,
    pub radius: f64,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
}

impl BodyState {
    /// Creates a body description at rest
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::BodyState;
    ///
    /// let moon = BodyState::new("Moon", 0xcccccc, 0.1, 1.5)
    ///     .at(10.0, 0.0, 0.0)
    ///     .moving(0.0, 0.0, 0.3);
    ///
    /// assert_eq!(moon.position.x, 10.0);
    /// assert_eq!(moon.velocity.z, 0.3);
    /// assert!(moon.validate().is_ok());
    /// ```
    pub fn new(name: impl Into<String>, color: u32, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            color,
            mass,
            radius,
            position: Point3::origin(),
            velocity: Vector3::zeros(),
        }
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Point3::new(x, y, z);
        self
    }

    pub fn moving(mut self, vx: f64, vy: f64, vz: f64) -> Self {
        self.velocity = Vector3::new(vx, vy, vz);
        self
    }

    /// Checks that mass and radius are finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        if valid(self.mass) && valid(self.radius) {
            Ok(())
        } else {
            Err(SimulationError::InvalidBodyState {
                name: self.name.clone(),
                mass: self.mass,
                radius: self.radius,
            })
        }
    }
}

/// A massive sphere under gravity
///
/// `acceleration` is per-step scratch: forces are divided by mass as they
/// are applied, and the sum is cleared by `integrate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub color: u32,
    pub mass: f64,
    pub radius: f64,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
    acceleration: Vector3<f64>,
}

impl Body {
    /// Builds a body from a validated state
    pub fn from_state(id: BodyId, state: &BodyState) -> Result<Self> {
        state.validate()?;
        Ok(Body {
            id,
            name: state.name.clone(),
            color: state.color,
            mass: state.mass,
            radius: state.radius,
            position: state.position,
            velocity: state.velocity,
            acceleration: Vector3::zeros(),
        })
    }

    pub fn to_state(&self) -> BodyState {
        BodyState {
            name: self.name.clone(),
            color: self.color,
            mass: self.mass,
            radius: self.radius,
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Accumulates `force / mass`
    ///
    /// This accumulates acceleration, not force: the division by mass happens
    /// here, once per applied force, instead of once at integration time.
    pub fn apply_force(&mut self, force: Vector3<f64>) {
        self.acceleration += force / self.mass;
    }

    /// Acceleration accumulated since the last `integrate`
    pub fn acceleration(&self) -> Vector3<f64> {
        self.acceleration
    }

    pub(crate) fn set_acceleration(&mut self, acceleration: Vector3<f64>) {
        self.acceleration = acceleration;
    }

    /// Semi-implicit (symplectic) Euler step
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// The order matters: it is what keeps orbits bounded over long runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Vector3;
    /// use orrery::body::{Body, BodyId, BodyState};
    ///
    /// let mut body = Body::from_state(BodyId(0), &BodyState::new("probe", 0xffffff, 2.0, 1.0)).unwrap();
    /// body.apply_force(Vector3::new(4.0, 0.0, 0.0)); // a = 2
    /// body.integrate(0.5);
    ///
    /// assert_eq!(body.velocity.x, 1.0);
    /// assert_eq!(body.position.x, 0.5); // moved with the updated velocity
    /// assert_eq!(body.acceleration(), Vector3::zeros());
    /// ```
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = Vector3::zeros();
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Sphere volume, r³ · 4π/3
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }
}
