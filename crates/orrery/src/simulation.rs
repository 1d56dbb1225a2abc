use log::{debug, trace};
use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId, BodyState};
use crate::collisions::{CollisionEvent, MergeRecord, merge_bodies, plan_mergers};
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::presets;
use crate::snapshot::{BodySnapshot, Snapshot, StepReport};
use crate::trail::Trail;

/// The registry of live bodies and everything indexed alongside them
///
/// Bodies are kept in insertion order. Trails are stored one per body at
/// the same index, and the follow reference is an index into the same
/// sequence; every removal goes through one place that shifts all three
/// together.
///
/// # Examples
///
/// ```
/// use orrery::body::BodyState;
/// use orrery::config::SimulationConfig;
/// use orrery::simulation::Simulation;
///
/// let mut sim = Simulation::new(
///     SimulationConfig::default(),
///     vec![
///         BodyState::new("a", 0xffffff, 1.0, 1.0),
///         BodyState::new("b", 0xffffff, 1.0, 1.0).at(10.0, 0.0, 0.0),
///     ],
/// )
/// .unwrap();
///
/// let report = sim.step(1.0);
/// assert!(report.snapshot.bodies[0].velocity[0] > 0.0);
/// assert!(report.snapshot.bodies[1].velocity[0] < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    gravity: DirectGravity,
    integrator: SemiImplicitEuler,
    bodies: Vec<Body>,
    trails: Vec<Trail>,
    follow: Option<usize>,
    /// Configuration restored by `reset`, never mutated after construction
    initial: Vec<Body>,
    time: f64,
    steps: u64,
    paused: bool,
    next_id: u32,
}

impl Simulation {
    /// Creates a simulation and captures `initial` as its reset configuration
    ///
    /// Nothing is constructed unless the config and every body state are valid.
    pub fn new(config: SimulationConfig, initial: Vec<BodyState>) -> Result<Self> {
        config.validate()?;

        let initial = initial
            .iter()
            .enumerate()
            .map(|(i, state)| Body::from_state(BodyId(i as u32), state))
            .collect::<Result<Vec<_>>>()?;

        let gravity =
            DirectGravity::with_min_distance(config.gravitational_constant, config.min_distance);

        let mut sim = Self {
            config,
            gravity,
            integrator: SemiImplicitEuler,
            bodies: Vec::new(),
            trails: Vec::new(),
            follow: None,
            initial,
            time: 0.0,
            steps: 0,
            paused: false,
            next_id: 0,
        };
        sim.restore_initial();

        debug!(
            "created simulation with {} bodies (G={}, collisions={})",
            sim.bodies.len(),
            sim.config.gravitational_constant,
            sim.config.collisions_enabled
        );
        Ok(sim)
    }

    /// Creates a simulation holding the sun-and-planets preset
    pub fn with_solar_system(config: SimulationConfig) -> Result<Self> {
        Self::new(config, presets::solar_system())
    }

    /// Advance the simulation by one timestep
    ///
    /// 1. Accumulate pairwise gravity, collecting overlapping pairs
    /// 2. Apply the mergers planned from those pairs
    /// 3. Integrate every surviving body and extend its trail
    ///
    /// While paused nothing moves and the current state is reported.
    pub fn step(&mut self, dt: f64) -> StepReport {
        if self.paused {
            return StepReport {
                snapshot: self.snapshot(),
                mergers: Vec::new(),
            };
        }

        let contacts = self
            .gravity
            .accumulate(&mut self.bodies, self.config.collisions_enabled);
        let mergers = self.apply_mergers(contacts);

        self.integrator.step(&mut self.bodies, dt);
        self.bodies
            .iter()
            .zip(self.trails.iter_mut())
            .for_each(|(body, trail)| trail.record(body.position));

        self.time += dt;
        self.steps += 1;
        trace!(
            "step {} (dt={}, t={}): {} bodies, {} mergers",
            self.steps,
            dt,
            self.time,
            self.bodies.len(),
            mergers.len()
        );

        StepReport {
            snapshot: self.snapshot(),
            mergers,
        }
    }

    /// Advance by `n_steps` timesteps
    ///
    /// # Returns
    ///
    /// The final snapshot together with every merger from all the steps
    pub fn advance(&mut self, dt: f64, n_steps: usize) -> StepReport {
        let mut mergers = Vec::new();
        for _ in 0..n_steps {
            mergers.extend(self.step(dt).mergers);
        }
        StepReport {
            snapshot: self.snapshot(),
            mergers,
        }
    }

    fn apply_mergers(&mut self, contacts: Vec<CollisionEvent>) -> Vec<MergeRecord> {
        if contacts.is_empty() {
            return Vec::new();
        }

        let plan = plan_mergers(&self.bodies, contacts);

        // Absorbers are never absorbed in the same batch, so merging first
        // and removing afterwards keeps every planned index valid.
        let records: Vec<MergeRecord> = plan
            .iter()
            .map(|merger| {
                let absorbed = self.bodies[merger.absorbed].clone();
                let absorber = &mut self.bodies[merger.absorber];
                merge_bodies(absorber, &absorbed);
                debug!(
                    "{} absorbed {} (mass {}, radius {})",
                    absorber.name, absorbed.name, absorber.mass, absorber.radius
                );
                MergeRecord {
                    absorber: absorber.id,
                    absorber_name: absorber.name.clone(),
                    absorbed: absorbed.id,
                    absorbed_name: absorbed.name,
                    mass: absorber.mass,
                    radius: absorber.radius,
                }
            })
            .collect();

        let mut absorbed: Vec<usize> = plan.iter().map(|m| m.absorbed).collect();
        absorbed.sort_unstable_by(|a, b| b.cmp(a));
        for index in absorbed {
            self.remove_at(index);
        }

        records
    }

    /// Appends a body and returns its index
    ///
    /// The state is validated before anything changes.
    pub fn add_body(&mut self, state: BodyState) -> Result<usize> {
        let body = Body::from_state(BodyId(self.next_id), &state)?;
        self.next_id += 1;

        debug!("added {} as {:?}", body.name, body.id);
        self.bodies.push(body);
        self.trails.push(Trail::new(self.config.trail_length));
        Ok(self.bodies.len() - 1)
    }

    /// Removes the body at `index` and its trail, shifting later indices down
    ///
    /// A follow reference to the removed body is cleared; one above it
    /// moves down by one.
    pub fn remove_body(&mut self, index: usize) -> Result<Body> {
        self.check_index(index)?;
        let body = self.remove_at(index);
        debug!("removed {} ({:?}) at index {}", body.name, body.id, index);
        Ok(body)
    }

    fn remove_at(&mut self, index: usize) -> Body {
        self.trails.remove(index);
        self.follow = match self.follow {
            Some(f) if f == index => None,
            Some(f) if f > index => Some(f - 1),
            other => other,
        };
        self.bodies.remove(index)
    }

    /// Restores the configuration captured at construction
    ///
    /// Bodies added since are dropped, trails and the follow reference are
    /// cleared, and time starts over. Collision and pause flags are user
    /// settings and are left alone.
    pub fn reset(&mut self) {
        self.restore_initial();
        debug!("reset to {} initial bodies", self.bodies.len());
    }

    fn restore_initial(&mut self) {
        self.bodies = self.initial.clone();
        self.trails = self
            .bodies
            .iter()
            .map(|_| Trail::new(self.config.trail_length))
            .collect();
        self.follow = None;
        self.time = 0.0;
        self.steps = 0;
        self.next_id = self.initial.len() as u32;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.bodies.len() {
            Ok(())
        } else {
            Err(SimulationError::IndexOutOfRange {
                index,
                len: self.bodies.len(),
            })
        }
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        debug!("collisions {}", if enabled { "enabled" } else { "disabled" });
        self.config.collisions_enabled = enabled;
    }

    pub fn collisions_enabled(&self) -> bool {
        self.config.collisions_enabled
    }

    /// Selects the body an external camera should track
    ///
    /// The reference is only maintained here, never used for physics.
    pub fn set_follow_target(&mut self, target: Option<usize>) -> Result<()> {
        if let Some(index) = target {
            self.check_index(index)?;
        }
        self.follow = target;
        Ok(())
    }

    pub fn follow_target(&self) -> Option<usize> {
        self.follow
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.config.gravitational_constant
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Current index of the body with the given id
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn trail(&self, index: usize) -> Option<&Trail> {
        self.trails.get(index)
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    /// The initial configuration `reset` restores
    pub fn initial_bodies(&self) -> Vec<BodyState> {
        self.initial.iter().map(Body::to_state).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.time,
            steps: self.steps,
            bodies: self.bodies.iter().map(BodySnapshot::from).collect(),
            follow: self.follow,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total linear momentum
    ///
    /// Conserved by both gravity and mergers, so useful for checking drift.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Mass-weighted mean position, `None` without bodies
    pub fn center_of_mass(&self) -> Option<Point3<f64>> {
        if self.bodies.is_empty() {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector3::zeros(), |acc, p| acc + p);
        Some(Point3::from(weighted / self.total_mass()))
    }
}
