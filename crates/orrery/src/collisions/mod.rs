//! Collision detection and resolution
//!
//! Overlapping pairs are found during the force pass, then merged in a
//! separate batch once the pass is complete. Merges conserve mass,
//! momentum and volume, but not kinetic energy.

pub mod detection;
pub mod resolution;


pub use detection::{CollisionEvent, check_pair, detect_collisions};
pub use resolution::{MergeRecord, Merger, choose_absorber, merge_bodies, plan_mergers};
