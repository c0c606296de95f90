//! Momentum injection: the active pull toward the anchor layered on top of
//! the passive tether.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Per-tick pull force toward the anchor, gated by a speed ceiling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MomentumInjector<F: Float> {
    pub force: F,
    pub speed_cap: F,
}

impl<F: Float> MomentumInjector<F> {
    pub fn new(force: F, speed_cap: F) -> Self {
        MomentumInjector { force, speed_cap }
    }

    /// Force to add to the player body this tick.
    pub fn apply(&self, position: Vec3<F>, velocity: Vec3<F>, anchor: Vec3<F>) -> Vec3<F> {
        apply(position, velocity, anchor, self.force, self.speed_cap)
    }
}

/// `force` along the unit direction from `position` to `anchor`, or zero
/// when `|velocity| >= speed_cap`.
///
/// Coincident position and anchor have no direction and yield zero.
pub fn apply<F: Float>(
    position: Vec3<F>,
    velocity: Vec3<F>,
    anchor: Vec3<F>,
    force: F,
    speed_cap: F,
) -> Vec3<F> {
    // Compare squared magnitudes; a NaN speed fails the gate.
    let under_cap = speed_cap > F::zero() && velocity.length_sq() < speed_cap * speed_cap;
    if !under_cap {
        return Vec3::zero();
    }
    match (anchor - position).try_normalize() {
        Some(direction) => direction.scale(force),
        None => Vec3::zero(),
    }
}
