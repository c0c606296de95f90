//! Sandbox rigid body: point mass with semi-implicit Euler integration.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Point-mass body. Orientation is not simulated.
#[derive(Clone, Debug)]
pub struct RigidBody<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    /// External force accumulated for the next step.
    pub force: Vec3<F>,
    pub mass: F,
    pub inv_mass: F,
    /// Kinematic bodies ignore forces, links and gravity.
    pub kinematic: bool,
}

impl<F: Float> RigidBody<F> {
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        RigidBody {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass,
            inv_mass,
            kinematic: false,
        }
    }

    pub fn kinematic(position: Vec3<F>) -> Self {
        RigidBody {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass: F::zero(),
            inv_mass: F::zero(),
            kinematic: true,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        if !self.kinematic {
            self.force = self.force + force;
        }
    }

    /// `v += (F/m + accel) dt`, damp, then `x += v dt`.
    ///
    /// The force accumulator is left alone; the world clears it once per
    /// step so it acts across every sub-step.
    pub fn integrate(&mut self, dt: F, accel: Vec3<F>, damping: F) {
        if self.kinematic {
            return;
        }
        let total = self.force.scale(self.inv_mass) + accel;
        self.velocity = (self.velocity + total.scale(dt)).scale(damping);
        self.position = self.position + self.velocity.scale(dt);
    }

    pub fn clear_force(&mut self) {
        self.force = Vec3::zero();
    }

    pub fn speed(&self) -> F {
        self.velocity.length()
    }

    /// Teleport a kinematic body. Dynamic bodies are left where they are.
    pub fn move_to(&mut self, position: Vec3<F>) {
        if self.kinematic {
            self.position = position;
        }
    }
}
