//! Minimal in-crate host: bodies, static colliders and a spring-link table.
//!
//! `SandboxWorld` implements every host trait so the grapple core can be
//! exercised without an engine. Links are stored arena-style and keyed by
//! generational [`LinkHandle`]s.

use crate::body::RigidBody;
use crate::collider::Collider;
use crate::config::SandboxConfig;
use crate::error::GrappleError;
use crate::float::Float;
use crate::host::{
    BodyId, BodyState, ColliderId, ConstraintWorld, LayerMask, LinkHandle, RaycastHit,
    RaycastQuery, SpringLink,
};
use crate::observer::StepObserver;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

struct LinkSlot<F: Float> {
    generation: u32,
    link: Option<SpringLink<F>>,
}

/// Bodies, colliders and spring links stepped together.
pub struct SandboxWorld<F: Float> {
    bodies: AllocVec<RigidBody<F>>,
    colliders: AllocVec<Collider<F>>,
    links: AllocVec<LinkSlot<F>>,
    free_links: AllocVec<u32>,
}

impl<F: Float> SandboxWorld<F> {
    pub fn new() -> Self {
        SandboxWorld {
            bodies: AllocVec::new(),
            colliders: AllocVec::new(),
            links: AllocVec::new(),
            free_links: AllocVec::new(),
        }
    }

    /// Add a body. Dynamic bodies need a positive, finite mass.
    pub fn add_body(&mut self, body: RigidBody<F>) -> Result<BodyId, GrappleError> {
        if !body.kinematic && (!body.mass.is_finite() || body.mass <= F::zero()) {
            return Err(GrappleError::InvalidMass);
        }
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        Ok(id)
    }

    pub fn add_collider(&mut self, collider: Collider<F>) -> ColliderId {
        let id = ColliderId(self.colliders.len() as u32);
        self.colliders.push(collider);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody<F>> {
        self.bodies.get(id.0 as usize)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody<F>> {
        self.bodies.get_mut(id.0 as usize)
    }

    pub fn collider(&self, id: ColliderId) -> Option<&Collider<F>> {
        self.colliders.get(id.0 as usize)
    }

    /// The live link behind `handle`, if it has not been destroyed.
    pub fn link(&self, handle: LinkHandle) -> Option<&SpringLink<F>> {
        let slot = self.links.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.link.as_ref()
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().filter(|s| s.link.is_some()).count()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the simulation by `dt`.
    ///
    /// External forces added since the last step act across every sub-step
    /// and are cleared afterwards.
    pub fn step<O: StepObserver>(&mut self, dt: F, config: &SandboxConfig<F>, observer: &mut O) {
        let sub_steps = config.sub_steps.max(1);
        let sub_dt = dt / F::from_f32(sub_steps as f32);
        let mut link_accel: AllocVec<Vec3<F>> = AllocVec::with_capacity(self.bodies.len());

        for _sub in 0..sub_steps {
            link_accel.clear();
            link_accel.resize(self.bodies.len(), Vec3::zero());

            let mut active = 0;
            for link in self.links.iter().filter_map(|s| s.link.as_ref()) {
                let index = link.body.0 as usize;
                if let Some(body) = self.bodies.get(index) {
                    link_accel[index] = link_accel[index] + link_acceleration(link, body);
                    active += 1;
                }
            }
            observer.on_links_applied(active);

            for (body, accel) in self.bodies.iter_mut().zip(link_accel.iter()) {
                body.integrate(sub_dt, config.gravity + *accel, config.linear_damping);
            }
            observer.on_integrate();
        }

        for body in self.bodies.iter_mut() {
            body.clear_force();
        }
        observer.on_step_complete();
    }
}

impl<F: Float> Default for SandboxWorld<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration a link imparts on its body.
///
/// Zero while the distance is inside `[min_distance, max_distance]`.
/// Outside it, a spring on the overshoot plus damping on the separation
/// speed, scaled by `mass_scale / mass`.
pub fn link_acceleration<F: Float>(link: &SpringLink<F>, body: &RigidBody<F>) -> Vec3<F> {
    if body.kinematic {
        return Vec3::zero();
    }
    let offset = link.anchor - body.position;
    let Some(direction) = offset.try_normalize() else {
        return Vec3::zero();
    };
    let distance = offset.length();
    let overshoot = if distance > link.max_distance {
        distance - link.max_distance
    } else if distance < link.min_distance {
        distance - link.min_distance
    } else {
        return Vec3::zero();
    };
    let separating = -body.velocity.dot(direction);
    let magnitude = link.stiffness * overshoot + link.damping * separating;
    direction.scale(magnitude * link.mass_scale * body.inv_mass)
}

impl<F: Float> RaycastQuery<F> for SandboxWorld<F> {
    fn raycast(
        &self,
        origin: Vec3<F>,
        direction: Vec3<F>,
        max_distance: F,
        mask: LayerMask,
    ) -> Option<RaycastHit<F>> {
        let mut best: Option<RaycastHit<F>> = None;
        for (index, collider) in self.colliders.iter().enumerate() {
            if !mask.contains(collider.layer) {
                continue;
            }
            let Some((distance, normal)) = collider.raycast(origin, direction, max_distance) else {
                continue;
            };
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(RaycastHit {
                    point: origin + direction.scale(distance),
                    normal,
                    distance,
                    collider: ColliderId(index as u32),
                });
            }
        }
        best
    }
}

impl<F: Float> BodyState<F> for SandboxWorld<F> {
    fn contains_body(&self, body: BodyId) -> bool {
        self.body(body).is_some()
    }

    fn body_position(&self, body: BodyId) -> Option<Vec3<F>> {
        self.body(body).map(|b| b.position)
    }

    fn body_velocity(&self, body: BodyId) -> Option<Vec3<F>> {
        self.body(body).map(|b| b.velocity)
    }
}

impl<F: Float> ConstraintWorld<F> for SandboxWorld<F> {
    fn create_link(&mut self, link: SpringLink<F>) -> Result<LinkHandle, GrappleError> {
        if !self.contains_body(link.body) {
            return Err(GrappleError::UnknownBody { body: link.body });
        }
        if let Some(index) = self.free_links.pop() {
            let slot = &mut self.links[index as usize];
            slot.link = Some(link);
            return Ok(LinkHandle { index, generation: slot.generation });
        }
        let index = self.links.len() as u32;
        self.links.push(LinkSlot { generation: 0, link: Some(link) });
        Ok(LinkHandle { index, generation: 0 })
    }

    fn destroy_link(&mut self, handle: LinkHandle) -> bool {
        let Some(slot) = self.links.get_mut(handle.index as usize) else {
            return false;
        };
        if slot.generation != handle.generation || slot.link.is_none() {
            return false;
        }
        slot.link = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_links.push(handle.index);
        true
    }

    fn add_force(&mut self, body: BodyId, force: Vec3<F>) -> Result<(), GrappleError> {
        let target = self.body_mut(body).ok_or(GrappleError::UnknownBody { body })?;
        target.apply_force(force);
        Ok(())
    }
}
