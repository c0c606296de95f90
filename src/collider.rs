//! Static sandbox colliders and their ray tests.

use crate::float::Float;
use crate::vec::{Vec, Vec3, NEAR_ZERO_LENGTH};

/// Collider geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape<F: Float> {
    Aabb { min: Vec3<F>, max: Vec3<F> },
    Sphere { center: Vec3<F>, radius: F },
}

/// Static geometry tagged with a classification layer (0..=31).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider<F: Float> {
    pub shape: Shape<F>,
    pub layer: u8,
}

impl<F: Float> Collider<F> {
    /// Axis-aligned box. Corners may be given in any order.
    pub fn aabb(a: Vec3<F>, b: Vec3<F>, layer: u8) -> Self {
        Collider { shape: Shape::Aabb { min: a.min(b), max: a.max(b) }, layer }
    }

    pub fn sphere(center: Vec3<F>, radius: F, layer: u8) -> Self {
        Collider { shape: Shape::Sphere { center, radius: radius.abs() }, layer }
    }

    /// Entry distance and surface normal along the unit `direction`, if the
    /// ray enters the shape within `max_distance`.
    ///
    /// Rays starting inside a shape do not hit it.
    pub fn raycast(&self, origin: Vec3<F>, direction: Vec3<F>, max_distance: F) -> Option<(F, Vec3<F>)> {
        match self.shape {
            Shape::Aabb { min, max } => ray_aabb(origin, direction, max_distance, min, max),
            Shape::Sphere { center, radius } => ray_sphere(origin, direction, max_distance, center, radius),
        }
    }
}

fn ray_aabb<F: Float>(
    origin: Vec3<F>,
    direction: Vec3<F>,
    max_distance: F,
    min: Vec3<F>,
    max: Vec3<F>,
) -> Option<(F, Vec3<F>)> {
    let o = origin.to_array();
    let d = direction.to_array();
    let lo = min.to_array();
    let hi = max.to_array();

    let mut t_enter = F::zero();
    let mut t_exit = max_distance;
    let mut entry: Option<(usize, F)> = None;

    for i in 0..3 {
        if d[i].is_near_zero(F::from_f32(NEAR_ZERO_LENGTH)) {
            if o[i] < lo[i] || o[i] > hi[i] {
                return None;
            }
            continue;
        }
        let inv = F::one() / d[i];
        let mut t0 = (lo[i] - o[i]) * inv;
        let mut t1 = (hi[i] - o[i]) * inv;
        // Entering through the low face means the outward normal is -axis.
        let mut sign = -F::one();
        if t0 > t1 {
            core::mem::swap(&mut t0, &mut t1);
            sign = F::one();
        }
        if t0 > t_enter {
            t_enter = t0;
            entry = Some((i, sign));
        }
        if t1 < t_exit {
            t_exit = t1;
        }
        if t_enter > t_exit {
            return None;
        }
    }

    let (axis, sign) = entry?;
    let mut normal = [F::zero(); 3];
    normal[axis] = sign;
    Some((t_enter, Vec3::from_array(normal)))
}

fn ray_sphere<F: Float>(
    origin: Vec3<F>,
    direction: Vec3<F>,
    max_distance: F,
    center: Vec3<F>,
    radius: F,
) -> Option<(F, Vec3<F>)> {
    let m = origin - center;
    let b = m.dot(direction);
    let c = m.length_sq() - radius * radius;
    if c <= F::zero() || b > F::zero() {
        return None;
    }
    let disc = b * b - c;
    if disc < F::zero() {
        return None;
    }
    let t = -b - disc.sqrt();
    if t < F::zero() || t > max_distance {
        return None;
    }
    let point = origin + direction.scale(t);
    Some((t, (point - center).normalize()))
}
