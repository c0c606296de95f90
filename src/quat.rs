//! Unit quaternion used for the view orientation.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use core::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation quaternion `(x, y, z, w)` with `w` the scalar part.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    /// The identity rotation.
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `radians` about `axis`. The axis is normalized here.
    pub fn from_axis_angle(axis: Vec3<F>, radians: F) -> Self {
        let axis = axis.normalize();
        let half = radians * F::half();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    /// Euler rotation in degrees: roll about Z first, then pitch about X,
    /// then yaw about world Y.
    pub fn from_euler_degrees(pitch: F, yaw: F, roll: F) -> Self {
        let qx = Self::from_axis_angle(Vec3::new(F::one(), F::zero(), F::zero()), pitch.to_radians());
        let qy = Self::from_axis_angle(Vec3::up(), yaw.to_radians());
        let qz = Self::from_axis_angle(Vec3::forward(), roll.to_radians());
        qy * qx * qz
    }

    fn axis(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let q = self.axis();
        let t = q.cross(v).scale(F::two());
        v + t.scale(self.w) + q.cross(t)
    }

    /// Squared norm; 1 for a valid rotation.
    pub fn norm_sq(self) -> F {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Quat<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = self.axis();
        let b = rhs.axis();
        let v = b.scale(self.w) + a.scale(rhs.w) + a.cross(b);
        Quat { x: v.x, y: v.y, z: v.z, w: self.w * rhs.w - a.dot(b) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f32>, b: Vec3<f32>) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_leaves_vector() {
        let v = Vec3::new(1.0f32, 2.0, 3.0);
        assert!(close(Quat::identity().rotate(v), v));
    }

    #[test]
    fn yaw_turns_forward_toward_x() {
        let q = Quat::from_euler_degrees(0.0f32, 90.0, 0.0);
        assert!(close(q.rotate(Vec3::forward()), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn positive_pitch_looks_down() {
        let q = Quat::from_euler_degrees(90.0f32, 0.0, 0.0);
        assert!(close(q.rotate(Vec3::forward()), Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn pitch_applies_before_yaw() {
        let q = Quat::from_euler_degrees(45.0f32, 90.0, 0.0);
        let f = q.rotate(Vec3::forward());
        let h = core::f32::consts::FRAC_1_SQRT_2;
        assert!(close(f, Vec3::new(h, -h, 0.0)));
    }

    #[test]
    fn composed_rotation_stays_unit() {
        let q = Quat::from_euler_degrees(-37.0f32, 412.0, 12.5);
        assert!((q.norm_sq() - 1.0).abs() < 1e-5);
    }
}
