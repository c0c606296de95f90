//! Small generic vectors: `Vec3` for world geometry, `Vec2` for pointer input.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero when normalizing or measuring
/// tether geometry.
pub const NEAR_ZERO_LENGTH: f32 = 1e-10;

/// Shared geometry over [`Vec2`] and [`Vec3`]: the helpers (normalize,
/// distance, lerp) are written once against this trait.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    type Scalar: Float;

    fn zero() -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, s: Self::Scalar) -> Self;

    /// True if every component is finite.
    fn is_finite(self) -> bool;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(Self::zero)
    }

    /// Normalize to unit length, or `None` when the direction is undefined.
    fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(NEAR_ZERO_LENGTH)) {
            None
        } else {
            Some(self.scale(Self::Scalar::one() / len))
        }
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// `self + (other - self) * t`, unclamped.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

macro_rules! impl_vec_ops {
    ($name:ident { $($c:ident),+ }) => {
        impl<F: Float> Add for $name<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { $name { $($c: self.$c + rhs.$c),+ } }
        }

        impl<F: Float> Sub for $name<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { $name { $($c: self.$c - rhs.$c),+ } }
        }

        impl<F: Float> Neg for $name<F> {
            type Output = Self;
            fn neg(self) -> Self { $name { $($c: -self.$c),+ } }
        }

        impl<F: Float> Vec for $name<F> {
            type Scalar = F;
            fn zero() -> Self { $name { $($c: F::zero()),+ } }
            fn dot(self, other: Self) -> F { F::zero() $(+ self.$c * other.$c)+ }
            fn scale(self, s: F) -> Self { $name { $($c: self.$c * s),+ } }
            fn is_finite(self) -> bool { true $(&& self.$c.is_finite())+ }
        }
    };
}

/// Per-frame pointer movement fed to the view controller.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl_vec_ops!(Vec2 { x, y });

/// World-space position, direction, velocity or force.
///
/// The world is Y-up; the view looks down +Z when yaw and pitch are zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// World up, +Y.
    pub fn up() -> Self { Vec3::new(F::zero(), F::one(), F::zero()) }

    /// Unrotated view forward, +Z.
    pub fn forward() -> Self { Vec3::new(F::zero(), F::zero(), F::one()) }

    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(a: [F; 3]) -> Self {
        Vec3 { x: a[0], y: a[1], z: a[2] }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Vec3 { x: self.x.min(other.x), y: self.y.min(other.y), z: self.z.min(other.z) }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Vec3 { x: self.x.max(other.x), y: self.y.max(other.y), z: self.z.max(other.z) }
    }
}

impl_vec_ops!(Vec3 { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f32>::zero();
        assert_eq!(v.normalize(), Vec3::zero());
        assert!(v.try_normalize().is_none());
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec3::new(0.0f32, 10.0, 0.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(10.0f32, 10.0, -4.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
        assert!((mid.z + 2.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(0.0f32, 3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec3::new(0.0f32, 1.0, 2.0).is_finite());
        assert!(!Vec3::new(f32::NAN, 1.0, 2.0).is_finite());
        assert!(!Vec2::new(1.0f32, f32::INFINITY).is_finite());
    }
}
