//! Scalar abstraction so the grapple core runs in `f32` or `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point operations needed by the tether, view and sandbox math.
///
/// Transcendentals route through `libm`, which keeps the crate `no_std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn pi() -> Self;
    /// Lossless for f32, widening for f64. Used for tuning constants.
    fn from_f32(v: f32) -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn exp(self) -> Self;
    fn abs(self) -> Self;
    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;

    fn half() -> Self {
        Self::from_f32(0.5)
    }

    fn two() -> Self {
        Self::from_f32(2.0)
    }

    /// Smaller of the two; `other` when either is NaN.
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Larger of the two; `other` when either is NaN.
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_f32(180.0)
    }
}

macro_rules! impl_float {
    ($t:ty, $pi:expr, $sqrt:path, $sin:path, $cos:path, $exp:path, $abs:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn pi() -> Self { $pi }
            fn from_f32(v: f32) -> Self { v as $t }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn sin(self) -> Self { $sin(self) }
            fn cos(self) -> Self { $cos(self) }
            fn exp(self) -> Self { $exp(self) }
            fn abs(self) -> Self { $abs(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
        }
    };
}

impl_float!(f32, core::f32::consts::PI, libm::sqrtf, libm::sinf, libm::cosf, libm::expf, libm::fabsf);
impl_float!(f64, core::f64::consts::PI, libm::sqrt, libm::sin, libm::cos, libm::exp, libm::fabs);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(Float::clamp(120.0f32, -90.0, 90.0), 90.0);
        assert_eq!(Float::clamp(-120.0f64, -90.0, 90.0), -90.0);
        assert_eq!(Float::clamp(12.5f32, -90.0, 90.0), 12.5);
    }

    #[test]
    fn degrees_to_radians() {
        assert!((Float::to_radians(180.0f32) - core::f32::consts::PI).abs() < 1e-6);
        assert!((Float::to_radians(90.0f64) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
    }
}
