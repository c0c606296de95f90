//! Configuration types for the grapple and the sandbox world.

use crate::error::GrappleError;
use crate::float::Float;
use crate::host::LayerMask;
use crate::rope::EaseMode;
use crate::vec::{Vec, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static grapple settings, fixed for the run.
///
/// # Builder Pattern
/// ```
/// use grapple::config::GrappleConfig;
/// use grapple::host::LayerMask;
///
/// let config: GrappleConfig<f32> = GrappleConfig::new()
///     .with_force(12.0)
///     .with_max_speed(25.0)
///     .with_grappleable(LayerMask::layer(3));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrappleConfig<F: Float> {
    /// Pull force added each tick while under the speed cap. Default: 10.
    pub grapple_force: F,
    /// Speed at and above which no pull force is added. Default: 20.
    pub max_grapple_speed: F,
    /// Probe ray length. Default: 100.
    pub probe_max_distance: F,
    /// Layers the probe may attach to. Default: all.
    pub grappleable: LayerMask,
    /// View look sensitivity in degrees per pointer unit per second. Default: 100.
    pub view_sensitivity: F,
    /// Rope visual ease rate per second. Default: 8.
    pub rope_ease_rate: F,
    /// Rope visual interpolation curve. Default: linear.
    pub rope_ease_mode: EaseMode,
    /// Spring stiffness of the tether link. Default: 4.5.
    pub spring: F,
    /// Damping of the tether link. Default: 7.
    pub damper: F,
    /// Inverse-mass scale applied to the player by the link. Default: 4.5.
    pub mass_scale: F,
    /// Max extension as a fraction of the attach distance. Default: 0.8.
    pub max_extension_ratio: F,
    /// Min extension as a fraction of the attach distance. Default: 0.25.
    pub min_extension_ratio: F,
    /// Attach distance substituted when the player stands on the anchor.
    /// Default: 0.01.
    pub degenerate_tether_length: F,
}

impl<F: Float> GrappleConfig<F> {
    /// Create a config with the reference tuning.
    pub fn new() -> Self {
        GrappleConfig {
            grapple_force: F::from_f32(10.0),
            max_grapple_speed: F::from_f32(20.0),
            probe_max_distance: F::from_f32(100.0),
            grappleable: LayerMask::ALL,
            view_sensitivity: F::from_f32(100.0),
            rope_ease_rate: F::from_f32(8.0),
            rope_ease_mode: EaseMode::Linear,
            spring: F::from_f32(4.5),
            damper: F::from_f32(7.0),
            mass_scale: F::from_f32(4.5),
            max_extension_ratio: F::from_f32(0.8),
            min_extension_ratio: F::from_f32(0.25),
            degenerate_tether_length: F::from_f32(0.01),
        }
    }

    pub fn with_force(mut self, force: F) -> Self {
        self.grapple_force = force;
        self
    }

    pub fn with_max_speed(mut self, speed: F) -> Self {
        self.max_grapple_speed = speed;
        self
    }

    pub fn with_probe_distance(mut self, distance: F) -> Self {
        self.probe_max_distance = distance;
        self
    }

    pub fn with_grappleable(mut self, mask: LayerMask) -> Self {
        self.grappleable = mask;
        self
    }

    pub fn with_view_sensitivity(mut self, sensitivity: F) -> Self {
        self.view_sensitivity = sensitivity;
        self
    }

    /// Set the rope visual ease rate and curve.
    pub fn with_rope_ease(mut self, rate: F, mode: EaseMode) -> Self {
        self.rope_ease_rate = rate;
        self.rope_ease_mode = mode;
        self
    }

    /// Set spring, damper and mass scale of the tether link.
    pub fn with_tether_gains(mut self, spring: F, damper: F, mass_scale: F) -> Self {
        self.spring = spring;
        self.damper = damper;
        self.mass_scale = mass_scale;
        self
    }

    /// Set the fractions of the attach distance used for the link bounds.
    pub fn with_extension_ratios(mut self, min: F, max: F) -> Self {
        self.min_extension_ratio = min;
        self.max_extension_ratio = max;
        self
    }

    pub fn with_degenerate_length(mut self, length: F) -> Self {
        self.degenerate_tether_length = length;
        self
    }

    /// Check every field; the controller refuses to start on failure.
    pub fn validate(&self) -> Result<(), GrappleError> {
        let zero = F::zero();
        if !self.grapple_force.is_finite() || self.grapple_force < zero {
            return Err(GrappleError::InvalidForce);
        }
        if !self.max_grapple_speed.is_finite() || self.max_grapple_speed <= zero {
            return Err(GrappleError::InvalidSpeedCap);
        }
        if !self.probe_max_distance.is_finite() || self.probe_max_distance <= zero {
            return Err(GrappleError::InvalidProbeDistance);
        }
        if !self.view_sensitivity.is_finite() {
            return Err(GrappleError::InvalidSensitivity);
        }
        if !self.rope_ease_rate.is_finite() || self.rope_ease_rate < zero {
            return Err(GrappleError::InvalidEaseRate);
        }
        for gain in [self.spring, self.damper, self.mass_scale] {
            if !gain.is_finite() || gain < zero {
                return Err(GrappleError::InvalidTetherGains);
            }
        }
        let (min, max) = (self.min_extension_ratio, self.max_extension_ratio);
        if !min.is_finite() || !max.is_finite() || min < zero || max <= min {
            return Err(GrappleError::InvalidExtensionRatios);
        }
        if !self.degenerate_tether_length.is_finite() || self.degenerate_tether_length <= zero {
            return Err(GrappleError::InvalidDegenerateLength);
        }
        Ok(())
    }
}

impl<F: Float> Default for GrappleConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for stepping the sandbox world.
///
/// ```
/// use grapple::config::SandboxConfig;
/// use grapple::vec::Vec3;
///
/// let config: SandboxConfig<f32> = SandboxConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_sub_steps(4);
/// assert_eq!(config.sub_steps, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SandboxConfig<F: Float> {
    /// Gravity acceleration. Default: zero.
    pub gravity: Vec3<F>,
    /// Per-step velocity retention in [0, 1]. 1.0 = no drag. Default: 1.0.
    pub linear_damping: F,
    /// Sub-steps per `step` call. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> SandboxConfig<F> {
    pub fn new() -> Self {
        SandboxConfig {
            gravity: Vec3::zero(),
            linear_damping: F::one(),
            sub_steps: 1,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_linear_damping(mut self, damping: F) -> Self {
        self.linear_damping = damping;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<F: Float> Default for SandboxConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
