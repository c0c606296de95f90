//! Cosmetic rope endpoint that eases toward the anchor.
//!
//! Nothing here feeds back into physics. The tracked point starts at the
//! emitter when an episode begins so the rope visibly shoots out, then
//! closes on the anchor a fraction of the remaining gap each frame.

use crate::float::Float;
use crate::host::RopeRenderer;
use crate::vec::{Vec, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpolation curve for the visual endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EaseMode {
    /// `lerp(current, target, rate * dt)`, factor clamped to [0, 1].
    #[default]
    Linear,
    /// `lerp(current, target, 1 - e^(-rate * dt))`. Frame-rate independent.
    Exponential,
}

impl EaseMode {
    /// Fraction of the remaining gap closed in one step.
    pub fn factor<F: Float>(self, rate: F, dt: F) -> F {
        let x = rate * dt;
        match self {
            EaseMode::Linear => x.clamp(F::zero(), F::one()),
            EaseMode::Exponential => (F::one() - (-x).exp()).clamp(F::zero(), F::one()),
        }
    }
}

/// One linear easing step from `current` toward `target`.
pub fn advance<F: Float>(current: Vec3<F>, target: Vec3<F>, dt: F, ease_rate: F) -> Vec3<F> {
    current.lerp(target, EaseMode::Linear.factor(ease_rate, dt))
}

/// Visual endpoint state for one rope.
#[derive(Clone, Debug, PartialEq)]
pub struct RopeVisualTracker<F: Float> {
    ease_rate: F,
    mode: EaseMode,
    current: Option<Vec3<F>>,
}

impl<F: Float> RopeVisualTracker<F> {
    pub fn new(ease_rate: F, mode: EaseMode) -> Self {
        RopeVisualTracker { ease_rate, mode, current: None }
    }

    /// Begin a new rope at the emitter.
    pub fn start(&mut self, emitter: Vec3<F>) {
        self.current = Some(emitter);
    }

    /// Ease toward `target`. Returns the new endpoint, or `None` while no
    /// rope is shown.
    pub fn advance(&mut self, target: Vec3<F>, dt: F) -> Option<Vec3<F>> {
        let factor = self.mode.factor(self.ease_rate, dt);
        let next = self.current?.lerp(target, factor);
        self.current = Some(next);
        Some(next)
    }

    /// Hide the rope.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn visual_point(&self) -> Option<Vec3<F>> {
        self.current
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Segment from the emitter to the eased endpoint.
    pub fn segment(&self, emitter: Vec3<F>) -> Option<(Vec3<F>, Vec3<F>)> {
        self.current.map(|end| (emitter, end))
    }

    /// Paint the rope, or clear the line when no rope is shown.
    pub fn draw<R: RopeRenderer<F> + ?Sized>(&self, renderer: &mut R, emitter: Vec3<F>) {
        match self.segment(emitter) {
            Some((start, end)) => renderer.draw_segment(start, end),
            None => renderer.clear(),
        }
    }
}
