//! Observer traits for grapple events and sandbox stepping.

use crate::float::Float;
use crate::tether::TetherParams;
use crate::vec::Vec3;

/// Trait for observing grapple episodes.
///
/// Implement this to drive sound, particles or debug overlays from the
/// grapple lifecycle. All methods have default no-op implementations.
pub trait GrappleObserver<F: Float> {
    /// The probe found nothing grappleable; no episode started.
    fn on_probe_miss(&mut self) {}

    /// A tether was attached to `anchor` with the given bounds.
    fn on_attach(&mut self, _anchor: Vec3<F>, _params: &TetherParams<F>) {}

    /// The episode anchored at `anchor` ended.
    fn on_detach(&mut self, _anchor: Vec3<F>) {}

    /// A pull force was handed to the solver this tick. Not called when the
    /// speed gate suppressed the force.
    fn on_force(&mut self, _force: Vec3<F>) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpGrappleObserver;

impl<F: Float> GrappleObserver<F> for NoOpGrappleObserver {}

/// Trait for observing sandbox world steps.
pub trait StepObserver {
    /// Called after link forces have been accumulated for a sub-step.
    fn on_links_applied(&mut self, _active_links: usize) {}

    /// Called after all bodies have been integrated for a sub-step.
    fn on_integrate(&mut self) {}

    /// Called when a `step` call is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op step observer.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
