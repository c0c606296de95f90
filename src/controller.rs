//! Per-player grapple controller driven explicitly by the host game loop.
//!
//! Call order every frame:
//!
//! 1. [`GrappleController::on_input`] with the button edges,
//! 2. [`GrappleController::on_tick`] with the frame delta,
//! 3. [`GrappleController::on_late_tick`] to paint the rope.
//!
//! # Example
//! ```
//! use grapple::prelude::*;
//!
//! let mut world: SandboxWorld<f32> = SandboxWorld::new();
//! let player = world.add_body(RigidBody::new(Vec3::new(0.0, 0.0, 0.0), 1.0)).unwrap();
//! world.add_collider(Collider::aabb(
//!     Vec3::new(-1.0, 10.0, -1.0),
//!     Vec3::new(1.0, 11.0, 1.0),
//!     0,
//! ));
//!
//! let mut grapple = GrappleController::new(GrappleConfig::new(), player, &world).unwrap();
//! let aim = Aim::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
//! let outcome = grapple
//!     .on_input(GrappleInput::press(), aim, aim.origin, &mut world, &mut NoOpGrappleObserver)
//!     .unwrap();
//! assert!(matches!(outcome, InputOutcome::Attached { .. }));
//! assert!(grapple.is_grappling());
//! ```

use crate::config::GrappleConfig;
use crate::error::GrappleError;
use crate::float::Float;
use crate::host::{
    BodyId, BodyState, ConstraintWorld, GrappleInput, LinkHandle, RaycastQuery, RopeRenderer,
};
use crate::momentum::MomentumInjector;
use crate::observer::{GrappleObserver, NoOpGrappleObserver};
use crate::probe::AnchorProbe;
use crate::rope::RopeVisualTracker;
use crate::tether::{TetherConstraint, TetherParams};
use crate::vec::{Vec, Vec3};
use crate::view::ViewController;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observable snapshot of one player's grapple.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrappleState<F: Float> {
    pub is_active: bool,
    pub anchor_point: Option<Vec3<F>>,
    pub visual_point: Option<Vec3<F>>,
    pub constraint_handle: Option<LinkHandle>,
}

/// Ray the probe casts along.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aim<F: Float> {
    pub origin: Vec3<F>,
    pub forward: Vec3<F>,
}

impl<F: Float> Aim<F> {
    pub fn new(origin: Vec3<F>, forward: Vec3<F>) -> Self {
        Aim { origin, forward }
    }

    pub fn from_view(view: &ViewController<F>) -> Self {
        Aim { origin: view.position(), forward: view.forward() }
    }
}

/// What a call to [`GrappleController::on_input`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputOutcome<F: Float> {
    /// A new episode started.
    Attached { anchor: Vec3<F>, handle: LinkHandle },
    /// Press with nothing grappleable in range; state unchanged.
    NoAnchorFound,
    /// Release ended the episode.
    Detached,
    /// No edge, a press during an episode, or a release with nothing attached.
    Ignored,
}

/// Owns the grapple of a single player body.
pub struct GrappleController<F: Float> {
    config: GrappleConfig<F>,
    body: BodyId,
    probe: AnchorProbe<F>,
    tether: TetherConstraint<F>,
    injector: MomentumInjector<F>,
    rope: RopeVisualTracker<F>,
}

impl<F: Float> GrappleController<F> {
    /// Validate `config` and bind to `body`.
    ///
    /// Fails with [`GrappleError::SolverUnavailable`] when the host has no
    /// such body; the grapple never runs half-initialized.
    pub fn new<B: BodyState<F> + ?Sized>(
        config: GrappleConfig<F>,
        body: BodyId,
        bodies: &B,
    ) -> Result<Self, GrappleError> {
        config.validate()?;
        if !bodies.contains_body(body) {
            return Err(GrappleError::SolverUnavailable { body });
        }
        Ok(GrappleController {
            probe: AnchorProbe::new(config.probe_max_distance, config.grappleable),
            tether: TetherConstraint::new(body, &config),
            injector: MomentumInjector::new(config.grapple_force, config.max_grapple_speed),
            rope: RopeVisualTracker::new(config.rope_ease_rate, config.rope_ease_mode),
            config,
            body,
        })
    }

    /// Handle the button edges for this frame. A press wins over a release
    /// arriving in the same frame.
    pub fn on_input<W, O>(
        &mut self,
        input: GrappleInput,
        aim: Aim<F>,
        emitter: Vec3<F>,
        world: &mut W,
        observer: &mut O,
    ) -> Result<InputOutcome<F>, GrappleError>
    where
        W: RaycastQuery<F> + ConstraintWorld<F> + ?Sized,
        O: GrappleObserver<F> + ?Sized,
    {
        if input.pressed {
            self.start(aim, emitter, world, observer)
        } else if input.released && self.detach(world, observer) {
            Ok(InputOutcome::Detached)
        } else {
            Ok(InputOutcome::Ignored)
        }
    }

    fn start<W, O>(
        &mut self,
        aim: Aim<F>,
        emitter: Vec3<F>,
        world: &mut W,
        observer: &mut O,
    ) -> Result<InputOutcome<F>, GrappleError>
    where
        W: RaycastQuery<F> + ConstraintWorld<F> + ?Sized,
        O: GrappleObserver<F> + ?Sized,
    {
        if self.tether.is_attached() {
            return Ok(InputOutcome::Ignored);
        }
        let Some(anchor) = self.probe.probe(&*world, aim.origin, aim.forward) else {
            tracing::debug!(body = self.body.0, "no grappleable surface in range");
            observer.on_probe_miss();
            return Ok(InputOutcome::NoAnchorFound);
        };
        let position = world
            .body_position(self.body)
            .ok_or(GrappleError::UnknownBody { body: self.body })?;
        let handle = self.tether.attach(world, position, anchor)?;
        self.rope.start(emitter);
        if let Some(params) = self.tether.params() {
            observer.on_attach(anchor, params);
        }
        Ok(InputOutcome::Attached { anchor, handle })
    }

    /// Advance the rope visual and inject the pull force.
    ///
    /// Returns the force handed to the solver, `Some(zero)` when the speed
    /// gate held it back, or `None` when nothing is attached or the body
    /// has vanished from the host.
    pub fn on_tick<W, O>(
        &mut self,
        dt: F,
        world: &mut W,
        observer: &mut O,
    ) -> Result<Option<Vec3<F>>, GrappleError>
    where
        W: ConstraintWorld<F> + ?Sized,
        O: GrappleObserver<F> + ?Sized,
    {
        let Some(anchor) = self.tether.anchor() else {
            return Ok(None);
        };
        self.rope.advance(anchor, dt);

        let (Some(position), Some(velocity)) =
            (world.body_position(self.body), world.body_velocity(self.body))
        else {
            tracing::warn!(body = self.body.0, "grappling body missing from host; skipping pull");
            return Ok(None);
        };
        let force = self.injector.apply(position, velocity, anchor);
        if force != Vec3::zero() {
            world.add_force(self.body, force)?;
            observer.on_force(force);
            tracing::trace!(body = self.body.0, ?force, "grapple pull");
        }
        Ok(Some(force))
    }

    /// Paint the rope from `emitter`, or clear it when idle.
    pub fn on_late_tick<R: RopeRenderer<F> + ?Sized>(&self, emitter: Vec3<F>, renderer: &mut R) {
        self.rope.draw(renderer, emitter);
    }

    /// End the current episode. Safe to call at any time; returns `false`
    /// when nothing was attached.
    pub fn detach<W, O>(&mut self, world: &mut W, observer: &mut O) -> bool
    where
        W: ConstraintWorld<F> + ?Sized,
        O: GrappleObserver<F> + ?Sized,
    {
        let anchor = self.tether.anchor();
        if !self.tether.detach(world) {
            return false;
        }
        self.rope.clear();
        if let Some(anchor) = anchor {
            observer.on_detach(anchor);
        }
        true
    }

    /// Cleanup for entity teardown: detach without notifying an observer.
    pub fn release<W: ConstraintWorld<F> + ?Sized>(&mut self, world: &mut W) -> bool {
        self.detach(world, &mut NoOpGrappleObserver)
    }

    pub fn state(&self) -> GrappleState<F> {
        GrappleState {
            is_active: self.tether.is_attached(),
            anchor_point: self.tether.anchor(),
            visual_point: self.rope.visual_point(),
            constraint_handle: self.tether.handle(),
        }
    }

    pub fn is_grappling(&self) -> bool {
        self.tether.is_attached()
    }

    pub fn grapple_point(&self) -> Option<Vec3<F>> {
        self.tether.anchor()
    }

    pub fn params(&self) -> Option<&TetherParams<F>> {
        self.tether.params()
    }

    pub fn config(&self) -> &GrappleConfig<F> {
        &self.config
    }

    pub fn body(&self) -> BodyId {
        self.body
    }
}
