//! Grapple-rope tether physics for games.
//!
//! `grapple` turns a button press into a bounded spring-damper tether between
//! a player body and a world anchor, pulls the player toward the anchor while
//! they are below a speed cap, and eases a cosmetic rope endpoint out from
//! the emitter. A decoupled first-person view controller supplies the aim.
//!
//! # Features
//!
//! - **Anchor probing**: bounded, layer-filtered raycast along the view forward
//! - **Tether lifecycle**: bounds derived once per episode, idempotent detach
//! - **Momentum injection**: pull force gated by a speed ceiling
//! - **Rope visuals**: linear or exponential easing toward the anchor
//! - **Host traits**: raycast, constraint solver, body state and line drawing
//!   are supplied by the engine; [`SandboxWorld`] is a small built-in host
//! - **Observable**: grapple events via [`GrappleObserver`], logs via `tracing`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod quat;
pub mod host;
pub mod probe;
pub mod tether;
pub mod momentum;
pub mod rope;
pub mod view;
pub mod controller;
pub mod body;
pub mod collider;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use quat::Quat;
pub use host::{
    BodyId, BodyState, ColliderId, ConstraintWorld, GrappleInput, LayerMask, LinkHandle,
    RaycastHit, RaycastQuery, RopeRenderer, SpringLink,
};
pub use probe::AnchorProbe;
pub use tether::{TetherConstraint, TetherParams};
pub use momentum::MomentumInjector;
pub use rope::{EaseMode, RopeVisualTracker};
pub use view::ViewController;
pub use controller::{Aim, GrappleController, GrappleState, InputOutcome};
pub use body::RigidBody;
pub use collider::{Collider, Shape};
pub use world::SandboxWorld;
pub use config::{GrappleConfig, SandboxConfig};
pub use observer::{GrappleObserver, NoOpGrappleObserver, NoOpStepObserver, StepObserver};
pub use error::GrappleError;

/// Everything needed to wire a grapple into a game loop.
pub mod prelude {
    pub use crate::{
        Aim, BodyId, BodyState, Collider, ConstraintWorld, EaseMode, GrappleConfig,
        GrappleController, GrappleError, GrappleInput, GrappleObserver, GrappleState,
        InputOutcome, LayerMask, NoOpGrappleObserver, NoOpStepObserver, RaycastQuery,
        RigidBody, RopeRenderer, SandboxConfig, SandboxWorld, Vec, Vec2, Vec3, ViewController,
    };
}
