//! Host service boundary: the traits the grapple core calls into, and the
//! handle types that cross it.
//!
//! The core never integrates bodies, intersects geometry or draws lines
//! itself. A game engine implements these traits; [`crate::world::SandboxWorld`]
//! is a small in-crate implementation used by the tests and the demo.

use crate::error::GrappleError;
use crate::float::Float;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a dynamic body in the host world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(pub u32);

/// Identifies a static collider in the host world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColliderId(pub u32);

/// Key into the host's spring-link table.
///
/// The generation is bumped every time a slot is reused, so a handle kept
/// past its episode never resolves to a newer link.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkHandle {
    pub index: u32,
    pub generation: u32,
}

/// Classification filter for probe targets. Bit `n` set means layer `n`
/// is grappleable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask with a single layer bit set. Layers above 31 yield an empty mask.
    pub fn layer(layer: u8) -> Self {
        LayerMask(1u32.checked_shl(u32::from(layer)).unwrap_or(0))
    }

    /// Union of two masks.
    pub fn with(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }

    /// True if `layer` is included in the mask.
    pub fn contains(self, layer: u8) -> bool {
        self.intersects(LayerMask::layer(layer))
    }

    /// True if the masks share any layer.
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// First surface intersection reported by a raycast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaycastHit<F: Float> {
    pub point: Vec3<F>,
    pub normal: Vec3<F>,
    pub distance: F,
    pub collider: ColliderId,
}

/// Declarative spring-damper link between a body and a fixed world point.
///
/// The solver leaves the body alone while its distance to `anchor` lies in
/// `[min_distance, max_distance]` and pushes it back toward the range
/// otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringLink<F: Float> {
    pub body: BodyId,
    pub anchor: Vec3<F>,
    pub min_distance: F,
    pub max_distance: F,
    pub stiffness: F,
    pub damping: F,
    pub mass_scale: F,
}

/// Physics query service.
pub trait RaycastQuery<F: Float> {
    /// Cast a ray of at most `max_distance` along the unit `direction` and
    /// return the nearest hit on a collider whose layer is in `mask`.
    fn raycast(
        &self,
        origin: Vec3<F>,
        direction: Vec3<F>,
        max_distance: F,
        mask: LayerMask,
    ) -> Option<RaycastHit<F>>;
}

/// Read access to dynamic bodies.
pub trait BodyState<F: Float> {
    fn contains_body(&self, body: BodyId) -> bool;
    fn body_position(&self, body: BodyId) -> Option<Vec3<F>>;
    fn body_velocity(&self, body: BodyId) -> Option<Vec3<F>>;
}

/// Constraint and force solver.
pub trait ConstraintWorld<F: Float>: BodyState<F> {
    /// Register a link; it is enforced on every subsequent physics step.
    fn create_link(&mut self, link: SpringLink<F>) -> Result<LinkHandle, GrappleError>;

    /// Remove a link. Returns `false` if the handle was already gone.
    fn destroy_link(&mut self, handle: LinkHandle) -> bool;

    /// Accumulate a force on a body for the next physics step.
    fn add_force(&mut self, body: BodyId, force: Vec3<F>) -> Result<(), GrappleError>;
}

/// Line-drawing service for the rope.
pub trait RopeRenderer<F: Float> {
    fn draw_segment(&mut self, start: Vec3<F>, end: Vec3<F>);
    fn clear(&mut self);
}

/// Edge-triggered grapple button state for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrappleInput {
    pub pressed: bool,
    pub released: bool,
}

impl GrappleInput {
    pub fn press() -> Self {
        GrappleInput { pressed: true, released: false }
    }

    pub fn release() -> Self {
        GrappleInput { pressed: false, released: true }
    }

    pub fn idle() -> Self {
        GrappleInput::default()
    }
}
