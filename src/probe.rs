//! Anchor probe: the directed query that picks the grapple point.

use crate::float::Float;
use crate::host::{LayerMask, RaycastHit, RaycastQuery};
use crate::vec::{Vec, Vec3};

/// Bounded, mask-filtered ray query from the viewpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorProbe<F: Float> {
    pub max_distance: F,
    pub mask: LayerMask,
}

impl<F: Float> AnchorProbe<F> {
    pub fn new(max_distance: F, mask: LayerMask) -> Self {
        AnchorProbe { max_distance, mask }
    }

    /// Full hit record for the first qualifying surface along `direction`.
    ///
    /// `direction` need not be unit length. A zero direction or a
    /// non-positive range never reaches the host and yields `None`.
    pub fn cast<Q: RaycastQuery<F> + ?Sized>(
        &self,
        query: &Q,
        origin: Vec3<F>,
        direction: Vec3<F>,
    ) -> Option<RaycastHit<F>> {
        if !(self.max_distance > F::zero()) {
            return None;
        }
        let direction = direction.try_normalize()?;
        query.raycast(origin, direction, self.max_distance, self.mask)
    }

    /// Point on the first qualifying surface, if any.
    pub fn probe<Q: RaycastQuery<F> + ?Sized>(
        &self,
        query: &Q,
        origin: Vec3<F>,
        direction: Vec3<F>,
    ) -> Option<Vec3<F>> {
        self.cast(query, origin, direction).map(|hit| hit.point)
    }
}

/// One-shot form of [`AnchorProbe::probe`].
pub fn probe<F: Float, Q: RaycastQuery<F> + ?Sized>(
    query: &Q,
    origin: Vec3<F>,
    direction: Vec3<F>,
    max_distance: F,
    mask: LayerMask,
) -> Option<Vec3<F>> {
    AnchorProbe::new(max_distance, mask).probe(query, origin, direction)
}
