//! Tether constraint: attach/detach lifecycle of the spring-damper link
//! between the player body and a fixed anchor.
//!
//! The tether only *configures* the link. Enforcing it every physics step
//! is the host solver's job ([`ConstraintWorld`]).

use crate::config::GrappleConfig;
use crate::error::GrappleError;
use crate::float::Float;
use crate::host::{BodyId, ConstraintWorld, LinkHandle, SpringLink};
use crate::vec::{Vec, Vec3, NEAR_ZERO_LENGTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds and gains of one tether episode, derived once at attach.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TetherParams<F: Float> {
    pub max_extension: F,
    pub min_extension: F,
    pub spring_stiffness: F,
    pub damping_coefficient: F,
    pub effective_mass_scale: F,
}

impl<F: Float> TetherParams<F> {
    /// Derive the episode parameters from the attach distance.
    ///
    /// A distance that is effectively zero is replaced by
    /// `config.degenerate_tether_length` so the bounds never collapse.
    pub fn from_distance(distance: F, config: &GrappleConfig<F>) -> Self {
        let distance = if distance.is_near_zero(F::from_f32(NEAR_ZERO_LENGTH)) {
            tracing::warn!(
                substitute = ?config.degenerate_tether_length,
                "tether attached at zero distance; clamping"
            );
            config.degenerate_tether_length
        } else {
            distance
        };
        TetherParams {
            max_extension: distance * config.max_extension_ratio,
            min_extension: distance * config.min_extension_ratio,
            spring_stiffness: config.spring,
            damping_coefficient: config.damper,
            effective_mass_scale: config.mass_scale,
        }
    }

    /// The declarative link the host solver should enforce.
    pub fn link(&self, body: BodyId, anchor: Vec3<F>) -> SpringLink<F> {
        SpringLink {
            body,
            anchor,
            min_distance: self.min_extension,
            max_distance: self.max_extension,
            stiffness: self.spring_stiffness,
            damping: self.damping_coefficient,
            mass_scale: self.effective_mass_scale,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Episode<F: Float> {
    handle: LinkHandle,
    anchor: Vec3<F>,
    params: TetherParams<F>,
}

/// Owns at most one live link for a single body.
///
/// The link handle, anchor and bounds live together in one optional
/// episode, so "attached" and "has a handle" can never disagree.
pub struct TetherConstraint<F: Float> {
    body: BodyId,
    config: GrappleConfig<F>,
    episode: Option<Episode<F>>,
}

impl<F: Float> TetherConstraint<F> {
    pub fn new(body: BodyId, config: &GrappleConfig<F>) -> Self {
        TetherConstraint { body, config: config.clone(), episode: None }
    }

    /// Create the spring-damper link from `player_position` to `anchor`.
    ///
    /// Bounds are `max_extension_ratio` and `min_extension_ratio` times the
    /// current distance and stay fixed until [`detach`](Self::detach).
    pub fn attach<W: ConstraintWorld<F> + ?Sized>(
        &mut self,
        world: &mut W,
        player_position: Vec3<F>,
        anchor: Vec3<F>,
    ) -> Result<LinkHandle, GrappleError> {
        if self.episode.is_some() {
            return Err(GrappleError::AlreadyAttached);
        }
        let params = TetherParams::from_distance(player_position.distance(anchor), &self.config);
        let handle = world.create_link(params.link(self.body, anchor))?;
        tracing::debug!(
            body = self.body.0,
            ?anchor,
            max = ?params.max_extension,
            min = ?params.min_extension,
            "tether attached"
        );
        self.episode = Some(Episode { handle, anchor, params });
        Ok(handle)
    }

    /// Destroy the link. Returns `false` when nothing was attached.
    pub fn detach<W: ConstraintWorld<F> + ?Sized>(&mut self, world: &mut W) -> bool {
        match self.episode.take() {
            Some(episode) => {
                if !world.destroy_link(episode.handle) {
                    tracing::warn!(handle = ?episode.handle, "host had already dropped the tether link");
                }
                tracing::debug!(body = self.body.0, "tether detached");
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.episode.is_some()
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn handle(&self) -> Option<LinkHandle> {
        self.episode.map(|e| e.handle)
    }

    pub fn anchor(&self) -> Option<Vec3<F>> {
        self.episode.map(|e| e.anchor)
    }

    pub fn params(&self) -> Option<&TetherParams<F>> {
        self.episode.as_ref().map(|e| &e.params)
    }
}

impl<F: Float> Drop for TetherConstraint<F> {
    fn drop(&mut self) {
        if let Some(episode) = self.episode {
            tracing::warn!(
                body = self.body.0,
                handle = ?episode.handle,
                "tether dropped while attached; host link was not destroyed"
            );
        }
    }
}
