//! Error types for grapple operations.

use crate::host::{BodyId, LinkHandle};
use thiserror::Error;

/// Errors that can occur while configuring or running a grapple.
///
/// Per-tick conditions (no anchor under the crosshair, detaching twice,
/// injecting force while detached) are not errors and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrappleError {
    /// Grapple force must be finite and non-negative.
    #[error("grapple force must be finite and non-negative")]
    InvalidForce,
    /// Speed cap must be finite and positive.
    #[error("max grapple speed must be finite and positive")]
    InvalidSpeedCap,
    /// Probe distance must be finite and positive.
    #[error("probe max distance must be finite and positive")]
    InvalidProbeDistance,
    /// Extension ratios must satisfy `max > min >= 0`.
    #[error("extension ratios must satisfy max > min >= 0")]
    InvalidExtensionRatios,
    /// Spring, damper and mass scale must be finite and non-negative.
    #[error("tether spring, damper and mass scale must be finite and non-negative")]
    InvalidTetherGains,
    /// View sensitivity must be finite.
    #[error("view sensitivity must be finite")]
    InvalidSensitivity,
    /// Rope ease rate must be finite and non-negative.
    #[error("rope ease rate must be finite and non-negative")]
    InvalidEaseRate,
    /// Degenerate tether length must be finite and positive.
    #[error("degenerate tether length must be finite and positive")]
    InvalidDegenerateLength,
    /// Mass must be positive and finite.
    #[error("body mass must be positive and finite")]
    InvalidMass,
    /// The host has no body with this id.
    #[error("unknown body {body:?}")]
    UnknownBody { body: BodyId },
    /// The link handle is stale or was never issued.
    #[error("unknown or stale link {handle:?}")]
    UnknownLink { handle: LinkHandle },
    /// A tether episode is already in progress.
    #[error("tether is already attached")]
    AlreadyAttached,
    /// The host cannot create constraints for the player body. Raised at
    /// initialization; the grapple refuses to start.
    #[error("constraint solver unavailable for body {body:?}")]
    SolverUnavailable { body: BodyId },
}
