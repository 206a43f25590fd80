//! Rejected kinematic inputs.

use thiserror::Error;

/// Caller-contract violations detected by the kinematic operations.
///
/// The bullet is left untouched when one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    /// The velocity has no usable magnitude to rescale.
    #[error("cannot rescale a velocity with zero or non-finite magnitude")]
    ZeroSpeed,
    /// Interpolation over zero steps.
    #[error("linear interpolation needs at least one step")]
    ZeroSteps,
}
