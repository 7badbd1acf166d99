//! Errors raised while configuring procedural inputs.

use thiserror::Error;

/// Setup defects in procedural generation inputs. Never produced per frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcgenError {
    #[error("cap angle must lie strictly between 0 and 90 degrees, got {0}")]
    InvalidCapAngle(f32),
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("invalid orbit layout: {0}")]
    InvalidLayout(&'static str),
    #[error("planet texture pool is empty")]
    EmptyTexturePool,
    #[error("cloud overlay pool is empty")]
    EmptyCloudPool,
}
