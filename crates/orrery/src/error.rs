//! Scene-level error taxonomy.

use procgen::{BodyId, ProcgenError};
use thiserror::Error;

/// Errors surfaced by scene construction and UI-facing lookups.
///
/// Setup defects (`InvalidConfiguration`, `NoBodies`, `Procgen`) come out of
/// `Scene::new`. The per-frame path never fails; asset problems are logged
/// and rendered with the fallback material.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("scene needs at least one body")]
    NoBodies,
    #[error("unknown body `{0}`")]
    UnknownBody(BodyId),
    #[error("asset unavailable for `{body}`: {detail}")]
    AssetUnavailable { body: BodyId, detail: String },
    #[error("body index {index} out of range for {count} bodies")]
    IndexOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Procgen(#[from] ProcgenError),
}
