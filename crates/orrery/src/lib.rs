//! Interactive planetary system viewer core.
//!
//! - `Scene`: owns the generated system and session, applies actions, ticks
//! - `Session`: target/hover/scan/camera-lock state machine
//! - `SceneConfig`: RON-backed configuration
//! - `Frame` / `FrameSink`: per-tick output for a renderer

pub mod actions;
pub mod assets;
pub mod config;
pub mod error;
pub mod frame;
pub mod scan;
pub mod scene;
pub mod session;

pub use actions::*;
pub use assets::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use scan::*;
pub use scene::*;
pub use session::*;
