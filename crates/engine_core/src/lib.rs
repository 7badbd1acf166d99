//! Core engine types shared by the orrery crates.
//!
//! This crate provides the foundational types used across all systems:
//! - Frame clock driving the per-tick simulation
//! - Scene-node transforms written back to the renderer

pub mod time;
pub mod transform;

pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec3};
