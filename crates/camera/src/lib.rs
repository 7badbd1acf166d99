//! Camera state and controllers for the planetary view.
//!
//! - `CameraRig`: eye and look-at target, plus free-look orbit/zoom
//! - `FollowController`: smoothed tracking of the targeted body

pub mod follow;
pub mod rig;

pub use follow::*;
pub use rig::*;
