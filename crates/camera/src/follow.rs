//! Smoothed camera follow for the targeted body.
//!
//! Each tick both the look-at target and the eye move a fixed fraction of the
//! way toward their desired positions. Applied every frame this converges
//! without overshoot. Switching bodies never snaps: the rig simply starts
//! converging on the new body from wherever it is.

use crate::rig::CameraRig;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Follow tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowController {
    /// Fraction of the remaining distance covered per tick, in `(0, 1]`.
    pub smoothing: f32,
    /// When set, `smoothing` is taken to be per frame at this rate and is
    /// rescaled by the actual frame time. `None` applies it per tick as-is,
    /// so convergence speed follows the frame rate.
    pub reference_fps: Option<f32>,
    /// Eye height above the orbital plane, in body radii.
    pub height_radii: f32,
    /// Eye offset along +Z from the body, in body radii.
    pub distance_radii: f32,
}

impl Default for FollowController {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            reference_fps: None,
            height_radii: 2.0,
            distance_radii: 4.0,
        }
    }
}

impl FollowController {
    /// Where the rig wants to be for a body at `body_position` with `body_radius`.
    pub fn desired(&self, body_position: Vec3, body_radius: f32) -> CameraRig {
        CameraRig {
            eye: Vec3::new(
                body_position.x,
                body_radius * self.height_radii,
                body_position.z + body_radius * self.distance_radii,
            ),
            target: Vec3::new(body_position.x, 0.0, body_position.z),
        }
    }

    /// Interpolation factor for a tick of `delta_seconds`.
    pub fn factor(&self, delta_seconds: f32) -> f32 {
        let s = self.smoothing.clamp(0.0, 1.0);
        match self.reference_fps {
            None => s,
            Some(fps) if fps > 0.0 => 1.0 - (1.0 - s).powf(delta_seconds.max(0.0) * fps),
            Some(_) => s,
        }
    }

    /// Next rig state. With `lock_enabled == false` the rig is returned untouched
    /// so free-look input keeps control.
    pub fn follow(
        &self,
        rig: CameraRig,
        body_position: Vec3,
        body_radius: f32,
        lock_enabled: bool,
        delta_seconds: f32,
    ) -> CameraRig {
        if !lock_enabled {
            return rig;
        }
        let desired = self.desired(body_position, body_radius);
        let t = self.factor(delta_seconds);
        CameraRig {
            eye: rig.eye.lerp(desired.eye, t),
            target: rig.target.lerp(desired.target, t),
        }
    }
}
