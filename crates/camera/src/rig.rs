//! Camera eye/target state and free-look controls.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Eye position and look-at target. Plain data: controllers take it by value
/// and hand back the next state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 20.0, 30.0),
            target: Vec3::ZERO,
        }
    }
}

/// Limits for user-driven orbit and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeLook {
    /// Radians of yaw/pitch per unit of drag input.
    pub sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pitch clamp in radians, keeps the view from flipping over the pole.
    pub max_pitch: f32,
}

impl FreeLook {
    /// Whether these limits describe a usable range.
    pub fn is_valid(&self) -> bool {
        self.sensitivity.is_finite()
            && self.min_distance.is_finite()
            && self.max_distance.is_finite()
            && self.min_distance > 0.0
            && self.min_distance <= self.max_distance
            && self.max_pitch > 0.0
            && self.max_pitch < std::f32::consts::FRAC_PI_2
    }
}

impl Default for FreeLook {
    fn default() -> Self {
        Self {
            sensitivity: 0.005,
            min_distance: 2.0,
            max_distance: 400.0,
            max_pitch: std::f32::consts::FRAC_PI_2 - 0.01,
        }
    }
}

impl CameraRig {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Distance from eye to target.
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Rotate the eye about the target by drag input (yaw around +Y, then pitch).
    pub fn orbit(self, drag_x: f32, drag_y: f32, limits: &FreeLook) -> Self {
        let offset = self.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return self;
        }

        let yaw = offset.x.atan2(offset.z) - drag_x * limits.sensitivity;
        let max_pitch = limits.max_pitch.abs();
        let pitch = ((offset.y / radius).clamp(-1.0, 1.0).asin() + drag_y * limits.sensitivity)
            .max(-max_pitch)
            .min(max_pitch);

        let offset = Vec3::new(
            radius * pitch.cos() * yaw.sin(),
            radius * pitch.sin(),
            radius * pitch.cos() * yaw.cos(),
        );
        Self {
            eye: self.target + offset,
            target: self.target,
        }
    }

    /// Scale the eye distance by `factor` (< 1 moves closer), clamped to the limits.
    pub fn zoom(self, factor: f32, limits: &FreeLook) -> Self {
        let offset = self.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON || !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        // Inverted limits must not panic.
        let distance = (radius * factor).max(limits.min_distance).min(limits.max_distance);
        Self {
            eye: self.target + offset * (distance / radius),
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_keeps_distance_and_target() {
        let rig = CameraRig::default();
        let d = rig.distance();
        let moved = rig.orbit(120.0, -40.0, &FreeLook::default());
        assert_eq!(moved.target, rig.target);
        assert!((moved.distance() - d).abs() < 1e-3);
        assert!((moved.eye - rig.eye).length() > 1.0);
    }

    #[test]
    fn orbit_pitch_is_clamped() {
        let limits = FreeLook::default();
        let rig = CameraRig::default().orbit(0.0, 10_000.0, &limits);
        let offset = rig.eye - rig.target;
        let pitch = (offset.y / offset.length()).asin();
        assert!(pitch <= limits.max_pitch + 1e-4);
        assert!(offset.x.abs() + offset.z.abs() > 0.0);
    }

    #[test]
    fn zoom_clamps_distance() {
        let limits = FreeLook::default();
        let rig = CameraRig::default();
        assert!((rig.zoom(0.0001, &limits).distance() - limits.min_distance).abs() < 1e-3);
        assert!((rig.zoom(1000.0, &limits).distance() - limits.max_distance).abs() < 1e-2);
        assert_eq!(rig.zoom(-1.0, &limits), rig);
    }

    #[test]
    fn inverted_limits_do_not_panic() {
        let limits = FreeLook {
            min_distance: 50.0,
            max_distance: 10.0,
            max_pitch: -0.5,
            ..Default::default()
        };
        assert!(!limits.is_valid());
        let rig = CameraRig::default();
        assert!(rig.zoom(0.5, &limits).distance().is_finite());
        let moved = rig.orbit(1.0, 1.0, &limits);
        assert!((moved.distance() - rig.distance()).abs() < 1e-3);
    }

    #[test]
    fn limit_validation() {
        assert!(FreeLook::default().is_valid());
        let bad = [
            FreeLook { min_distance: 0.0, ..Default::default() },
            FreeLook { max_distance: 1.0, ..Default::default() },
            FreeLook { max_pitch: std::f32::consts::FRAC_PI_2, ..Default::default() },
            FreeLook { sensitivity: f32::NAN, ..Default::default() },
        ];
        for limits in bad {
            assert!(!limits.is_valid(), "{:?}", limits);
        }
    }

    #[test]
    fn degenerate_rig_is_left_alone() {
        let rig = CameraRig::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(rig.orbit(5.0, 5.0, &FreeLook::default()), rig);
        assert_eq!(rig.zoom(2.0, &FreeLook::default()), rig);
    }

    #[test]
    fn view_matrix_maps_target_in_front() {
        let rig = CameraRig::default();
        let p = rig.view_matrix().transform_point3(rig.target);
        assert!(p.z < 0.0);
        assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
    }
}
