//! Orbital layout: per-body motion constants and the per-frame integrator.
//!
//! Orbits are parametric circles in the XZ plane with constant angular velocity.
//! The base radius grows with body index so inner bodies stay inner; every other
//! constant is drawn uniformly inside a band. Nothing here models gravity.

use crate::error::ProcgenError;
use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Bands the generator draws each body's constants from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitLayout {
    /// Base orbital radius of body 0.
    pub inner_radius: f32,
    /// Added to the base radius per body index.
    pub spacing: f32,
    /// Uniform extra radius in `[0, radius_jitter)`.
    pub radius_jitter: f32,
    /// Nominal body radius before size variation.
    pub base_body_radius: f32,
    /// Body radius is `base * (1 + u)` with `u` in `[-size_variation, size_variation)`.
    pub size_variation: f32,
    pub spin_min: f32,
    pub spin_range: f32,
    /// Orbital angular speed in radians per second.
    pub speed_min: f32,
    pub speed_range: f32,
}

impl Default for OrbitLayout {
    fn default() -> Self {
        Self {
            inner_radius: 25.0,
            spacing: 10.0,
            radius_jitter: 15.0,
            base_body_radius: 2.0,
            size_variation: 0.5,
            spin_min: 0.0001,
            spin_range: 0.0005,
            speed_min: 0.01,
            speed_range: 0.03,
        }
    }
}

impl OrbitLayout {
    /// Default bands with a different per-index spacing.
    pub fn with_spacing(spacing: f32) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    /// Reject bands that could produce a non-positive radius or speed.
    pub fn validate(&self) -> Result<(), ProcgenError> {
        let finite = [
            self.inner_radius,
            self.spacing,
            self.radius_jitter,
            self.base_body_radius,
            self.size_variation,
            self.spin_min,
            self.spin_range,
            self.speed_min,
            self.speed_range,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ProcgenError::InvalidLayout("all bands must be finite"));
        }
        if self.inner_radius <= 0.0 || self.spacing < 0.0 || self.radius_jitter < 0.0 {
            return Err(ProcgenError::InvalidLayout("orbital radius bands must be positive"));
        }
        if self.base_body_radius <= 0.0 || !(0.0..1.0).contains(&self.size_variation) {
            return Err(ProcgenError::InvalidLayout("body radius bands must stay positive"));
        }
        if self.speed_min <= 0.0 || self.speed_range < 0.0 {
            return Err(ProcgenError::InvalidLayout("orbital speed must be positive"));
        }
        if self.spin_min < 0.0 || self.spin_range < 0.0 {
            return Err(ProcgenError::InvalidLayout("self-rotation speed must be non-negative"));
        }
        Ok(())
    }
}

/// Motion constants for one body. Immutable until the system is regenerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    pub orbital_radius: f32,
    /// Radians per second of elapsed time.
    pub orbital_speed: f32,
    /// Angle at elapsed time zero, in `[0, 2π)`.
    pub initial_angle: f32,
    pub body_radius: f32,
    /// Self-rotation increment; see [`SpinTimeBase`] for its time base.
    pub self_rotation_speed: f32,
}

impl OrbitalParameters {
    /// Orbit angle at `elapsed` seconds. Not wrapped; sin/cos take care of that.
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        self.initial_angle + elapsed * self.orbital_speed
    }

    /// Position on the orbital plane (`y == 0`) at `elapsed` seconds.
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let (sin, cos) = self.angle_at(elapsed).sin_cos();
        Vec3::new(self.orbital_radius * sin, 0.0, self.orbital_radius * cos)
    }
}

/// Generate motion constants for `body_count` bodies.
///
/// Not reproducible unless the caller seeds `rng`; a fresh entropy-seeded source
/// re-rolls the whole system, which is what "randomize" relies on.
pub fn generate_orbits<R: Rng + ?Sized>(
    rng: &mut R,
    body_count: usize,
    layout: &OrbitLayout,
) -> Vec<OrbitalParameters> {
    (0..body_count)
        .map(|i| {
            let base_radius = layout.inner_radius + i as f32 * layout.spacing;
            let orbital_radius = base_radius + rng.gen::<f32>() * layout.radius_jitter;

            let size_offset = (rng.gen::<f32>() * 2.0 - 1.0) * layout.size_variation;
            let body_radius = layout.base_body_radius * (1.0 + size_offset);

            let self_rotation_speed = layout.spin_min + rng.gen::<f32>() * layout.spin_range;
            let orbital_speed = layout.speed_min + rng.gen::<f32>() * layout.speed_range;
            let initial_angle = rng.gen_range(0.0..TAU);

            OrbitalParameters {
                orbital_radius,
                orbital_speed,
                initial_angle,
                body_radius,
                self_rotation_speed,
            }
        })
        .collect()
}

/// How the self-rotation increment relates to frame time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SpinTimeBase {
    /// Advance by the raw speed once per tick. Spin rate follows the frame rate.
    #[default]
    PerTick,
    /// Advance by `speed * dt * reference_fps`, matching `PerTick` at `reference_fps`.
    Scaled { reference_fps: f32 },
}

impl SpinTimeBase {
    /// Rotation to add this tick.
    pub fn increment(&self, speed: f32, delta_seconds: f32) -> f32 {
        match *self {
            SpinTimeBase::PerTick => speed,
            SpinTimeBase::Scaled { reference_fps } => speed * delta_seconds.max(0.0) * reference_fps,
        }
    }
}

/// Accumulated self-rotation of one body. Kept apart from [`integrate`] so that
/// the position stays a pure function of the parameters and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    pub angle: f32,
}

impl SpinState {
    pub fn advance(&mut self, params: &OrbitalParameters, base: SpinTimeBase, delta_seconds: f32) {
        self.angle += base.increment(params.self_rotation_speed, delta_seconds);
    }
}

/// Position and Y rotation of a body for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalPose {
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Pose of a body at `elapsed` seconds with its current spin.
pub fn integrate(params: &OrbitalParameters, elapsed: f32, spin: &SpinState) -> OrbitalPose {
    OrbitalPose {
        position: params.position_at(elapsed),
        rotation_y: spin.angle,
    }
}
