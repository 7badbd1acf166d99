//! Scene configuration. Loaded from `orrery.ron` at startup.

use crate::error::SceneError;
use camera::{CameraRig, FollowController, FreeLook};
use procgen::{
    OrbitLayout, PlanetRecord, ProcgenError, SpinTimeBase, TextureRecord, MAX_SPHERE_DIVISIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// Everything tunable about a session. Every field has a default, so a partial
/// file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Bands for orbital parameter generation.
    #[serde(default)]
    pub orbit: OrbitLayout,
    /// Time base of body self-rotation and cloud drift.
    #[serde(default)]
    pub spin_time_base: SpinTimeBase,
    /// Camera follow tuning.
    #[serde(default)]
    pub follow: FollowController,
    /// Limits for drag/zoom while the camera is unlocked.
    #[serde(default)]
    pub free_look: FreeLook,
    /// Camera pose at session start.
    #[serde(default)]
    pub initial_camera: CameraRig,
    /// Scan sweep growth per second.
    #[serde(default = "default_scan_rate")]
    pub scan_rate: f32,
    /// Scan sweep wraps back to zero at this value.
    #[serde(default = "default_scan_wrap")]
    pub scan_wrap: f32,
    /// Angular radius of the flattened pole caps on planet meshes.
    #[serde(default = "default_cap_angle")]
    pub cap_angle_degrees: f32,
    #[serde(default = "default_sphere_segments")]
    pub sphere_segments: u32,
    #[serde(default = "default_sphere_segments")]
    pub sphere_rings: u32,
    /// Cloud shell drift per tick, on top of the body's own spin.
    #[serde(default = "default_cloud_spin")]
    pub cloud_spin: f32,
    /// Cloud shell sits this far above the surface.
    #[serde(default = "default_cloud_offset")]
    pub cloud_offset: f32,
    #[serde(default = "default_star_radius")]
    pub star_radius: f32,
    /// Half width of the hover orbit ring.
    #[serde(default = "default_ring_half_width")]
    pub orbit_ring_half_width: f32,
    /// Fixed seed for the system generator. `None` re-rolls every session.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Bodies of the system, in orbit order.
    #[serde(default = "PlanetRecord::catalogue")]
    pub planets: Vec<PlanetRecord>,
    /// Planet texture pool.
    #[serde(default = "default_textures")]
    pub textures: Vec<TextureRecord>,
    /// Cloud overlay pool.
    #[serde(default = "default_clouds")]
    pub clouds: Vec<String>,
    /// Settings for the headless driver binary.
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Fixed-step run of the headless driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessConfig {
    pub frame_rate: f64,
    pub frames: u64,
    /// Advance to the next body every this many seconds (0 disables).
    pub cycle_seconds: f32,
    /// Log a frame summary every this many frames (0 disables).
    pub log_every: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            frames: 600,
            cycle_seconds: 3.0,
            log_every: 60,
        }
    }
}

fn default_scan_rate() -> f32 {
    0.1
}
fn default_scan_wrap() -> f32 {
    2.0
}
fn default_cap_angle() -> f32 {
    10.0
}
fn default_sphere_segments() -> u32 {
    32
}
fn default_cloud_spin() -> f32 {
    0.001
}
fn default_cloud_offset() -> f32 {
    0.03
}
fn default_star_radius() -> f32 {
    5.0
}
fn default_ring_half_width() -> f32 {
    0.2
}

fn default_textures() -> Vec<TextureRecord> {
    vec![
        TextureRecord::from_path("assets/planets/Arid/Arid_01-512x512.png", None),
        TextureRecord::from_path("assets/planets/Barren/Barren_02-512x512.png", None),
        TextureRecord::from_path("assets/planets/Gaseous/Gaseous_01-512x512.png", None),
        TextureRecord::from_path(
            "assets/planets/Ice/Ice_03-512x512.png",
            Some("assets/planets/Ice/Ice_03-512x512_normal.png".to_string()),
        ),
        TextureRecord::from_path("assets/planets/Lava/Lava_01-512x512.png", None),
    ]
}

fn default_clouds() -> Vec<String> {
    vec![
        "assets/clouds/Clouds_01-512x512.png".to_string(),
        "assets/clouds/Clouds_02-512x512.png".to_string(),
    ]
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitLayout::default(),
            spin_time_base: SpinTimeBase::default(),
            follow: FollowController::default(),
            free_look: FreeLook::default(),
            initial_camera: CameraRig::default(),
            scan_rate: default_scan_rate(),
            scan_wrap: default_scan_wrap(),
            cap_angle_degrees: default_cap_angle(),
            sphere_segments: default_sphere_segments(),
            sphere_rings: default_sphere_segments(),
            cloud_spin: default_cloud_spin(),
            cloud_offset: default_cloud_offset(),
            star_radius: default_star_radius(),
            orbit_ring_half_width: default_ring_half_width(),
            seed: None,
            planets: PlanetRecord::catalogue(),
            textures: default_textures(),
            clouds: default_clouds(),
            headless: HeadlessConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Load config from `orrery.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults like [`SceneConfig::load`].
    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match Self::from_ron(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    pub fn from_ron(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    /// Whether `orrery.ron` exists in the current directory.
    pub fn exists() -> bool {
        config_path().is_file()
    }

    /// Save current config to `orrery.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Could not write config to {:?}: {}", path, e);
        }
    }

    /// Write pretty RON to `path`.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, text)
    }

    /// Reject setup defects before any scene is built from this config.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.planets.is_empty() {
            return Err(SceneError::NoBodies);
        }
        let mut seen = HashSet::new();
        for planet in &self.planets {
            if !seen.insert(&planet.id) {
                return Err(SceneError::InvalidConfiguration(format!(
                    "duplicate planet id `{}`",
                    planet.id
                )));
            }
        }

        self.orbit.validate()?;

        let cap = self.cap_angle_degrees;
        if !cap.is_finite() || cap <= 0.0 || cap >= 90.0 {
            return Err(ProcgenError::InvalidCapAngle(cap).into());
        }
        if self.sphere_segments < 3 || self.sphere_rings < 2 {
            return Err(SceneError::InvalidConfiguration(
                "planet sphere needs at least 3 segments and 2 rings".to_string(),
            ));
        }
        if self.sphere_segments > MAX_SPHERE_DIVISIONS || self.sphere_rings > MAX_SPHERE_DIVISIONS {
            return Err(SceneError::InvalidConfiguration(format!(
                "planet sphere divisions are capped at {}",
                MAX_SPHERE_DIVISIONS
            )));
        }

        let smoothing = self.follow.smoothing;
        if !smoothing.is_finite() || smoothing <= 0.0 || smoothing > 1.0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "camera smoothing must lie in (0, 1], got {}",
                smoothing
            )));
        }
        if !self.scan_rate.is_finite() || self.scan_rate < 0.0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "scan rate must be non-negative, got {}",
                self.scan_rate
            )));
        }
        if !self.scan_wrap.is_finite() || self.scan_wrap <= 0.0 {
            return Err(SceneError::InvalidConfiguration(format!(
                "scan wrap must be positive, got {}",
                self.scan_wrap
            )));
        }
        if let Some(fps) = self.follow.reference_fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(invalid(format!("camera reference fps must be positive, got {}", fps)));
            }
        }
        if !self.follow.height_radii.is_finite() || !self.follow.distance_radii.is_finite() {
            return Err(invalid("camera follow offsets must be finite".to_string()));
        }
        if !self.free_look.is_valid() {
            return Err(invalid(format!(
                "free-look limits need 0 < min_distance <= max_distance and 0 < max_pitch < π/2, got {:?}",
                self.free_look
            )));
        }
        let camera = self.initial_camera;
        if !camera.eye.is_finite() || !camera.target.is_finite() {
            return Err(invalid("initial camera must be finite".to_string()));
        }
        if !self.cloud_offset.is_finite() || self.cloud_offset < 0.0 {
            return Err(invalid(format!("cloud offset must be non-negative, got {}", self.cloud_offset)));
        }
        if !self.cloud_spin.is_finite() {
            return Err(invalid(format!("cloud spin must be finite, got {}", self.cloud_spin)));
        }
        if !self.star_radius.is_finite() || self.star_radius <= 0.0 {
            return Err(invalid(format!("star radius must be positive, got {}", self.star_radius)));
        }
        let half = self.orbit_ring_half_width;
        if !half.is_finite() || half < 0.0 {
            return Err(invalid(format!("orbit ring half width must be non-negative, got {}", half)));
        }
        if !self.headless.frame_rate.is_finite() || self.headless.frame_rate <= 0.0 {
            return Err(invalid(format!(
                "headless frame rate must be positive, got {}",
                self.headless.frame_rate
            )));
        }
        if let SpinTimeBase::Scaled { reference_fps } = self.spin_time_base {
            if !reference_fps.is_finite() || reference_fps <= 0.0 {
                return Err(SceneError::InvalidConfiguration(format!(
                    "spin reference fps must be positive, got {}",
                    reference_fps
                )));
            }
        }
        Ok(())
    }
}

fn invalid(detail: String) -> SceneError {
    SceneError::InvalidConfiguration(detail)
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("orrery.ron")
}
