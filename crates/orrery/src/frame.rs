//! Per-tick output handed to the renderer.

use camera::CameraRig;
use engine_core::Transform;
use procgen::BodyId;

/// Surface material of a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Colour map not loaded (yet, or at all): draw untextured wireframe.
    Fallback,
    Standard {
        color_map: String,
        /// Present only once the normal map has loaded too.
        normal_map: Option<String>,
    },
    /// Scan sweep over the colour map; only ever on the targeted body.
    Scan { color_map: String, progress: f32 },
}

/// Translucent cloud shell around a body.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayer {
    pub transform: Transform,
    /// Loaded overlay, or `None` for the fallback wireframe.
    pub overlay: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub index: usize,
    pub id: BodyId,
    /// Scale carries the body radius; the planet mesh is unit-sized.
    pub transform: Transform,
    pub material: Material,
    /// Hidden while the body is being scanned.
    pub cloud: Option<CloudLayer>,
    /// Hovered body gets an outline.
    pub highlighted: bool,
}

/// Flat ring on the XZ plane marking the hovered body's orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRing {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Central star at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarFrame {
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub frame_index: u64,
    pub elapsed: f32,
    pub bodies: Vec<BodyFrame>,
    pub star: StarFrame,
    pub camera: CameraRig,
    pub orbit_ring: Option<OrbitRing>,
}

impl Frame {
    pub fn body(&self, index: usize) -> Option<&BodyFrame> {
        self.bodies.get(index)
    }
}

/// Renderer side of the tick: receives each finished frame.
pub trait FrameSink {
    fn submit(&mut self, frame: &Frame);
}
