//! UV-sphere meshes for planet bodies and the pole-flattening deformer.
//!
//! Meshes are built once at unit scale and scaled per body through the scene
//! node transform, so the deformer runs at setup time only.

use crate::error::ProcgenError;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Upper bound on segments and rings; keeps vertex and index counts within `u32`.
pub const MAX_SPHERE_DIVISIONS: u32 = 4096;

/// CPU-side sphere mesh (positions, normals, UVs, triangle list).
#[derive(Debug, Clone, Default)]
pub struct SphereMesh {
    pub radius: f32,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Create a UV sphere. `segments` runs around the Y axis, `rings` from the
    /// north pole (`+Y`) to the south pole. Triangles wind counter-clockwise
    /// seen from outside. Divisions are clamped to `[3, MAX_SPHERE_DIVISIONS]`
    /// segments and `[2, MAX_SPHERE_DIVISIONS]` rings.
    pub fn uv(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.clamp(3, MAX_SPHERE_DIVISIONS);
        let rings = rings.clamp(2, MAX_SPHERE_DIVISIONS);
        let vertex_count = ((segments + 1) * (rings + 1)) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

        for ring in 0..=rings {
            // Pole rows sit exactly on the axis; sin(PI) is not quite zero.
            let (y, ring_radius) = if ring == 0 {
                (radius, 0.0)
            } else if ring == rings {
                (-radius, 0.0)
            } else {
                let phi = PI * ring as f32 / rings as f32;
                (radius * phi.cos(), radius * phi.sin())
            };

            for segment in 0..=segments {
                let theta = 2.0 * PI * segment as f32 / segments as f32;
                let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());

                positions.push(position);
                normals.push(position.normalize_or_zero());
                uvs.push(Vec2::new(
                    segment as f32 / segments as f32,
                    ring as f32 / rings as f32,
                ));
            }
        }

        for ring in 0..rings {
            for segment in 0..segments {
                let current = ring * (segments + 1) + segment;
                let next = current + segments + 1;

                indices.extend_from_slice(&[current, current + 1, next]);
                indices.extend_from_slice(&[current + 1, next + 1, next]);
            }
        }

        Self {
            radius,
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Create a UV sphere with flattened pole caps and recomputed normals.
    pub fn flattened(
        radius: f32,
        segments: u32,
        rings: u32,
        cap_angle_degrees: f32,
    ) -> Result<Self, ProcgenError> {
        let mut mesh = Self::uv(radius, segments, rings);
        mesh.flatten_poles(cap_angle_degrees)?;
        Ok(mesh)
    }

    /// Flatten both pole caps in place, then rebuild normals from the new positions.
    pub fn flatten_poles(&mut self, cap_angle_degrees: f32) -> Result<(), ProcgenError> {
        self.positions = flatten_poles(&self.positions, self.radius, cap_angle_degrees)?;
        self.normals = compute_vertex_normals(&self.positions, &self.indices);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Map every vertex whose polar angle lies inside a cap onto that cap's plane.
///
/// A vertex at polar angle `phi < cap` (north) or `phi > π - cap` (south) gets
/// `y = ±radius·cos(cap)` and is pushed out to `radius·sin(cap)` from the polar
/// axis, keeping its azimuth. Vertices exactly on the boundary stay on the
/// sphere. Vertices on the axis itself have no azimuth and land on the cap
/// centre. The vertex count never changes.
pub fn flatten_poles(
    vertices: &[Vec3],
    radius: f32,
    cap_angle_degrees: f32,
) -> Result<Vec<Vec3>, ProcgenError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ProcgenError::InvalidRadius(radius));
    }
    if !cap_angle_degrees.is_finite() || cap_angle_degrees <= 0.0 || cap_angle_degrees >= 90.0 {
        return Err(ProcgenError::InvalidCapAngle(cap_angle_degrees));
    }

    let cap = cap_angle_degrees.to_radians();
    let plane_height = radius * cap.cos();
    let rim = radius * cap.sin();

    let flatten = |v: Vec3, side: f32| {
        let horizontal = Vec2::new(v.x, v.z);
        let len = horizontal.length();
        if len > f32::EPSILON * radius {
            let scaled = horizontal * (rim / len);
            Vec3::new(scaled.x, side * plane_height, scaled.y)
        } else {
            Vec3::new(0.0, side * plane_height, 0.0)
        }
    };

    Ok(vertices
        .iter()
        .map(|&v| {
            // Clamp guards acos against vertices a hair outside the sphere.
            let phi = (v.y / radius).clamp(-1.0, 1.0).acos();
            if phi < cap {
                flatten(v, 1.0)
            } else if phi > PI - cap {
                flatten(v, -1.0)
            } else {
                v
            }
        })
        .collect())
}

const DEGENERATE_AREA: f32 = 1e-6;

/// Area-weighted vertex normals from an indexed triangle list.
///
/// Vertices no triangle touches (or only degenerate ones, down to an area
/// threshold relative to the vertex's distance from the origin squared) fall
/// back to their radial direction.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut accum = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    accum
        .iter()
        .zip(positions)
        .map(|(n, p)| {
            if n.length() <= DEGENERATE_AREA * p.length_squared() {
                p.normalize_or_zero()
            } else {
                n.normalize_or_zero()
            }
        })
        .collect()
}
