//! Texture assignment: which colour/normal map each body wears, plus the one
//! cloud overlay shared by the whole system.
//!
//! Paths are opaque strings handed over by the asset provider; nothing here
//! touches image data.

use crate::error::ProcgenError;
use crate::planet::BodyId;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// One entry of the planet texture pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRecord {
    pub name: String,
    pub color_map: String,
    #[serde(default)]
    pub normal_map: Option<String>,
}

impl TextureRecord {
    /// Build a record whose display name is derived from the colour map path.
    pub fn from_path(color_map: impl Into<String>, normal_map: Option<String>) -> Self {
        let color_map = color_map.into();
        Self {
            name: display_name_from_path(&color_map),
            color_map,
            normal_map,
        }
    }
}

/// Readable name for an asset path: `planets/Arid/Arid_01-512x512.png` becomes `Arid 01`.
pub fn display_name_from_path(path: &str) -> String {
    let p = Path::new(path);
    let stem = p
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path);
    let folder = p
        .parent()
        .and_then(|d| d.file_name())
        .and_then(|s| s.to_str());

    let variant = stem.split('_').nth(1).unwrap_or(stem);
    let variant = strip_resolution_suffix(variant);

    match folder {
        Some(folder) if !folder.is_empty() => format!("{} {}", folder, variant),
        _ => variant.to_string(),
    }
}

/// Drop a trailing `-<w>x<h>` resolution tag.
fn strip_resolution_suffix(name: &str) -> &str {
    if let Some((head, tail)) = name.rsplit_once('-') {
        if let Some((w, h)) = tail.split_once('x') {
            let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
            if digits(w) && digits(h) {
                return head;
            }
        }
    }
    name
}

/// Maps assigned to one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSlot {
    pub color_map: String,
    pub normal_map: Option<String>,
}

impl From<&TextureRecord> for TextureSlot {
    fn from(record: &TextureRecord) -> Self {
        Self {
            color_map: record.color_map.clone(),
            normal_map: record.normal_map.clone(),
        }
    }
}

static NEXT_ASSIGNMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Body → texture mapping for one system generation.
#[derive(Debug, Clone)]
pub struct TextureAssignment {
    id: u64,
    slots: HashMap<BodyId, TextureSlot>,
    cloud_overlay: Option<String>,
}

impl TextureAssignment {
    /// Distinct per produced assignment; a regeneration always yields a new id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Slot for `body`, or `None` when the pool was empty or the body is unknown.
    pub fn get(&self, body: &BodyId) -> Option<&TextureSlot> {
        self.slots.get(body)
    }

    pub fn cloud_overlay(&self) -> Option<&str> {
        self.cloud_overlay.as_deref()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every path this assignment references (colour, normal and cloud maps).
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.slots
            .values()
            .flat_map(|slot| std::iter::once(slot.color_map.as_str()).chain(slot.normal_map.as_deref()))
            .chain(self.cloud_overlay.as_deref())
    }
}

/// Fail early on pools [`assign`] would otherwise silently leave empty.
pub fn validate_pools(texture_pool: &[TextureRecord], cloud_pool: &[String]) -> Result<(), ProcgenError> {
    if texture_pool.is_empty() {
        return Err(ProcgenError::EmptyTexturePool);
    }
    if cloud_pool.is_empty() {
        return Err(ProcgenError::EmptyCloudPool);
    }
    Ok(())
}

/// Draw one texture per body (with replacement) and one cloud overlay for all.
///
/// Empty pools produce an assignment without the corresponding entries; those
/// bodies render with the fallback material instead of blocking the scene.
pub fn assign<R: Rng + ?Sized>(
    rng: &mut R,
    bodies: &[BodyId],
    texture_pool: &[TextureRecord],
    cloud_pool: &[String],
) -> TextureAssignment {
    let mut slots = HashMap::with_capacity(bodies.len());
    if texture_pool.is_empty() {
        log::warn!("Planet texture pool is empty; {} bodies keep the fallback material", bodies.len());
    } else {
        for body in bodies {
            if let Some(record) = texture_pool.choose(rng) {
                slots.insert(body.clone(), TextureSlot::from(record));
            }
        }
    }

    let cloud_overlay = cloud_pool.choose(rng).cloned();
    if cloud_overlay.is_none() {
        log::warn!("Cloud overlay pool is empty; cloud layers keep the fallback material");
    }

    TextureAssignment {
        id: NEXT_ASSIGNMENT_ID.fetch_add(1, Ordering::Relaxed),
        slots,
        cloud_overlay,
    }
}
