//! Asset boundary: where texture paths come from, and which of them the
//! renderer has finished loading.
//!
//! Loading itself happens outside the scene. The scene queues paths it needs,
//! the renderer fetches them in any order and reports back; until a path is
//! ready, bodies using it render with the fallback material.

use procgen::TextureRecord;
use std::collections::HashMap;

/// Source of the texture pools the scene draws from.
pub trait AssetProvider {
    fn planet_textures(&self) -> Vec<TextureRecord>;
    fn cloud_overlays(&self) -> Vec<String>;
}

/// Fixed lists, typically from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    pub textures: Vec<TextureRecord>,
    pub clouds: Vec<String>,
}

impl StaticAssets {
    pub fn new(textures: Vec<TextureRecord>, clouds: Vec<String>) -> Self {
        Self { textures, clouds }
    }
}

impl AssetProvider for StaticAssets {
    fn planet_textures(&self) -> Vec<TextureRecord> {
        self.textures.clone()
    }

    fn cloud_overlays(&self) -> Vec<String> {
        self.clouds.clone()
    }
}

/// Load progress of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Requested,
    Ready,
    Failed(String),
}

/// Per-path load tracking with an outbox of paths still to fetch.
#[derive(Debug, Default)]
pub struct AssetTracker {
    states: HashMap<String, LoadState>,
    outbox: Vec<String>,
}

impl AssetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `path` for loading unless it is already known.
    pub fn request(&mut self, path: &str) {
        if !self.states.contains_key(path) {
            self.states.insert(path.to_string(), LoadState::Requested);
            self.outbox.push(path.to_string());
        }
    }

    /// Paths requested since the last drain.
    pub fn drain_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }

    pub fn mark_ready(&mut self, path: &str) {
        self.states.insert(path.to_string(), LoadState::Ready);
    }

    pub fn mark_failed(&mut self, path: &str, reason: &str) {
        self.states.insert(path.to_string(), LoadState::Failed(reason.to_string()));
    }

    pub fn state(&self, path: &str) -> Option<&LoadState> {
        self.states.get(path)
    }

    pub fn is_ready(&self, path: &str) -> bool {
        matches!(self.states.get(path), Some(LoadState::Ready))
    }

    /// Forget failures so a later `request` fetches those paths again.
    pub fn forget_failures(&mut self) {
        self.states.retain(|_, state| !matches!(state, LoadState::Failed(_)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_queued_once() {
        let mut t = AssetTracker::new();
        t.request("a.png");
        t.request("a.png");
        t.request("b.png");
        assert_eq!(t.drain_requests(), vec!["a.png".to_string(), "b.png".to_string()]);
        assert!(t.drain_requests().is_empty());
        assert_eq!(t.state("a.png"), Some(&LoadState::Requested));
    }

    #[test]
    fn ready_and_failed_transitions() {
        let mut t = AssetTracker::new();
        t.request("a.png");
        t.mark_ready("a.png");
        assert!(t.is_ready("a.png"));
        t.mark_failed("b.png", "404");
        assert!(!t.is_ready("b.png"));
        assert_eq!(t.state("b.png"), Some(&LoadState::Failed("404".to_string())));
    }

    #[test]
    fn failures_can_be_retried_after_forgetting() {
        let mut t = AssetTracker::new();
        t.request("a.png");
        t.drain_requests();
        t.mark_failed("a.png", "timeout");
        t.request("a.png");
        assert!(t.drain_requests().is_empty());
        t.forget_failures();
        t.request("a.png");
        assert_eq!(t.drain_requests(), vec!["a.png".to_string()]);
    }

    #[test]
    fn static_assets_hand_out_their_lists() {
        let assets = StaticAssets::new(
            vec![TextureRecord::from_path("p/Arid/Arid_01.png", None)],
            vec!["c.png".to_string()],
        );
        assert_eq!(assets.planet_textures().len(), 1);
        assert_eq!(assets.cloud_overlays(), vec!["c.png".to_string()]);
    }
}
