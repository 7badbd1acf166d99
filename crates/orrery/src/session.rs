//! Session state: which body is targeted, hovered and scanned, and whether the
//! camera is locked to the target.

use crate::error::SceneError;
use procgen::BodyId;

/// UI-visible session flags. Created with defaults at session start, mutated
/// only by user actions, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Always a valid index into the body list.
    pub target_index: usize,
    /// At most one hovered body; the latest pointer-over wins.
    pub hovered: Option<BodyId>,
    pub is_scanning: bool,
    pub is_camera_locked: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            target_index: 0,
            hovered: None,
            is_scanning: false,
            is_camera_locked: true,
        }
    }
}

/// Transition rules over [`SessionState`] for a fixed body count.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    body_count: usize,
}

impl Session {
    pub fn new(body_count: usize) -> Result<Self, SceneError> {
        if body_count == 0 {
            return Err(SceneError::NoBodies);
        }
        Ok(Self {
            state: SessionState::default(),
            body_count,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn body_count(&self) -> usize {
        self.body_count
    }

    pub fn target_index(&self) -> usize {
        self.state.target_index
    }

    pub fn next(&mut self) {
        self.state.target_index = (self.state.target_index + 1) % self.body_count;
    }

    pub fn previous(&mut self) {
        self.state.target_index = (self.state.target_index + self.body_count - 1) % self.body_count;
    }

    pub fn pointer_over(&mut self, body: BodyId) {
        self.state.hovered = Some(body);
    }

    pub fn pointer_out(&mut self) {
        self.state.hovered = None;
    }

    pub fn toggle_scan(&mut self) {
        self.state.is_scanning = !self.state.is_scanning;
    }

    pub fn toggle_camera_lock(&mut self) {
        self.state.is_camera_locked = !self.state.is_camera_locked;
    }

    /// Target the first body and re-lock the camera. Hover and scan are kept.
    pub fn reset_target(&mut self) {
        self.state.target_index = 0;
        self.state.is_camera_locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn defaults() {
        let s = Session::new(3).unwrap();
        assert_eq!(*s.state(), SessionState::default());
        assert!(s.state().is_camera_locked);
        assert!(!s.state().is_scanning);
        assert_eq!(s.state().hovered, None);
    }

    #[test]
    fn zero_bodies_is_rejected() {
        assert!(matches!(Session::new(0), Err(SceneError::NoBodies)));
    }

    #[test]
    fn next_wraps_back_to_start() {
        let mut s = Session::new(5).unwrap();
        for _ in 0..5 {
            s.next();
        }
        assert_eq!(s.target_index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut s = Session::new(5).unwrap();
        s.previous();
        assert_eq!(s.target_index(), 4);
        s.next();
        assert_eq!(s.target_index(), 0);
    }

    #[test]
    fn target_index_never_leaves_range() {
        let mut rng = StdRng::seed_from_u64(77);
        for count in 1..8 {
            let mut s = Session::new(count).unwrap();
            for _ in 0..2_000 {
                if rng.gen_bool(0.5) {
                    s.next();
                } else {
                    s.previous();
                }
                assert!(s.target_index() < count);
            }
        }
    }

    #[test]
    fn last_pointer_over_wins() {
        let mut s = Session::new(3).unwrap();
        s.pointer_over(BodyId::new("a"));
        s.pointer_over(BodyId::new("b"));
        assert_eq!(s.state().hovered, Some(BodyId::new("b")));
        s.pointer_out();
        assert_eq!(s.state().hovered, None);
    }

    #[test]
    fn camera_lock_toggle_leaves_target_and_hover() {
        let mut s = Session::new(3).unwrap();
        s.next();
        s.pointer_over(BodyId::new("x"));
        s.toggle_camera_lock();
        assert!(!s.state().is_camera_locked);
        assert_eq!(s.target_index(), 1);
        assert_eq!(s.state().hovered, Some(BodyId::new("x")));
    }

    #[test]
    fn reset_target_relocks() {
        let mut s = Session::new(4).unwrap();
        s.next();
        s.next();
        s.toggle_camera_lock();
        s.toggle_scan();
        s.reset_target();
        assert_eq!(s.target_index(), 0);
        assert!(s.state().is_camera_locked);
        assert!(s.state().is_scanning);
    }
}
