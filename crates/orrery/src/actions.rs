//! UI actions and the per-tick queue they wait in.

use procgen::BodyId;
use std::collections::VecDeque;

/// Everything the UI layer can ask of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Next,
    Previous,
    /// Target body 0, re-lock the camera and regenerate the system.
    ResetView,
    ToggleScan,
    ToggleCameraLock,
    /// Regenerate orbits and textures; target and lock are kept.
    RandomizeSystem,
    PointerOver(BodyId),
    PointerOut,
}

/// Actions collected between ticks. Drained at the start of the next tick.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every pending action in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut q = ActionQueue::new();
        q.push(Action::Next);
        q.push(Action::PointerOver(BodyId::new("helscar")));
        q.push(Action::ToggleScan);
        assert_eq!(q.len(), 3);
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(
            drained,
            vec![
                Action::Next,
                Action::PointerOver(BodyId::new("helscar")),
                Action::ToggleScan
            ]
        );
        assert!(q.is_empty());
    }
}
