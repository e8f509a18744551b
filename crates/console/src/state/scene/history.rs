//! Snapshot-stack undo
//!
//! The stack holds the canonical serialized form of every distinct state,
//! oldest first. Two states that serialize identically are the same state,
//! so a no-op command never grows the stack. The bottom entry is the state
//! seeded at startup and is the undo floor: undoing past it fails and
//! leaves both the stack and the scene untouched.

use crate::codec;
use crate::error::HistoryError;

use super::SceneState;

impl SceneState {
    /// Serialize the current scene and push it if it differs from the top.
    pub fn record(&mut self) {
        let snapshot = codec::serialize(&self.scene);
        self.push_if_changed(snapshot);
    }

    /// Push a snapshot unless it is textually identical to the top entry.
    pub fn push_if_changed(&mut self, snapshot: String) {
        if self.undo_stack.last() != Some(&snapshot) {
            self.undo_stack.push(snapshot);
        }
    }

    /// Revert to the previous distinct snapshot, replacing the scene
    /// wholesale. With only the seeded state left there is nothing to
    /// revert to: the call fails and mutates nothing.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let depth = self.undo_stack.len();
        if depth <= 1 {
            return Err(HistoryError::UndoStackEmpty);
        }
        let scene = codec::deserialize(&self.undo_stack[depth - 2])?;
        self.undo_stack.pop();
        self.scene = scene;
        self.version += 1;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Number of snapshots on the stack
    pub fn history_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deduplicates_consecutive_states() {
        let mut state = SceneState::default();
        state.record();
        state.record();
        assert_eq!(state.history_depth(), 1);

        state.add("cube", [0.0, 0.0, 0.0]).unwrap();
        state.record();
        state.record();
        assert_eq!(state.history_depth(), 2);
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut state = SceneState::default();
        state.record();
        state.add("cube", [1.0, 2.0, 3.0]).unwrap();
        state.record();
        state.rotate(0, 45.0).unwrap();
        state.record();

        state.undo().unwrap();
        assert_eq!(state.object(0).unwrap().angle, 0.0);
        state.undo().unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn undo_floor_is_atomic() {
        let mut state = SceneState::default();
        state.add("sphere", [0.0, 1.0, 0.0]).unwrap();
        state.record();

        assert!(!state.can_undo());
        let v = state.version();
        assert_eq!(state.undo().unwrap_err(), HistoryError::UndoStackEmpty);
        // The seeded state is still applied and still on the stack.
        assert_eq!(state.len(), 1);
        assert_eq!(state.history_depth(), 1);
        assert_eq!(state.version(), v);
    }

    #[test]
    fn undo_on_never_recorded_state_fails() {
        let mut state = SceneState::default();
        assert_eq!(state.undo().unwrap_err(), HistoryError::UndoStackEmpty);
    }
}
