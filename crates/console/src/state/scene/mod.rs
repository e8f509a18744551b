//! Scene state management
//!
//! Scene contents plus the snapshot-stack undo history. Mutations live in
//! `object_ops`, the history protocol in `history`, disk persistence in
//! `persistence`.

mod history;
mod object_ops;
mod persistence;

use shared::{Scene, SceneObject};

use crate::error::SceneError;

/// Scene state with snapshot history
#[derive(Default)]
pub struct SceneState {
    /// Current scene
    pub scene: Scene,
    /// Undo stack — serialized snapshots, oldest first. Consecutive entries
    /// are never textually identical, and the bottom entry (the state seeded
    /// at startup) is never popped.
    pub(crate) undo_stack: Vec<String>,
    /// Monotonically increasing version counter for frame-change detection
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.scene.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.objects.is_empty()
    }

    /// Get an object by index
    pub fn object(&self, index: usize) -> Result<&SceneObject, SceneError> {
        self.scene
            .objects
            .get(index)
            .ok_or(SceneError::IndexOutOfRange {
                index,
                len: self.scene.objects.len(),
            })
    }

    /// Get a mutable object by index
    pub(crate) fn object_mut(&mut self, index: usize) -> Result<&mut SceneObject, SceneError> {
        let len = self.scene.objects.len();
        self.scene
            .objects
            .get_mut(index)
            .ok_or(SceneError::IndexOutOfRange { index, len })
    }
}
