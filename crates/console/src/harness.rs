//! Headless test harness for driving the editor without a terminal or a
//! renderer.
//!
//! Wraps an `EditorState` with no save path, so nothing touches the disk
//! unless a test points it at a file explicitly.

use std::path::PathBuf;

use shared::SceneObject;

use crate::command::{self, CommandOutcome};
use crate::error::CommandError;
use crate::render::{self, RenderFrame};
use crate::settings::AppSettings;
use crate::state::EditorState;

pub struct EditorHarness {
    pub state: EditorState,
}

impl EditorHarness {
    /// New in-memory harness with the history seeded, mirroring startup.
    pub fn new() -> Self {
        let mut state = EditorState::new(AppSettings::default(), None);
        state.scene.record();
        Self { state }
    }

    /// Harness persisting to `path`, for persistence tests.
    pub fn with_save_path(path: PathBuf) -> Self {
        let mut harness = Self::new();
        harness.state.save_path = Some(path);
        harness
    }

    /// Run one command line through the full cycle.
    pub fn run(&mut self, line: &str) -> Result<CommandOutcome, CommandError> {
        command::run_line(&mut self.state, line)
    }

    /// Run several command lines, stopping at the first failure.
    pub fn run_all(&mut self, lines: &[&str]) -> Result<(), CommandError> {
        for line in lines {
            self.run(line)?;
        }
        Ok(())
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.state.scene.len()
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.state.scene.scene.objects.get(index)
    }

    pub fn background(&self) -> &str {
        &self.state.scene.scene.background
    }

    pub fn history_depth(&self) -> usize {
        self.state.scene.history_depth()
    }

    pub fn frame(&self) -> RenderFrame {
        render::frame_of(&self.state)
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
