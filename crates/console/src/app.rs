//! Shared editor handle and the terminal command listener.
//!
//! Two loops share the editor: the command listener blocks on input and
//! applies one full parse/execute/record/persist cycle per line; the frame
//! loop (or an embedding renderer) pulls `RenderFrame`s. They communicate
//! only through the mutex-guarded state and the stop flag, so a frame sees
//! a mutation in its entirety or not at all.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::command::{self, CommandOutcome};
use crate::error::CommandError;
use crate::render::{self, RenderFrame};
use crate::settings::AppSettings;
use crate::state::EditorState;

const WELCOME: &str = r"
    *********************************************
    *                                           *
    *        WELCOME TO SCENE CONSOLE           *
    *                                           *
    *********************************************

    Create, modify, and manage 3D scenes with ease!

    Type 'help' to see the list of available commands.
    Type 'quit' to exit the program.
";

struct Inner {
    state: Mutex<EditorState>,
    stop: AtomicBool,
}

/// Cloneable handle to the shared editor
#[derive(Clone)]
pub struct Editor {
    inner: Arc<Inner>,
}

impl Editor {
    /// Create the editor: load the persisted scene (or keep the default on
    /// a first run), seed the history stack with that state, and write it
    /// back out.
    pub fn new(settings: AppSettings) -> Self {
        let save_path = Some(settings.save_file.clone());
        let mut state = EditorState::new(settings, save_path);

        if let Some(path) = state.save_path.clone() {
            match state.scene.load_from(&path) {
                Ok(true) => {
                    tracing::info!(
                        "loaded {} object(s) from {}",
                        state.scene.len(),
                        path.display()
                    );
                }
                Ok(false) => {
                    tracing::warn!("no save file at {}, starting empty", path.display());
                }
                Err(e) => {
                    tracing::error!("ignoring save file: {e}");
                }
            }
        }

        if let Some(path) = state.save_path.clone() {
            if let Err(e) = state.scene.save_to(&path) {
                tracing::warn!("initial save failed: {e}");
            }
        }

        Self::from_state(state)
    }

    /// Wrap an already-prepared state, seeding the history stack with it.
    /// Does not touch the disk; frontends and tests can pass a state with
    /// no save path for a fully in-memory editor.
    pub fn from_state(mut state: EditorState) -> Self {
        state.scene.record();
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                stop: AtomicBool::new(false),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EditorState> {
        // A panic while holding the lock poisons it; the state itself is
        // still consistent (every mutation is a single guarded call), so
        // recover rather than propagate the panic.
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run one command line against the shared state. Sets the stop flag
    /// when the command requests it.
    pub fn submit(&self, line: &str) -> Result<CommandOutcome, CommandError> {
        let outcome = command::run_line(&mut self.lock(), line)?;
        if outcome.quit {
            self.request_stop();
        }
        Ok(outcome)
    }

    /// Build a render-ready frame from the current state
    pub fn frame(&self) -> RenderFrame {
        render::frame_of(&self.lock())
    }

    // Camera controls, the seam for a windowing layer's key handling.

    pub fn orbit(&self, direction: f32) {
        let mut state = self.lock();
        let step = state.settings.camera.orbit_step;
        state.camera.orbit(direction * step);
    }

    pub fn elevate(&self, direction: f32) {
        let mut state = self.lock();
        let step = state.settings.camera.elevation_step;
        state.camera.elevate(direction * step);
    }

    pub fn zoom(&self, direction: f32) {
        let mut state = self.lock();
        let step = state.settings.camera.zoom_step;
        state.camera.zoom(direction * step);
    }

    pub fn request_stop(&self) {
        self.inner.stop.store(true, Ordering::SeqCst);
    }

    pub fn should_stop(&self) -> bool {
        self.inner.stop.load(Ordering::SeqCst)
    }

    /// One last persistence write, for shutdown
    pub fn final_save(&self) {
        let state = self.lock();
        if let Some(path) = &state.save_path {
            match state.scene.save_to(path) {
                Ok(()) => tracing::info!("scene saved to {}", path.display()),
                Err(e) => tracing::error!("final save failed: {e}"),
            }
        }
    }
}

/// Blocking command listener: prompt, read a line, run it, print the
/// result, until `quit`, EOF, or an external stop request. Errors are
/// reported and the user is re-prompted; none are fatal.
pub fn run_command_listener(
    editor: &Editor,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    writeln!(output, "{WELCOME}")?;

    let mut lines = input.lines();
    while !editor.should_stop() {
        write!(output, "\nEnter command: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // EOF on input behaves like quit.
            editor.request_stop();
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!(command = line.trim(), "dispatching");
        match editor.submit(&line) {
            Ok(outcome) => {
                if let Some(message) = outcome.message {
                    writeln!(output, "{message}")?;
                }
                if outcome.quit {
                    break;
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }
    Ok(())
}
