//! Save/load functionality
//!
//! The save file is the codec's textual form, overwritten wholesale on
//! every accepted command and at shutdown. The write is not atomic: a
//! crash mid-write can leave a truncated file. Accepted limitation.

use std::path::Path;

use crate::codec;
use crate::error::PersistenceError;

use super::SceneState;

impl SceneState {
    /// Write the current scene to `path`, replacing any previous contents.
    pub fn save_to(&self, path: &Path) -> Result<(), PersistenceError> {
        std::fs::write(path, codec::serialize(&self.scene)).map_err(|source| {
            PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Replace the scene from a save file. Returns `Ok(false)` when the
    /// file does not exist (first run — the caller keeps the default
    /// scene). A file that exists but does not parse is an error and
    /// leaves the in-memory scene untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<bool, PersistenceError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let scene = codec::deserialize(&text).map_err(|source| PersistenceError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
        self.scene = scene;
        self.version += 1;
        Ok(true)
    }
}
