pub mod scene;

pub use scene::SceneState;

use std::path::PathBuf;

use crate::camera::OrbitCamera;
use crate::settings::AppSettings;

/// Combined editor state shared between the command loop and the frame
/// loop. Both loops see it only behind the `Editor` lock.
pub struct EditorState {
    pub scene: SceneState,
    pub camera: OrbitCamera,
    pub settings: AppSettings,
    /// Persistence target. `None` (headless harness) skips disk writes.
    pub save_path: Option<PathBuf>,
}

impl EditorState {
    pub fn new(settings: AppSettings, save_path: Option<PathBuf>) -> Self {
        Self {
            scene: SceneState::default(),
            camera: OrbitCamera::new(),
            settings,
            save_path,
        }
    }
}
