//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Camera step sizes for the orbit controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Azimuth step per orbit input, degrees
    pub orbit_step: f32,
    /// Elevation step per input, degrees
    pub elevation_step: f32,
    /// Radius step per zoom input
    pub zoom_step: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            orbit_step: 2.0,
            elevation_step: 2.0,
            zoom_step: 0.1,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Scene save file, relative to the working directory unless absolute
    pub save_file: PathBuf,
    #[serde(default)]
    pub camera: CameraSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("save.txt"),
            camera: CameraSettings::default(),
        }
    }
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sceneconsole", "scene-console")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if absent or unreadable
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(json) = std::fs::read_to_string(&path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(path, json);
            }
        }
    }
}
