use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config;

/// Persisted window state, stored at `~/.config/adw-bluetooth/settings.json`.
///
/// The `#[serde(default)]` on the struct ensures that any fields missing from
/// an existing settings file are filled in with their `Default` values, making
/// it safe to add new fields without breaking old config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    pub maximized: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_width: config::DEFAULT_WIDTH,
            window_height: config::DEFAULT_HEIGHT,
            maximized: false,
        }
    }
}

fn settings_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    let app_dir = config_dir.join("adw-bluetooth");
    let _ = std::fs::create_dir_all(&app_dir);
    app_dir.join("settings.json")
}

/// Load persisted settings, falling back to defaults if the file is missing
/// or unreadable. Never fails.
pub fn load() -> Settings {
    load_from(&settings_path())
}

/// Persist settings. Best-effort: a failure is logged, not surfaced.
pub fn save(settings: &Settings) {
    save_to(&settings_path(), settings);
}

fn load_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

fn save_to(path: &Path, settings: &Settings) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::warn!("Failed to write settings to {}: {}", path.display(), e);
            }
        }
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }
}
