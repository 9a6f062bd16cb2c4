use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::SearchSettings;

/// Directory name under the platform config directory
const APP_DIR_NAME: &str = "imas-clip-manager";

/// Settings file name inside [`get_config_dir`]
pub const SETTINGS_FILE_NAME: &str = "search-settings.json";

/// Get the application config directory (e.g. `~/.config/imas-clip-manager`)
pub fn get_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Default settings file location; the file may not exist
pub fn default_settings_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load search settings from a JSON file
///
/// Missing toggles default to enabled, so `{}` searches every field.
pub fn load_settings(path: &Path) -> Result<SearchSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    debug!(path = %path.display(), ?settings, "loaded search settings");
    Ok(settings)
}

/// Resolve the settings to search with
///
/// An explicit path must exist. Without one, the default location is used
/// when present; otherwise `None`, which searches every field.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Option<SearchSettings>> {
    if let Some(path) = explicit {
        return load_settings(path).map(Some);
    }

    match default_settings_path() {
        Ok(path) if path.is_file() => load_settings(&path).map(Some),
        Ok(_) => Ok(None),
        Err(e) => {
            debug!("no default settings location: {:#}", e);
            Ok(None)
        }
    }
}
