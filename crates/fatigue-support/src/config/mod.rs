mod settings;

pub use settings::{Settings, DEFAULT_LOOKBACK_DAYS};

use crate::error::{FatigueError, Result};
use std::path::{Path, PathBuf};

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = "fatigue-support";

/// Settings file name inside the configuration directory
const SETTINGS_FILENAME: &str = "settings.json";

/// Get the configuration directory path
/// Returns ~/.config/fatigue-support on Unix, ~/Library/Application Support/fatigue-support on macOS
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| FatigueError::config("Could not determine config directory"))
}

/// Get the default settings file path
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILENAME))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
