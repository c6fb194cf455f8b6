//! ConfigStore - Local Preference Storage

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("io", "lolmeta", "lolmeta-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine platform data directory".to_string(),
    })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON preference file, falling back to defaults when absent
pub fn load_prefs<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let prefs: T = serde_json::from_str(&content)?;
    Ok(prefs)
}

/// Save a JSON preference file
pub fn save_prefs<T: Serialize>(filename: &str, prefs: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(prefs)?;
    fs::write(&path, content)?;
    Ok(())
}
