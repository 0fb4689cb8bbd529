use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::app_state::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FreightConsole";
const APP_NAME: &str = "FreightConsole";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

pub fn load_preferences() -> Option<Preferences> {
    load_preferences_from(&data_file()?)
}

pub fn save_preferences(prefs: &Preferences) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_preferences_to(&path, prefs)
}

/// Unreadable or corrupt files count as "no preferences yet".
pub fn load_preferences_from(path: &Path) -> Option<Preferences> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(prefs) => {
            debug!(path = %path.display(), "loaded preferences");
            Some(prefs)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring corrupt preferences file");
            None
        }
    }
}

pub fn save_preferences_to(path: &Path, prefs: &Preferences) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved preferences");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
