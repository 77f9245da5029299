//! Settings store for the terminal host.
//!
//! # Responsibility
//! - Locate the user's home and configuration directories.
//! - Read the configured notes directory fresh on every capture.
//!
//! # Invariants
//! - Nothing here caches; live edits to the settings file are visible to
//!   the next invocation.

use quicknote_core::SettingsSource;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name inside the configuration directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";
/// Environment override for the configured notes directory.
pub const NOTES_DIR_ENV: &str = "QUICKNOTE_NOTES_DIR";

const NOTES_DIRECTORY_KEY: &str = "notesDirectory";

/// Returns the user's home directory from `HOME`, then `USERPROFILE`.
pub fn home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(PathBuf::from(value));
            }
        }
    }
    None
}

/// Default configuration directory under the user's home.
pub fn default_config_dir(home_dir: &Path) -> PathBuf {
    home_dir.join(".config").join("quicknote")
}

/// JSON-file settings, re-read per capture invocation.
///
/// The environment override takes precedence over the file; a missing or
/// malformed file simply means "not configured".
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsSource for FileSettings {
    fn notes_directory(&self) -> Option<String> {
        if let Ok(value) = env::var(NOTES_DIR_ENV) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        let raw = fs::read_to_string(&self.path).ok()?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value
            .get(NOTES_DIRECTORY_KEY)?
            .as_str()
            .map(str::to_string)
    }
}
