//! Configured notes-root validation.
//!
//! # Responsibility
//! - Normalize the user-supplied notes-directory string.
//! - Report one precise failure kind per rejected configuration.
//!
//! # Invariants
//! - Existence is checked before directory-type, so a missing path is always
//!   `NotFound`, never `IsFile`.
//! - No side effects; callers decide whether to create anything.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Closed failure set for notes-root resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesRootError {
    /// No directory configured at all (unset or empty string).
    NoPath,
    /// Configured value does not expand to an absolute path.
    NotAbsolute(String),
    /// Configured path exists but is not a directory.
    IsFile(PathBuf),
    /// Configured path does not exist; carries the absolute directory a
    /// caller may offer to create.
    NotFound(PathBuf),
}

impl Display for NotesRootError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPath => write!(f, "no notes directory is configured"),
            Self::NotAbsolute(value) => {
                write!(f, "notes directory `{value}` is not an absolute path")
            }
            Self::IsFile(path) => {
                write!(f, "notes directory `{}` is not a directory", path.display())
            }
            Self::NotFound(path) => {
                write!(f, "notes directory `{}` does not exist", path.display())
            }
        }
    }
}

impl Error for NotesRootError {}

/// Resolves the configured notes root into an absolute existing directory.
///
/// A leading `~` is replaced by `home_dir` before any other check runs, so
/// `~/notes` and `<home>/notes` resolve identically. The configuration is
/// expected to be re-read by the caller on every invocation; nothing here
/// caches file-system state.
pub fn resolve_notes_root(
    raw_config: Option<&str>,
    home_dir: &Path,
) -> Result<PathBuf, NotesRootError> {
    let raw = match raw_config {
        Some(value) if !value.is_empty() => value,
        _ => return Err(NotesRootError::NoPath),
    };

    let expanded = expand_home(raw, home_dir);
    if !expanded.is_absolute() {
        return Err(NotesRootError::NotAbsolute(raw.to_string()));
    }

    match fs::metadata(&expanded) {
        Err(_) => Err(NotesRootError::NotFound(expanded)),
        Ok(meta) if !meta.is_dir() => Err(NotesRootError::IsFile(expanded)),
        Ok(_) => Ok(expanded),
    }
}

fn expand_home(raw: &str, home_dir: &Path) -> PathBuf {
    match raw.strip_prefix('~') {
        Some(rest) => home_dir.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}
