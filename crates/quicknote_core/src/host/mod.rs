//! Host collaborator contracts.
//!
//! # Responsibility
//! - Define the seams the capture workflow uses to talk to its host:
//!   settings storage, the prompt/editor surface, installed extensions.
//!
//! # Invariants
//! - Settings are read fresh per invocation; implementations must not cache.
//! - A dismissed prompt is reported as `Declined`, never retried.

use crate::extension::manifest::HostExtensionManifest;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Outcome of a single-action host prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    /// The user picked the offered action.
    Accepted,
    /// The user declined or dismissed the prompt.
    Declined,
}

/// One row of the language quick-pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePick {
    /// Stable language identifier fed back into capture.
    pub id: String,
    /// Display label, the language name.
    pub label: String,
    /// Parenthetical description shown next to the label.
    pub description: String,
}

/// Failure reported by the host while opening a created note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenNoteError(String);

impl OpenNoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Display for OpenNoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for OpenNoteError {}

/// Live configuration for the capture workflow.
///
/// Implementations must read the backing store on every call; the user may
/// edit settings between invocations.
pub trait SettingsSource {
    /// Returns the configured notes directory, `None` when unset.
    fn notes_directory(&self) -> Option<String>;
}

/// Enumeration of currently installed host extensions.
pub trait InstalledExtensions {
    /// Returns declared manifests for every installed extension.
    fn installed_manifests(&self) -> Vec<HostExtensionManifest>;
}

/// Editor-facing surface the capture workflow reports through.
///
/// Every method blocks until the user (or the host) has answered; the
/// workflow suspends at each call and treats dismissal as decline.
pub trait EditorHost {
    /// Shows an informational prompt with one action button.
    fn prompt_info(&mut self, message: &str, action: &str) -> PromptAnswer;

    /// Shows an error prompt with one action button.
    fn prompt_error(&mut self, message: &str, action: &str) -> PromptAnswer;

    /// Shows an error with no recovery action.
    fn show_error(&mut self, message: &str);

    /// Opens the settings surface scoped to the notes configuration.
    fn open_settings(&mut self);

    /// Opens a created note and records its language identifier.
    fn open_note(&mut self, path: &Path, language_id: &str) -> Result<(), OpenNoteError>;

    /// Shows the language quick-pick; returns the chosen identifier, or
    /// `None` when the pick was cancelled.
    fn pick_language(&mut self, title: &str, picks: &[LanguagePick]) -> Option<String>;
}
