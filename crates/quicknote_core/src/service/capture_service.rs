//! Note capture workflow.
//!
//! # Responsibility
//! - Orchestrate root resolution, directory layout, and note file creation.
//! - Surface every failure through the host at its point of occurrence.
//!
//! # Invariants
//! - The notes-directory setting is re-read and re-validated per capture.
//! - Root creation and note-file creation failures abort; day-bucket
//!   creation failures warn and continue.
//! - An existing file at the planned path fails the capture; it is never
//!   overwritten.

use crate::extension::languages::{
    collect_languages, PLAINTEXT_FILE_EXTENSION, PLAINTEXT_LANGUAGE_ID,
};
use crate::host::{EditorHost, InstalledExtensions, LanguagePick, PromptAnswer, SettingsSource};
use crate::path::plan::{day_directory, note_file_name};
use crate::path::resolve::{resolve_notes_root, NotesRootError};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const CREATE_DIRECTORY_ACTION: &str = "Create Directory";
const CONFIGURE_ACTION: &str = "Configure";
const LANGUAGE_PICK_TITLE: &str = "New Note with Language";

/// Result of one capture invocation.
///
/// Every failure has already been reported through the host by the time
/// this value is returned; callers only branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The note file exists on disk at the carried path.
    Created(PathBuf),
    /// The invocation stopped before a note file existed.
    Aborted,
}

/// Note capture workflow over injected host collaborators.
pub struct CaptureService<S: SettingsSource, E: InstalledExtensions, H: EditorHost> {
    settings: S,
    extensions: E,
    host: H,
    home_dir: PathBuf,
}

impl<S: SettingsSource, E: InstalledExtensions, H: EditorHost> CaptureService<S, E, H> {
    /// Creates a workflow using the provided host collaborators.
    ///
    /// `home_dir` backs tilde expansion of the configured notes directory.
    pub fn new(settings: S, extensions: E, host: H, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            extensions,
            host,
            home_dir: home_dir.into(),
        }
    }

    /// Captures a plain-text note at the current instant.
    pub fn new_note(&mut self) -> CaptureOutcome {
        self.new_note_at(Utc::now())
    }

    /// Plain-text capture with an explicit instant.
    pub fn new_note_at(&mut self, at: DateTime<Utc>) -> CaptureOutcome {
        self.create_note_at(PLAINTEXT_LANGUAGE_ID, PLAINTEXT_FILE_EXTENSION, at)
    }

    /// Captures a note typed by a language picked from the live catalog.
    pub fn new_note_with_language(&mut self) -> CaptureOutcome {
        self.new_note_with_language_at(Utc::now())
    }

    /// Language-picked capture with an explicit instant.
    ///
    /// The catalog is rebuilt from installed extensions on every call so the
    /// pick reflects contributions enabled since the last invocation.
    pub fn new_note_with_language_at(&mut self, at: DateTime<Utc>) -> CaptureOutcome {
        let catalog = collect_languages(&self.extensions.installed_manifests());
        let picks: Vec<LanguagePick> = catalog
            .iter()
            .map(|(id, entry)| LanguagePick {
                id: id.clone(),
                label: entry.name.clone(),
                description: format!("({id})"),
            })
            .collect();

        let Some(language_id) = self.host.pick_language(LANGUAGE_PICK_TITLE, &picks) else {
            info!("event=language_pick module=service status=cancelled");
            return CaptureOutcome::Aborted;
        };
        let Some(entry) = catalog.get(language_id.as_str()) else {
            // Host contract violation: the pick must come from the offered rows.
            error!(
                "event=language_pick module=service status=error unknown_id={}",
                language_id
            );
            return CaptureOutcome::Aborted;
        };

        let extension = entry.extension.clone();
        self.create_note_at(&language_id, &extension, at)
    }

    /// Captures one note for `language_id` with `file_extension` now.
    pub fn create_note(&mut self, language_id: &str, file_extension: &str) -> CaptureOutcome {
        self.create_note_at(language_id, file_extension, Utc::now())
    }

    /// Captures one note at the explicit instant `at`.
    ///
    /// The instant is a parameter so same-second collision behavior is
    /// exercisable deterministically; interactive callers pass `Utc::now()`.
    pub fn create_note_at(
        &mut self,
        language_id: &str,
        file_extension: &str,
        at: DateTime<Utc>,
    ) -> CaptureOutcome {
        let raw_config = self.settings.notes_directory();
        let root = match resolve_notes_root(raw_config.as_deref(), &self.home_dir) {
            Ok(root) => root,
            Err(NotesRootError::NotFound(dir)) => {
                match self.offer_root_creation(raw_config.as_deref().unwrap_or_default(), &dir) {
                    Some(root) => root,
                    None => return CaptureOutcome::Aborted,
                }
            }
            Err(err) => {
                self.report_config_error(raw_config.as_deref().unwrap_or_default(), &err);
                return CaptureOutcome::Aborted;
            }
        };

        let day_dir = day_directory(&root, at);
        if let Err(io_err) = fs::create_dir_all(&day_dir) {
            // Best effort: file creation below fails on its own if the
            // directory is truly absent.
            warn!(
                "event=day_bucket module=service status=error path={} error={}",
                day_dir.display(),
                io_err
            );
            self.host.show_error(&format!(
                "Could not create notes directory \"{}\". Please check if the root notes directory is writable.",
                day_dir.display()
            ));
        }

        let note_path = note_file_name(&day_dir, file_extension, at);
        if let Err(io_err) = create_empty_note(&note_path) {
            error!(
                "event=note_create module=service status=error path={} error={}",
                note_path.display(),
                io_err
            );
            self.host.show_error(&format!(
                "Could not create note file \"{}\". Please check if the notes directory is writable.",
                note_path.display()
            ));
            return CaptureOutcome::Aborted;
        }

        info!(
            "event=note_create module=service status=ok language={} path={}",
            language_id,
            note_path.display()
        );

        if let Err(open_err) = self.host.open_note(&note_path, language_id) {
            // The note exists on disk; opening it is host-side convenience.
            warn!(
                "event=note_open module=service status=error path={} error={}",
                note_path.display(),
                open_err
            );
            self.host.show_error(&format!(
                "Could not open note file \"{}\".",
                note_path.display()
            ));
        }
        CaptureOutcome::Created(note_path)
    }

    fn offer_root_creation(&mut self, raw_config: &str, dir: &Path) -> Option<PathBuf> {
        let prompt = format!(
            "Notes directory \"{raw_config}\" does not exist. Would you like to create it?"
        );
        match self.host.prompt_info(&prompt, CREATE_DIRECTORY_ACTION) {
            PromptAnswer::Accepted => match fs::create_dir_all(dir) {
                Ok(()) => {
                    info!(
                        "event=root_create module=service status=ok path={}",
                        dir.display()
                    );
                    Some(dir.to_path_buf())
                }
                Err(io_err) => {
                    error!(
                        "event=root_create module=service status=error path={} error={}",
                        dir.display(),
                        io_err
                    );
                    self.host.show_error(&format!(
                        "Could not create notes directory \"{raw_config}\"."
                    ));
                    None
                }
            },
            PromptAnswer::Declined => {
                self.host.show_error("Could not create note.");
                None
            }
        }
    }

    fn report_config_error(&mut self, raw_config: &str, err: &NotesRootError) {
        let message = match err {
            NotesRootError::NoPath => {
                "No notes directory configured. Please configure it in settings.".to_string()
            }
            NotesRootError::NotAbsolute(_) => format!(
                "Notes directory \"{raw_config}\" is not a valid absolute path. Please configure it in settings."
            ),
            NotesRootError::IsFile(_) => format!(
                "Notes directory \"{raw_config}\" is not a directory. Please configure it in settings."
            ),
            // Handled by the creation prompt, never reported here.
            NotesRootError::NotFound(_) => return,
        };

        warn!(
            "event=root_resolve module=service status=rejected reason={}",
            err
        );
        if self.host.prompt_error(&message, CONFIGURE_ACTION) == PromptAnswer::Accepted {
            self.host.open_settings();
        }
    }
}

/// Creates an empty UTF-8 note file, failing if the path already exists.
fn create_empty_note(path: &Path) -> std::io::Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
}
