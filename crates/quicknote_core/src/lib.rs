//! Core capture logic for Quicknote.
//! This crate is the single source of truth for note-capture invariants.

pub mod extension;
pub mod host;
pub mod logging;
pub mod path;
pub mod service;

pub use extension::languages::{
    collect_languages, LanguageCatalog, LanguageEntry, PLAINTEXT_FILE_EXTENSION,
    PLAINTEXT_LANGUAGE_ID, PLAINTEXT_LANGUAGE_NAME,
};
pub use extension::manifest::{declared_language, DeclaredLanguage, HostExtensionManifest};
pub use host::{
    EditorHost, InstalledExtensions, LanguagePick, OpenNoteError, PromptAnswer, SettingsSource,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use path::plan::{day_directory, note_file_name};
pub use path::resolve::{resolve_notes_root, NotesRootError};
pub use service::capture_service::{CaptureOutcome, CaptureService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
