//! Declared-language aggregation for the capture picker.
//!
//! # Responsibility
//! - Seed the built-in plain-text entry.
//! - Merge declared language contributions with first-writer-wins semantics.
//!
//! # Invariants
//! - The `plaintext` seed is inserted before any scan and is never
//!   overwritten by a scanned contribution.
//! - The catalog is rebuilt for every picker invocation; nothing caches it.

use crate::extension::manifest::{declared_language, HostExtensionManifest};
use log::debug;
use std::collections::BTreeMap;

/// Built-in language identifier every catalog contains.
pub const PLAINTEXT_LANGUAGE_ID: &str = "plaintext";
/// Display name of the built-in entry.
pub const PLAINTEXT_LANGUAGE_NAME: &str = "Plain Text";
/// Default file extension of the built-in entry.
pub const PLAINTEXT_FILE_EXTENSION: &str = ".txt";

/// Display name and default extension for one language identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub extension: String,
}

/// Identifier-keyed language catalog.
pub type LanguageCatalog = BTreeMap<String, LanguageEntry>;

/// Builds the language catalog from currently installed host extensions.
///
/// Entries that fail shape validation are skipped silently; an extension
/// with a broken contribution must not block the picker.
pub fn collect_languages(manifests: &[HostExtensionManifest]) -> LanguageCatalog {
    let mut catalog = LanguageCatalog::new();
    catalog.insert(
        PLAINTEXT_LANGUAGE_ID.to_string(),
        LanguageEntry {
            name: PLAINTEXT_LANGUAGE_NAME.to_string(),
            extension: PLAINTEXT_FILE_EXTENSION.to_string(),
        },
    );

    let mut skipped = 0usize;
    for manifest in manifests {
        for entry in &manifest.contributes.languages {
            let Some(language) = declared_language(entry) else {
                skipped += 1;
                continue;
            };
            if catalog.contains_key(language.id.as_str()) {
                continue;
            }
            catalog.insert(
                language.id,
                LanguageEntry {
                    name: language.name,
                    extension: language.extension,
                },
            );
        }
    }

    debug!(
        "event=language_scan module=extension status=ok languages={} skipped={}",
        catalog.len(),
        skipped
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::{collect_languages, PLAINTEXT_FILE_EXTENSION, PLAINTEXT_LANGUAGE_ID};
    use crate::extension::manifest::HostExtensionManifest;
    use serde_json::json;

    fn manifest(languages: serde_json::Value) -> HostExtensionManifest {
        serde_json::from_value(json!({ "contributes": { "languages": languages } }))
            .expect("manifest fixture")
    }

    #[test]
    fn empty_scan_still_contains_plaintext_seed() {
        let catalog = collect_languages(&[]);
        let entry = catalog
            .get(PLAINTEXT_LANGUAGE_ID)
            .expect("plaintext seed entry");
        assert_eq!(entry.name, "Plain Text");
        assert_eq!(entry.extension, PLAINTEXT_FILE_EXTENSION);
    }

    #[test]
    fn scanned_plaintext_contribution_never_replaces_seed() {
        let catalog = collect_languages(&[manifest(json!([{
            "id": "plaintext",
            "aliases": ["Text, But Different"],
            "extensions": [".text"],
        }]))]);
        let entry = catalog
            .get(PLAINTEXT_LANGUAGE_ID)
            .expect("plaintext seed entry");
        assert_eq!(entry.name, "Plain Text");
        assert_eq!(entry.extension, ".txt");
    }

    #[test]
    fn first_declared_entry_wins_across_manifests() {
        let first = manifest(json!([{
            "id": "rust",
            "aliases": ["Rust"],
            "extensions": [".rs"],
        }]));
        let second = manifest(json!([{
            "id": "rust",
            "aliases": ["Rust (alternate)"],
            "extensions": [".rust"],
        }]));
        let catalog = collect_languages(&[first, second]);
        let entry = catalog.get("rust").expect("rust entry");
        assert_eq!(entry.name, "Rust");
        assert_eq!(entry.extension, ".rs");
    }

    #[test]
    fn malformed_entries_are_skipped_silently() {
        let catalog = collect_languages(&[manifest(json!([
            { "aliases": ["No Id"], "extensions": [".noid"] },
            { "id": 7, "aliases": ["Numeric Id"], "extensions": [".n"] },
            { "id": "no-aliases", "aliases": [], "extensions": [".na"] },
            { "id": "no-extensions", "aliases": ["No Extensions"], "extensions": [] },
            { "id": "markdown", "aliases": ["Markdown"], "extensions": [".md", ".markdown"] },
        ]))]);

        assert_eq!(catalog.len(), 2);
        let entry = catalog.get("markdown").expect("markdown entry");
        assert_eq!(entry.name, "Markdown");
        assert_eq!(entry.extension, ".md");
    }
}
