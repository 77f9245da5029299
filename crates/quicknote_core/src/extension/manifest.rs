//! Host extension manifest declarations.
//!
//! # Responsibility
//! - Model the slice of host extension metadata the capture picker reads.
//! - Validate individual declared-language entries without rejecting the
//!   manifest that carries them.
//!
//! # Invariants
//! - A manifest with no contribution section deserializes to an empty
//!   language list, not an error.
//! - Shape validation is per entry; one malformed entry never hides its
//!   well-formed siblings.

use serde::Deserialize;
use serde_json::Value;

/// Declared metadata for one installed host extension.
///
/// Only the contribution section is modeled; everything else in the host
/// manifest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostExtensionManifest {
    #[serde(default)]
    pub contributes: Contributions,
}

/// Contribution block of a host extension manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contributions {
    /// Declared language registrations, kept as raw JSON so a single
    /// malformed entry can be skipped without rejecting the manifest.
    #[serde(default)]
    pub languages: Vec<Value>,
}

/// One declared language that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredLanguage {
    /// Stable language identifier.
    pub id: String,
    /// Display name, the first declared alias.
    pub name: String,
    /// Default file extension, the first declared extension.
    pub extension: String,
}

/// Validates one raw language entry into a declared language.
///
/// Required shape: string `id`, non-empty `aliases` array with a string
/// first element, non-empty `extensions` array with a string first element.
/// Anything else yields `None` and is skipped by the catalog scan.
pub fn declared_language(entry: &Value) -> Option<DeclaredLanguage> {
    let id = entry.get("id")?.as_str()?;
    let name = entry.get("aliases")?.as_array()?.first()?.as_str()?;
    let extension = entry.get("extensions")?.as_array()?.first()?.as_str()?;
    Some(DeclaredLanguage {
        id: id.to_string(),
        name: name.to_string(),
        extension: extension.to_string(),
    })
}
