//! Note location planning.
//!
//! # Responsibility
//! - Derive the day-bucket directory for a capture instant.
//! - Derive second-granularity timestamped note file names.
//!
//! # Invariants
//! - Pure functions of their inputs and the provided UTC instant; no I/O.
//! - File extensions are dot-normalized, never rejected.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

const DAY_FORMAT: &str = "%Y-%m-%d";
const STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Returns the day-bucket directory for notes captured at `at`.
///
/// The bucket name is the UTC calendar date, `YYYY-MM-DD`.
pub fn day_directory(root: &Path, at: DateTime<Utc>) -> PathBuf {
    root.join(at.format(DAY_FORMAT).to_string())
}

/// Returns the note file path inside `dir` for a capture at `at`.
///
/// The stem is the UTC timestamp with colons replaced by hyphens and the
/// sub-second fraction dropped. Two captures within the same second plan the
/// same path; the file system's create-without-overwrite step arbitrates.
pub fn note_file_name(dir: &Path, file_extension: &str, at: DateTime<Utc>) -> PathBuf {
    let stamp = at.format(STAMP_FORMAT).to_string();
    dir.join(format!("{stamp}{}", normalize_extension(file_extension)))
}

/// Dot-normalizes a file extension: `txt` and `.txt` are equivalent.
pub fn normalize_extension(raw: &str) -> String {
    if raw.starts_with('.') {
        raw.to_string()
    } else {
        format!(".{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::{day_directory, normalize_extension, note_file_name};
    use chrono::{DateTime, TimeZone, Utc};
    use std::path::Path;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn day_directory_appends_calendar_date() {
        let dir = day_directory(Path::new("/notes"), fixed_instant());
        assert_eq!(dir, Path::new("/notes/2024-03-05"));
    }

    #[test]
    fn day_directory_normalizes_trailing_separators() {
        let with_slash = day_directory(Path::new("/notes/"), fixed_instant());
        let without = day_directory(Path::new("/notes"), fixed_instant());
        assert_eq!(with_slash, without);
    }

    #[test]
    fn note_file_name_uses_hyphenated_second_granularity_stamp() {
        let path = note_file_name(Path::new("/notes/2024-03-05"), "txt", fixed_instant());
        assert_eq!(path, Path::new("/notes/2024-03-05/2024-03-05T10-00-00.txt"));
    }

    #[test]
    fn extension_normalization_is_idempotent() {
        let bare = note_file_name(Path::new("/d"), "txt", fixed_instant());
        let dotted = note_file_name(Path::new("/d"), ".txt", fixed_instant());
        assert_eq!(bare, dotted);
        assert_eq!(normalize_extension(".md"), ".md");
        assert_eq!(normalize_extension("md"), ".md");
    }
}
