//! Installed-extension manifest scan.
//!
//! # Responsibility
//! - Enumerate declared host extension manifests for the language picker.
//!
//! # Invariants
//! - The scan runs per invocation; newly installed extensions are visible
//!   without restarting anything.
//! - A broken extension never blocks the picker: unreadable directories and
//!   unparsable manifests are skipped.

use log::debug;
use quicknote_core::{HostExtensionManifest, InstalledExtensions};
use std::fs;
use std::path::PathBuf;

/// Manifest file name expected inside each installed extension directory.
const MANIFEST_FILE_NAME: &str = "extension.json";

/// Scans `<dir>/*/extension.json` for declared host extensions.
pub struct ExtensionDirScan {
    dir: PathBuf,
}

impl ExtensionDirScan {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl InstalledExtensions for ExtensionDirScan {
    fn installed_manifests(&self) -> Vec<HostExtensionManifest> {
        let mut manifests = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return manifests,
        };

        for entry in entries.flatten() {
            let manifest_path = entry.path().join(MANIFEST_FILE_NAME);
            let Ok(raw) = fs::read_to_string(&manifest_path) else {
                continue;
            };
            match serde_json::from_str::<HostExtensionManifest>(&raw) {
                Ok(manifest) => manifests.push(manifest),
                Err(err) => {
                    debug!(
                        "event=extension_scan module=cli status=skipped path={} error={}",
                        manifest_path.display(),
                        err
                    );
                }
            }
        }
        manifests
    }
}
