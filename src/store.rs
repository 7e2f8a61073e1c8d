//! Durable storage boundary for the workspace configuration.
//!
//! One load/mutate/save cycle per invocation: `load` reads `angular.json`
//! fresh, `save` writes it back once at the end. A failure anywhere before
//! `save` leaves the on-disk document untouched. The save itself goes
//! through a temp file in the same directory followed by a rename, so a
//! crash mid-write cannot truncate the previous valid file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::workspace::AngularConfig;

/// Workspace configuration file name, fixed relative to the store root.
pub const CONFIG_FILE: &str = "angular.json";

/// Dependency manifest read (never written) for the version precondition.
pub const PACKAGE_FILE: &str = "package.json";

/// The slice of `package.json` the precondition check needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

/// Reads and writes the configuration documents under one root directory
/// (normally the invocation directory).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn package_path(&self) -> PathBuf {
        self.root.join(PACKAGE_FILE)
    }

    /// Load `angular.json`.
    pub fn load(&self) -> Result<AngularConfig> {
        let path = self.config_path();
        let raw = read_file(&path)?;
        debug!(path = %path.display(), bytes = raw.len(), "loaded workspace configuration");
        serde_json::from_str(&raw).map_err(|source| Error::MalformedDocument { path, source })
    }

    /// Load the dependency manifest (`package.json`). Read-only.
    pub fn load_package_manifest(&self) -> Result<PackageManifest> {
        let path = self.package_path();
        let raw = read_file(&path)?;
        serde_json::from_str(&raw).map_err(|source| Error::MalformedDocument { path, source })
    }

    /// Persist `angular.json` via write-then-rename.
    pub fn save(&self, config: &AngularConfig) -> Result<()> {
        let path = self.config_path();
        let json = serde_json::to_string_pretty(config)
            .map_err(|source| Error::MalformedDocument {
                path: path.clone(),
                source,
            })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| Error::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "saved workspace configuration");
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_config(json: &str) -> (TempDir, ConfigStore) {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join(CONFIG_FILE), json).expect("write config");
        let store = ConfigStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConfigStore::new(dir.path());
        assert!(matches!(store.load(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_document() {
        let (_dir, store) = store_with_config("{ not json");
        assert!(matches!(store.load(), Err(Error::MalformedDocument { .. })));
    }

    #[test]
    fn test_load_save_round_trip_preserves_unknown_keys() {
        let (dir, store) = store_with_config(
            r#"{"version": 1, "projects": {"demo": {"root": "", "projectType": "application"}}}"#,
        );

        let config = store.load().expect("load");
        store.save(&config).expect("save");

        let raw = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("reparse");
        assert_eq!(value["version"], 1);
        assert_eq!(value["projects"]["demo"]["projectType"], "application");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (dir, store) = store_with_config(r#"{"projects": {}}"#);
        let config = store.load().expect("load");
        store.save(&config).expect("save");
        assert!(!dir.path().join("angular.json.tmp").exists());
    }

    #[test]
    fn test_load_package_manifest() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join(PACKAGE_FILE),
            r#"{"name": "demo", "dependencies": {"@angular/core": "^19.2.0"}}"#,
        )
        .expect("write package.json");

        let manifest = ConfigStore::new(dir.path())
            .load_package_manifest()
            .expect("load manifest");
        assert_eq!(
            manifest.dependencies.get("@angular/core").map(String::as_str),
            Some("^19.2.0")
        );
    }
}
