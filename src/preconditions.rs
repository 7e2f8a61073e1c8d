//! Read-only checks that gate every mutation.
//!
//! The host-framework check runs against `package.json`; the two per-project
//! checks are presence signals only. None of these mutate anything — the
//! caller decides whether to abort and what remediation to print.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::store::PackageManifest;
use crate::workspace::ProjectConfig;

/// Host framework package gating the whole tool.
pub const ANGULAR_CORE: &str = "@angular/core";

/// Minimum supported major version of the host framework.
pub const MIN_MAJOR_VERSION: u64 = 19;

static MAJOR_VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Fail unless `@angular/core` is declared with major version >=
/// [`MIN_MAJOR_VERSION`].
///
/// The major is the first integer in the declared version string, so range
/// prefixes (`^19.2.0`, `~19.0.0`) parse the same as bare versions. Version
/// strings with no digits at all (`latest`, `next`) pass the check; they
/// declare no major to compare against.
pub fn check_host_version(manifest: &PackageManifest) -> Result<()> {
    let version = manifest
        .dependencies
        .get(ANGULAR_CORE)
        .ok_or(Error::DependencyMissing)?;

    let regex = MAJOR_VERSION_REGEX.get_or_init(|| Regex::new(r"\d+").unwrap());
    if let Some(major) = regex
        .find(version)
        .and_then(|m| m.as_str().parse::<u64>().ok())
    {
        if major < MIN_MAJOR_VERSION {
            return Err(Error::UnsupportedVersion(version.clone()));
        }
    }
    Ok(())
}

/// Whether `@angular/localize` has been set up for the project.
pub fn check_localize_polyfill(project: &ProjectConfig) -> bool {
    project.has_localize_polyfill()
}

/// Whether the `extract-i18n` builder target is present on the project.
pub fn check_extract_i18n_builder(project: &ProjectConfig) -> bool {
    project.has_extract_i18n()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn manifest_with(version: &str) -> PackageManifest {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(ANGULAR_CORE.to_string(), version.to_string());
        PackageManifest { dependencies }
    }

    #[test]
    fn test_missing_dependency() {
        let manifest = PackageManifest::default();
        assert!(matches!(
            check_host_version(&manifest),
            Err(Error::DependencyMissing)
        ));
    }

    #[test]
    fn test_supported_versions() {
        assert!(check_host_version(&manifest_with("19.0.0")).is_ok());
        assert!(check_host_version(&manifest_with("^19.2.0")).is_ok());
        assert!(check_host_version(&manifest_with("~20.1.0")).is_ok());
    }

    #[test]
    fn test_unsupported_versions() {
        assert!(matches!(
            check_host_version(&manifest_with("^18.2.0")),
            Err(Error::UnsupportedVersion(v)) if v == "^18.2.0"
        ));
        assert!(check_host_version(&manifest_with("17.0.0")).is_err());
        assert!(check_host_version(&manifest_with("0.19.0")).is_err());
    }

    #[test]
    fn test_versions_without_digits_pass() {
        assert!(check_host_version(&manifest_with("latest")).is_ok());
        assert!(check_host_version(&manifest_with("next")).is_ok());
    }
}
