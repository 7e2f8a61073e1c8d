//! Error taxonomy for workspace configuration mutations.
//!
//! Every failure a command can hit is a named variant here. The binary
//! boundary renders these as user-facing messages (with remediation
//! instructions where a setup step is missing) and exits non-zero; no raw
//! error structures reach the terminal.

use std::path::PathBuf;

/// A required external setup step that has not been run yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// `@angular/localize/init` is missing from the build polyfills.
    LocalizePolyfill,
    /// The `extract-i18n` builder target is absent from the project.
    ExtractI18nMerge,
}

/// Errors produced while loading, mutating, or persisting the workspace
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input file is absent.
    #[error("{} not found in current directory", .0.display())]
    NotFound(PathBuf),

    /// An input file exists but is not valid JSON.
    #[error("failed to parse {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `@angular/core` is not declared in package.json dependencies.
    #[error("Angular is not installed in this project")]
    DependencyMissing,

    /// The declared Angular major version is too old.
    #[error("this CLI requires Angular 19 or higher (current version: {0})")]
    UnsupportedVersion(String),

    /// An external setup command must run before `init`.
    #[error("required setup step missing: {0:?}")]
    MissingSetupStep(SetupStep),

    /// The `extract-i18n` builder target is entirely absent. Its absence
    /// signals a missing external setup step and is surfaced, never
    /// silently created.
    #[error("extract-i18n is not configured for this project")]
    ExtractI18nNotConfigured,

    /// The project has no i18n block; `init` must run first.
    #[error("i18n is not initialized for this project; run `init` first")]
    I18nNotInitialized,

    /// The locale code did not resolve to a display name.
    #[error("`{0}` is not a valid BCP 47 locale code; see https://angular.dev/guide/i18n/locale-id for reference")]
    InvalidLocaleCode(String),

    /// `remove` was invoked on a project with no configured locales.
    #[error("no locales configured for this project")]
    NoLocalesConfigured,

    /// Filesystem failure while reading or writing a configuration file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
