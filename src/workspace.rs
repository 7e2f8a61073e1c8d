//! Typed view of the Angular workspace configuration (`angular.json`).
//!
//! Only the fields this tool edits are modeled; everything else at every
//! nesting level is captured in a flattened passthrough map so a
//! load/mutate/save cycle never drops sibling keys the tool does not know
//! about.
//!
//! The accessor methods on [`ProjectConfig`] are the navigation layer: each
//! one returns a mutable handle to a nested optional substructure, creating
//! missing intermediate levels with their default shapes. The one exception
//! is the `extract-i18n` builder target, which is never auto-created — its
//! absence means an external setup command has not run and must be surfaced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Polyfill entry whose presence signals that `@angular/localize` is set up.
pub const LOCALIZE_POLYFILL: &str = "@angular/localize/init";

/// Default translation output directory when extract-i18n does not set one.
pub const DEFAULT_OUTPUT_PATH: &str = "src/locales";

/// Root of the workspace configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AngularConfig {
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectConfig>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One project entry under `projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nBlock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub architect: Option<Architect>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The `i18n` block: source locale plus translation targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct I18nBlock {
    pub source_locale: SourceLocale,

    #[serde(default)]
    pub locales: BTreeMap<String, LocaleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocale {
    pub code: String,
    pub sub_path: String,
}

/// A translation target registered under `i18n.locales`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    pub translation: String,
    pub sub_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Architect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildTarget>,

    #[serde(rename = "extract-i18n", skip_serializing_if = "Option::is_none")]
    pub extract_i18n: Option<ExtractI18nTarget>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BuildOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurations: Option<BTreeMap<String, BuildConfiguration>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyfills: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One named build configuration. Locale configurations set `localize` and
/// `deleteOutputPath`; unrelated configurations (e.g. `production`) pass
/// through via `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localize: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_output_path: Option<bool>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl BuildConfiguration {
    /// The shape registered for every locale (source and targets alike).
    pub fn for_locale(code: &str) -> Self {
        Self {
            localize: Some(vec![code.to_string()]),
            delete_output_path: Some(false),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractI18nTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ExtractI18nOptions>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractI18nOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_files: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ProjectConfig {
    /// Whether the `@angular/localize/init` polyfill is declared in the
    /// build options. Read-only precondition signal.
    pub fn has_localize_polyfill(&self) -> bool {
        self.architect
            .as_ref()
            .and_then(|a| a.build.as_ref())
            .and_then(|b| b.options.as_ref())
            .and_then(|o| o.polyfills.as_ref())
            .map(|p| p.iter().any(|entry| entry == LOCALIZE_POLYFILL))
            .unwrap_or(false)
    }

    /// Whether the `extract-i18n` builder target exists. Read-only
    /// precondition signal.
    pub fn has_extract_i18n(&self) -> bool {
        self.architect
            .as_ref()
            .map(|a| a.extract_i18n.is_some())
            .unwrap_or(false)
    }

    /// Mutable handle to `architect.build.configurations`, creating every
    /// missing intermediate level with an empty default. Sibling keys at
    /// each level are left untouched.
    pub fn ensure_build_configurations(&mut self) -> &mut BTreeMap<String, BuildConfiguration> {
        let architect = self.architect.get_or_insert_with(Architect::default);
        let build = architect.build.get_or_insert_with(BuildTarget::default);
        build.configurations.get_or_insert_with(BTreeMap::new)
    }

    /// Mutable handle to `extract-i18n.options`. The builder target itself
    /// must already exist; only the `options` object under it is created on
    /// demand.
    pub fn extract_i18n_options_mut(&mut self) -> Result<&mut ExtractI18nOptions> {
        let target = self
            .architect
            .as_mut()
            .and_then(|a| a.extract_i18n.as_mut())
            .ok_or(Error::ExtractI18nNotConfigured)?;
        Ok(target.options.get_or_insert_with(ExtractI18nOptions::default))
    }

    /// Mutable handle to the i18n block, creating `{sourceLocale, locales:
    /// {}}` when absent. An existing block is returned unchanged, which is
    /// what makes `init` idempotent.
    pub fn ensure_i18n(&mut self, source_locale: &str) -> &mut I18nBlock {
        self.i18n.get_or_insert_with(|| I18nBlock {
            source_locale: SourceLocale {
                code: source_locale.to_string(),
                sub_path: source_locale.to_string(),
            },
            locales: BTreeMap::new(),
        })
    }
}
