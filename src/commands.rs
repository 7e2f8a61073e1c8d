//! Command orchestration: one load/mutate/save cycle per invocation.
//!
//! Each command runs the same pipeline — host version precondition, load
//! the workspace configuration, resolve the target project, apply one
//! operation, save once. Any failure before the save leaves the on-disk
//! document unchanged.

use anyhow::{Context, Result};
use tracing::info;

use crate::error::{Error, SetupStep};
use crate::locale::LocaleResolver;
use crate::ops;
use crate::preconditions;
use crate::prompt::{select_project, Prompt};
use crate::store::ConfigStore;
use crate::workspace::{AngularConfig, ProjectConfig};

/// Initialize i18n configuration for a project.
pub fn run_init(store: &ConfigStore, prompt: &mut dyn Prompt) -> Result<()> {
    check_host(store)?;
    let mut config = store.load()?;
    let name = resolve_project(&config, prompt)?;
    let project = project_mut(&mut config, &name)?;

    // Checked here, before prompting, so the user is not asked for a source
    // locale only to be told setup is incomplete afterwards.
    if !preconditions::check_localize_polyfill(project) {
        return Err(Error::MissingSetupStep(SetupStep::LocalizePolyfill).into());
    }
    if !preconditions::check_extract_i18n_builder(project) {
        return Err(Error::MissingSetupStep(SetupStep::ExtractI18nMerge).into());
    }

    let source_locale = prompt.input("Enter source locale code (default: en):", "en")?;
    ops::init_project(project, &source_locale)?;
    store.save(&config)?;

    info!(project = %name, source_locale = %source_locale, "initialized i18n configuration");
    println!("i18n configuration initialized successfully!");
    Ok(())
}

/// Add a translation target locale to a project.
pub fn run_add(
    store: &ConfigStore,
    prompt: &mut dyn Prompt,
    resolver: &dyn LocaleResolver,
) -> Result<()> {
    check_host(store)?;
    let mut config = store.load()?;
    let name = resolve_project(&config, prompt)?;

    let code = prompt.input("Enter locale code (BCP 47) (e.g., fr):", "")?;
    let project = project_mut(&mut config, &name)?;
    ops::add_locale(project, &code, resolver)?;
    store.save(&config)?;

    info!(project = %name, locale = %code, "added locale");
    println!("Locale {code} added successfully!");
    Ok(())
}

/// Remove a configured locale from a project.
pub fn run_remove(store: &ConfigStore, prompt: &mut dyn Prompt) -> Result<()> {
    check_host(store)?;
    let mut config = store.load()?;
    let name = resolve_project(&config, prompt)?;
    let project = project_mut(&mut config, &name)?;

    let locales = ops::configured_locales(project);
    if locales.is_empty() {
        return Err(Error::NoLocalesConfigured.into());
    }

    // Selection over existing keys only; never free text.
    let code = prompt.select("Select locale to remove:", &locales)?;
    ops::remove_locale(project, &code)?;
    store.save(&config)?;

    info!(project = %name, locale = %code, "removed locale");
    println!("Locale {code} removed successfully!");
    Ok(())
}

fn check_host(store: &ConfigStore) -> Result<()> {
    let manifest = store.load_package_manifest()?;
    preconditions::check_host_version(&manifest)?;
    Ok(())
}

fn resolve_project(config: &AngularConfig, prompt: &mut dyn Prompt) -> Result<String> {
    let names: Vec<String> = config.projects.keys().cloned().collect();
    select_project(&names, prompt)
}

fn project_mut<'a>(config: &'a mut AngularConfig, name: &str) -> Result<&'a mut ProjectConfig> {
    config
        .projects
        .get_mut(name)
        .with_context(|| format!("project `{name}` not found in workspace configuration"))
}
