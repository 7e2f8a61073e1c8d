use anyhow::Result;
use clap::{Parser, Subcommand};

use ng_i18n::commands;
use ng_i18n::error::{Error, SetupStep};
use ng_i18n::locale::RegistryResolver;
use ng_i18n::prompt::TerminalPrompt;
use ng_i18n::store::ConfigStore;

/// CLI for managing Angular i18n configuration.
#[derive(Parser)]
#[command(name = "ng-i18n", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize i18n configuration
    Init,
    /// Add a new locale
    Add,
    /// Remove a locale
    Remove,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ng_i18n=warn".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        render_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::new(std::env::current_dir()?);
    let mut prompt = TerminalPrompt;

    match cli.command {
        Command::Init => commands::run_init(&store, &mut prompt),
        Command::Add => commands::run_add(&store, &mut prompt, &RegistryResolver),
        Command::Remove => commands::run_remove(&store, &mut prompt),
    }
}

/// All failures surface here as one user-facing message; setup-step
/// failures come with remediation instructions instead of an error dump.
fn render_error(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::MissingSetupStep(SetupStep::LocalizePolyfill)) => {
            eprintln!("@angular/localize is not configured.");
            eprintln!("Please run the following commands:");
            eprintln!("  ng add @angular/localize");
            eprintln!("  ng add ng-extract-i18n-merge");
            eprintln!("Then run this command again.");
        }
        Some(Error::MissingSetupStep(SetupStep::ExtractI18nMerge)) => {
            eprintln!("ng-extract-i18n-merge is not configured.");
            eprintln!("Please run the following command:");
            eprintln!("  ng add ng-extract-i18n-merge");
            eprintln!("Then run this command again.");
        }
        Some(domain) => eprintln!("Error: {domain}"),
        None => eprintln!("Error: {err:#}"),
    }
}
