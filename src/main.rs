//! album-merge CLI application entry point
//!
//! Moves album folders named `"Artist - Album"` into per-artist folders.
//!
//! # Usage
//!
//! ```bash
//! # Reorganize after confirming
//! album-merge /music
//!
//! # Skip the confirmation prompt
//! album-merge -f /music
//!
//! # Preview the moves without touching anything
//! album-merge -s /music
//! ```
//!
//! # Configuration
//!
//! Defaults for every flag can be stored in the user's config directory
//! (`~/.config/album-merge/config.toml` on Linux).

use album_merge::{
    MergeError, RunOutcome,
    cli::Cli,
    config::{MergeConfig, Settings},
    confirm,
    notify::ConsoleNotifier,
    run,
    store::LocalFolderStore,
};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, MergeError>;

/// Set up diagnostic logging on stderr
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "album_merge=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file named on the command line, or the default one
fn load_config(cli: &Cli) -> Result<MergeConfig> {
    let config = match &cli.config {
        Some(path) => MergeConfig::load_from(path)?,
        None => MergeConfig::load()?,
    };
    Ok(config)
}

fn execute(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let settings = Settings::resolve(cli, &config);

    let root = settings.root.ok_or_else(|| {
        MergeError::InvalidArgument(
            "This program requires a path to the folder with all of the album folders".into(),
        )
    })?;

    let store = LocalFolderStore::new();
    let confirmation = confirm::for_force(settings.force);
    let mut notifier = ConsoleNotifier::new(settings.quiet);

    match run(&root, settings.run, &store, confirmation.as_ref(), &mut notifier)? {
        RunOutcome::Aborted => Ok(true),
        RunOutcome::Completed(report) => {
            if report.is_success() {
                return Ok(true);
            }

            eprintln!(
                "{}",
                format!("{} artist(s) could not be merged:", report.failures.len()).red()
            );
            for failure in &report.failures {
                eprintln!("  - {}: {}", failure.artist, failure.error);
            }
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) if e.is_diagnostic() => {
            println!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
