//! Command-line interface definitions and parsing
//!
//! ```text
//! album-merge [OPTIONS] [DIRECTORY]
//!
//! album-merge /music              # ask, then reorganize /music
//! album-merge -f /music           # no confirmation prompt
//! album-merge -s /music           # dry run, print the plan only
//! album-merge /music -f           # flags may follow the directory
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Move 'Artist - Album' folders into per-artist folders
#[derive(Parser, Debug, Clone)]
#[command(name = "album-merge", version, about, long_about = None)]
pub struct Cli {
    /// Folder that contains all of the album folders
    #[arg(value_name = "DIRECTORY", value_hint = clap::ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Do not ask for confirmation before starting
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Print what would be done without creating or moving folders
    #[arg(short = 's', long = "simulate")]
    pub simulate: bool,

    /// Keep going with the next artist when a folder cannot be moved
    #[arg(long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Process folders in enumeration order instead of sorting them by name
    #[arg(long = "no-sort")]
    pub no_sort: bool,

    /// Suppress informational output (errors are still printed)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print debug logging to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Read settings from this file instead of the default config
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
