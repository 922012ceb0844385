//! album-merge - gather `"Artist - Album"` folders into artist folders
//!
//! Given a directory full of album folders named `"Artist - Album"`, this
//! library moves each one into a folder named after its artist, creating the
//! artist folder when needed. Folders that are already bare artist folders
//! are left in place.
//!
//! ```text
//! /music/Beatles                    /music/Beatles/
//! /music/Beatles - Abbey Road  ==>      Beatles - Abbey Road
//! /music/Pink Floyd - The Wall      /music/Pink Floyd/
//!                                       Pink Floyd - The Wall
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod classify;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod group;
pub mod merge;
pub mod notify;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use merge::{MergeReport, RunOptions, RunOutcome, run};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MergeError {
    /// Missing directory argument or unusable flag combination
    #[error("{0}")]
    InvalidArgument(String),
    /// Root directory does not exist
    #[error("Directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),
    /// Root path exists but is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Top-level folders could not be read
    #[error("Failed to read folders in '{}': {source}", root.display())]
    ListFailed {
        root: PathBuf,
        source: std::io::Error,
    },
    /// Artist folder could not be created
    #[error("Failed to create artist folder '{}': {source}", path.display())]
    CreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Album folder could not be moved
    #[error("Failed to move '{}' into '{}': {source}", source_path.display(), dest.display())]
    MoveFailed {
        source_path: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Confirmation prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl MergeError {
    /// Whether this error only explains why nothing was done
    ///
    /// Such errors end the program without a failure exit code.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::DirectoryNotFound(_) | Self::NotADirectory(_)
        )
    }
}
