//! Configuration module for album-merge
//!
//! Persistent defaults for the command-line flags. Configuration is stored in
//! the user's config directory (`~/.config/album-merge/config.toml` on Linux)
//! and every flag given on the command line is OR'd on top of it.

use crate::cli::Cli;
use crate::merge::RunOptions;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const fn default_sort() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Never ask for confirmation
    #[serde(default)]
    pub force: bool,

    /// Always run as a dry run
    #[serde(default)]
    pub simulate: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Continue with the next artist when a folder cannot be moved
    #[serde(default)]
    pub continue_on_error: bool,

    /// Sort folder names before grouping them
    #[serde(default = "default_sort")]
    pub sort: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            force: false,
            simulate: false,
            quiet: false,
            continue_on_error: false,
            sort: default_sort(),
        }
    }
}

impl MergeConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("album-merge").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// A default config file is written on first use. Failing to write it is
    /// not fatal: the defaults are used for this run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or the
    /// existing file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            if let Err(e) = default_config.save_to(&config_path) {
                warn!("Could not write default config to {}: {e}", config_path.display());
            }
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist or cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Message(format!(
                "Config file '{}' does not exist",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

/// Effective settings after merging the config file with CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder holding the album folders
    pub root: Option<PathBuf>,
    /// Skip the confirmation prompt
    pub force: bool,
    /// Suppress informational output
    pub quiet: bool,
    /// Options passed to the merge
    pub run: RunOptions,
}

impl Settings {
    /// Combine the config file with parsed CLI flags
    #[must_use]
    pub fn resolve(cli: &Cli, config: &MergeConfig) -> Self {
        Self {
            root: cli.directory.clone(),
            force: cli.force || config.force,
            quiet: cli.quiet || config.quiet,
            run: RunOptions {
                simulate: cli.simulate || config.simulate,
                continue_on_error: cli.continue_on_error || config.continue_on_error,
                sort: config.sort && !cli.no_sort,
            },
        }
    }
}
