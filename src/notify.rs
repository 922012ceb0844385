//! Human-readable progress notifications
//!
//! The merge reports what it is about to do through a [`Notifier`]. The
//! console implementation prints each line as it arrives; tests record them.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// One line of run output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Start of a run
    Beginning,
    /// Reminder of the expected folder naming
    NamingConvention,
    /// Dry run announcement
    Simulation,
    /// An artist folder without album siblings is left alone
    Skipping { artist: String },
    /// Folders whose artist name is blank are left alone
    NoArtistName { folder: String },
    /// The artist folder is about to be created
    CreatingArtistFolder { path: PathBuf },
    /// An album folder is about to be moved
    Moving { source: PathBuf, dest: PathBuf },
    /// A filesystem step failed and the run continues with the next artist
    GroupFailed { artist: String, reason: String },
    /// User declined the confirmation prompt
    Aborted,
    /// End of a run
    Done { root: PathBuf },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginning => write!(f, "Beginning moving album folders into artists folders"),
            Self::NamingConvention => write!(
                f,
                "Album folders must be in the format of 'artist name - album name'"
            ),
            Self::Simulation => write!(f, "Simulation mode: no folders will be created or moved"),
            Self::Skipping { artist } => {
                write!(f, "Skipping '{artist}' because it is an artist folder")
            }
            Self::NoArtistName { folder } => {
                write!(f, "Skipping '{folder}' because it has no artist name")
            }
            Self::CreatingArtistFolder { path } => {
                write!(f, "Creating missing artist folder: '{}'", path.display())
            }
            Self::Moving { source, dest } => write!(
                f,
                "MOVING '{}' INTO '{}'",
                source.display(),
                dest.display()
            ),
            Self::GroupFailed { artist, reason } => {
                write!(f, "Failed to merge '{artist}': {reason}")
            }
            Self::Aborted => write!(f, "Aborted, no folders were changed"),
            Self::Done { root } => {
                write!(f, "Done reorganizing album folders in {}", root.display())
            }
        }
    }
}

/// Sink for run notifications
pub trait Notifier {
    /// Deliver one notification, in order
    fn notify(&mut self, notification: &Notification);
}

/// Prints notifications to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    /// Create a console notifier
    ///
    /// In quiet mode only failures are printed.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Colored rendering of a notification
    #[must_use]
    pub fn render(notification: &Notification) -> String {
        let text = notification.to_string();
        match notification {
            Notification::Skipping { .. }
            | Notification::NoArtistName { .. }
            | Notification::Simulation => text.yellow().to_string(),
            Notification::CreatingArtistFolder { .. } => text.cyan().to_string(),
            Notification::Moving { .. } => text.green().to_string(),
            Notification::GroupFailed { .. } => text.red().to_string(),
            Notification::Done { .. } => text.bold().to_string(),
            _ => text,
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: &Notification) {
        if let Notification::GroupFailed { .. } = notification {
            eprintln!("{}", Self::render(notification));
            return;
        }

        if !self.quiet {
            println!("{}", Self::render(notification));
        }
    }
}
