//! Filesystem capability used by the merge
//!
//! Everything that touches the disk goes through [`FolderStore`], so the
//! planning and execution logic can run against the real filesystem
//! ([`LocalFolderStore`]) or an in-memory store in tests.

mod local;

pub use local::LocalFolderStore;

use std::io;
use std::path::Path;

/// Directory operations needed to reorganize a music folder
pub trait FolderStore {
    /// Names of the directories directly under `root`
    ///
    /// Files are ignored. Order is whatever the store enumerates.
    ///
    /// # Errors
    /// Returns an `io::Error` if `root` cannot be read.
    fn list_top_level_directories(&self, root: &Path) -> io::Result<Vec<String>>;

    /// Whether anything exists at `path`
    #[must_use]
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory
    #[must_use]
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory
    ///
    /// # Errors
    /// Returns an `io::Error` if the parent is missing, the path is invalid or
    /// access is denied.
    fn create_directory(&self, path: &Path) -> io::Result<()>;

    /// Move a directory to a new location
    ///
    /// # Errors
    /// Returns an `io::Error` if `source` does not exist, `dest` already
    /// exists, or access is denied.
    fn move_directory(&self, source: &Path, dest: &Path) -> io::Result<()>;
}
