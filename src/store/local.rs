//! `FolderStore` backed by `std::fs`

use super::FolderStore;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFolderStore;

impl LocalFolderStore {
    /// Create a store over the local filesystem
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FolderStore for LocalFolderStore {
    fn list_top_level_directories(&self, root: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            // follows symlinks, so linked album folders are listed too
            if !entry.path().is_dir() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    warn!("Skipping folder with a non UTF-8 name: {}", raw.to_string_lossy());
                }
            }
        }

        debug!("Found {} top-level folders in {}", names.len(), root.display());
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn move_directory(&self, source: &Path, dest: &Path) -> io::Result<()> {
        // rename() silently replaces an empty directory on POSIX
        if dest.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination '{}' already exists", dest.display()),
            ));
        }
        fs::rename(source, dest)
    }
}
