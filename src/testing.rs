//! Testing utilities for album-merge
//!
//! In-memory stand-ins for the filesystem, the notification sink and the
//! confirmation prompt, so the merge can be exercised without touching disk
//! or waiting on a terminal.
//!
//! Only available when compiled with `cfg(test)`.

use crate::MergeError;
use crate::confirm::Confirmation;
use crate::notify::{Notification, Notifier};
use crate::store::FolderStore;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// A mutation performed on a [`MemoryFolderStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Create(PathBuf),
    Move(PathBuf, PathBuf),
}

/// Folder tree held in memory that records every mutation
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    folders: RefCell<BTreeSet<PathBuf>>,
    ops: RefCell<Vec<StoreOp>>,
    failing_moves: RefCell<HashSet<PathBuf>>,
    failing_creates: RefCell<HashSet<PathBuf>>,
}

impl MemoryFolderStore {
    /// Create a store holding `root` and one folder per name beneath it
    pub fn with_folders(root: impl AsRef<Path>, names: &[&str]) -> Self {
        let store = Self::default();
        store.add_folder(root.as_ref());
        for name in names {
            store.add_folder(root.as_ref().join(name));
        }
        store
    }

    /// Add a folder and any missing ancestors without recording an op
    pub fn add_folder(&self, path: impl AsRef<Path>) {
        let mut folders = self.folders.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            folders.insert(ancestor.to_path_buf());
        }
    }

    /// Make every move out of `source` fail with `PermissionDenied`
    pub fn fail_moves_from(&self, source: impl AsRef<Path>) {
        self.failing_moves
            .borrow_mut()
            .insert(source.as_ref().to_path_buf());
    }

    /// Make creating `path` fail with `PermissionDenied`
    pub fn fail_creates_at(&self, path: impl AsRef<Path>) {
        self.failing_creates
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    /// Whether a folder exists
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.folders.borrow().contains(path.as_ref())
    }

    /// Mutations in the order they happened
    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.borrow().clone()
    }

    pub fn create_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, StoreOp::Create(_)))
            .count()
    }

    pub fn move_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, StoreOp::Move(..)))
            .count()
    }
}

fn denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("access to '{}' denied", path.display()),
    )
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("'{}' not found", path.display()),
    )
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("'{}' already exists", path.display()),
    )
}

fn parent_exists(folders: &BTreeSet<PathBuf>, path: &Path) -> bool {
    path.parent().is_some_and(|parent| folders.contains(parent))
}

impl FolderStore for MemoryFolderStore {
    fn list_top_level_directories(&self, root: &Path) -> io::Result<Vec<String>> {
        let folders = self.folders.borrow();
        if !folders.contains(root) {
            return Err(not_found(root));
        }

        Ok(folders
            .iter()
            .filter(|path| path.parent() == Some(root))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.contains(path)
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        if self.failing_creates.borrow().contains(path) {
            return Err(denied(path));
        }

        let mut folders = self.folders.borrow_mut();
        if folders.contains(path) {
            return Err(already_exists(path));
        }
        if !parent_exists(&folders, path) {
            return Err(not_found(path));
        }

        folders.insert(path.to_path_buf());
        self.ops.borrow_mut().push(StoreOp::Create(path.to_path_buf()));
        Ok(())
    }

    fn move_directory(&self, source: &Path, dest: &Path) -> io::Result<()> {
        if self.failing_moves.borrow().contains(source) {
            return Err(denied(source));
        }

        let mut folders = self.folders.borrow_mut();
        if !folders.contains(source) {
            return Err(not_found(source));
        }
        if folders.contains(dest) {
            return Err(already_exists(dest));
        }
        if !parent_exists(&folders, dest) {
            return Err(not_found(dest));
        }

        let subtree: Vec<PathBuf> = folders
            .iter()
            .filter(|path| path.starts_with(source))
            .cloned()
            .collect();
        for path in subtree {
            folders.remove(&path);
            if let Ok(rest) = path.strip_prefix(source) {
                folders.insert(dest.join(rest));
            }
        }

        self.ops
            .borrow_mut()
            .push(StoreOp::Move(source.to_path_buf(), dest.to_path_buf()));
        Ok(())
    }
}

/// Collects notifications in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    /// Rendered text of every notification
    pub fn lines(&self) -> Vec<String> {
        self.notifications.iter().map(ToString::to_string).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}

/// Confirmation with a fixed answer that counts how often it was asked
#[derive(Debug, Default)]
pub struct ScriptedConfirmation {
    pub answer: bool,
    pub asked: Cell<usize>,
}

impl ScriptedConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }
}

impl Confirmation for ScriptedConfirmation {
    fn confirm(&self, _prompt: &str) -> Result<bool, MergeError> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lists_children_only() {
        let store = MemoryFolderStore::with_folders("/music", &["Beatles", "Radiohead"]);
        store.add_folder("/music/Beatles/Beatles - Help!");

        let names = store.list_top_level_directories(Path::new("/music")).unwrap();
        assert_eq!(names, ["Beatles", "Radiohead"]);
    }

    #[test]
    fn test_memory_store_moves_subtree() {
        let store = MemoryFolderStore::with_folders("/music", &["Beatles", "Beatles - Help!"]);
        store.add_folder("/music/Beatles - Help!/Disc 1");

        store
            .move_directory(
                Path::new("/music/Beatles - Help!"),
                Path::new("/music/Beatles/Beatles - Help!"),
            )
            .unwrap();

        assert!(!store.contains("/music/Beatles - Help!"));
        assert!(store.contains("/music/Beatles/Beatles - Help!/Disc 1"));
        assert_eq!(store.move_count(), 1);
    }

    #[test]
    fn test_memory_store_create_needs_parent() {
        let store = MemoryFolderStore::with_folders("/music", &[]);
        assert!(store.create_directory(Path::new("/music/a/b")).is_err());
        assert!(store.create_directory(Path::new("/music/a")).is_ok());
        assert_eq!(store.create_count(), 1);
    }
}
