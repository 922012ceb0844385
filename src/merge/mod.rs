//! Merging album folders into artist folders
//!
//! A run takes one snapshot of the root's top-level folders, groups them by
//! artist, plans each group and executes the plans in order:
//!
//! ```text
//! names -> group / group_sorted -> plan -> Executor::execute
//! ```
//!
//! Groups are processed one at a time. By default the first filesystem error
//! ends the run; moves already made are kept.

pub mod executor;
pub mod plan;

pub use executor::{ExecuteOptions, Executor, GroupFailure, MergeReport};
pub use plan::{AlbumMove, GroupPlan, MergePlan, plan, plan_group};

use crate::MergeError;
use crate::confirm::Confirmation;
use crate::group::{group, group_sorted};
use crate::notify::{Notification, Notifier};
use crate::store::FolderStore;
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, MergeError>;

/// Settings for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Announce every step without touching the filesystem
    pub simulate: bool,
    /// Keep going with the next artist after a failure
    pub continue_on_error: bool,
    /// Sort folder names before grouping
    pub sort: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            simulate: false,
            continue_on_error: false,
            sort: true,
        }
    }
}

impl From<RunOptions> for ExecuteOptions {
    fn from(options: RunOptions) -> Self {
        Self {
            simulate: options.simulate,
            continue_on_error: options.continue_on_error,
        }
    }
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// All groups were processed
    Completed(MergeReport),
    /// The confirmation was declined before anything was read
    Aborted,
}

/// Reorganize the album folders directly under `root`
///
/// # Errors
/// - `DirectoryNotFound` if `root` does not exist
/// - `NotADirectory` if `root` is not a directory
/// - `ListFailed` if the folders under `root` cannot be enumerated
/// - `CreateFailed` / `MoveFailed` on the first filesystem failure, unless
///   `continue_on_error` is set
/// - `Prompt` if the confirmation cannot be read
pub fn run(
    root: &Path,
    options: RunOptions,
    store: &dyn FolderStore,
    confirmation: &dyn Confirmation,
    notifier: &mut dyn Notifier,
) -> Result<RunOutcome> {
    if !store.exists(root) {
        return Err(MergeError::DirectoryNotFound(root.to_path_buf()));
    }
    if !store.is_dir(root) {
        return Err(MergeError::NotADirectory(root.to_path_buf()));
    }

    notifier.notify(&Notification::Beginning);
    notifier.notify(&Notification::NamingConvention);
    if options.simulate {
        notifier.notify(&Notification::Simulation);
    }

    let prompt = format!("Proceed with reorganizing {}?", root.display());
    if !confirmation.confirm(&prompt)? {
        notifier.notify(&Notification::Aborted);
        return Ok(RunOutcome::Aborted);
    }

    let names = store
        .list_top_level_directories(root)
        .map_err(|source| MergeError::ListFailed {
            root: root.to_path_buf(),
            source,
        })?;
    info!("Read {} folders from {}", names.len(), root.display());

    let groups = if options.sort {
        group_sorted(&names)
    } else {
        group(&names)
    };
    let plans = plan(&groups, root);

    let report = Executor::new(store, notifier, options.into()).execute(&plans)?;

    notifier.notify(&Notification::Done {
        root: root.to_path_buf(),
    });

    Ok(RunOutcome::Completed(report))
}
