//! Carries out merge plans against a `FolderStore`

use super::plan::{AlbumMove, GroupPlan, MergePlan};
use crate::MergeError;
use crate::notify::{Notification, Notifier};
use crate::store::FolderStore;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, error};

type Result<T> = std::result::Result<T, MergeError>;

/// How plans are carried out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Announce every step but leave the filesystem untouched
    pub simulate: bool,
    /// Record a failed artist group and carry on with the next one
    pub continue_on_error: bool,
}

/// An artist group that could not be fully merged
#[derive(Debug)]
pub struct GroupFailure {
    pub artist: String,
    pub error: MergeError,
}

/// Everything a run did, or would have done in simulate mode
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Whether the filesystem was left untouched
    pub simulated: bool,
    /// Artist folders left alone
    pub skipped: Vec<String>,
    /// Folders left alone because their artist name is blank
    pub ignored: Vec<String>,
    /// Artist folders created
    pub created: Vec<PathBuf>,
    /// Album folders moved
    pub moved: Vec<AlbumMove>,
    /// Groups abandoned after an error (only with `continue_on_error`)
    pub failures: Vec<GroupFailure>,
}

impl MergeReport {
    /// Whether every group was processed without error
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Applies plans one artist group at a time
pub struct Executor<'a> {
    store: &'a dyn FolderStore,
    notifier: &'a mut dyn Notifier,
    options: ExecuteOptions,
    /// Artist folders created by a simulated run
    simulated_dirs: HashSet<PathBuf>,
}

impl<'a> Executor<'a> {
    #[must_use]
    pub fn new(
        store: &'a dyn FolderStore,
        notifier: &'a mut dyn Notifier,
        options: ExecuteOptions,
    ) -> Self {
        Self {
            store,
            notifier,
            options,
            simulated_dirs: HashSet::new(),
        }
    }

    /// Execute all plans in order
    ///
    /// # Errors
    /// Returns the first `CreateFailed` or `MoveFailed` error unless
    /// `continue_on_error` is set, in which case failures are collected in the
    /// report. Moves completed before a failure are not undone.
    pub fn execute(&mut self, plans: &[GroupPlan]) -> Result<MergeReport> {
        let mut report = MergeReport {
            simulated: self.options.simulate,
            ..MergeReport::default()
        };

        for plan in plans {
            match plan {
                GroupPlan::Skip { artist } => {
                    self.notifier.notify(&Notification::Skipping {
                        artist: artist.clone(),
                    });
                    report.skipped.push(artist.clone());
                }
                GroupPlan::NoArtist { folders } => {
                    for folder in folders {
                        self.notifier.notify(&Notification::NoArtistName {
                            folder: folder.clone(),
                        });
                        report.ignored.push(folder.clone());
                    }
                }
                GroupPlan::Merge(merge) => {
                    if let Err(err) = self.merge_group(merge, &mut report) {
                        if !self.options.continue_on_error {
                            return Err(err);
                        }
                        error!("Abandoning '{}': {err}", merge.artist);
                        self.notifier.notify(&Notification::GroupFailed {
                            artist: merge.artist.clone(),
                            reason: err.to_string(),
                        });
                        report.failures.push(GroupFailure {
                            artist: merge.artist.clone(),
                            error: err,
                        });
                    }
                }
            }
        }

        Ok(report)
    }

    fn merge_group(&mut self, merge: &MergePlan, report: &mut MergeReport) -> Result<()> {
        debug!(
            "Merging {} album(s) into '{}' ({})",
            merge.moves.len(),
            merge.artist_path.display(),
            if merge.has_artist_folder {
                "artist folder listed"
            } else {
                "no artist folder listed"
            }
        );

        for album in &merge.moves {
            if !self.artist_folder_exists(merge) {
                self.notifier.notify(&Notification::CreatingArtistFolder {
                    path: merge.artist_path.clone(),
                });
                self.create_artist_folder(merge)?;
                report.created.push(merge.artist_path.clone());
            }

            self.notifier.notify(&Notification::Moving {
                source: album.source.clone(),
                dest: album.dest.clone(),
            });
            self.move_album(album)?;
            report.moved.push(album.clone());
        }

        Ok(())
    }

    fn artist_folder_exists(&self, merge: &MergePlan) -> bool {
        self.store.exists(&merge.artist_path)
            || (self.options.simulate && self.simulated_dirs.contains(&merge.artist_path))
    }

    fn create_artist_folder(&mut self, merge: &MergePlan) -> Result<()> {
        if self.options.simulate {
            self.simulated_dirs.insert(merge.artist_path.clone());
            return Ok(());
        }

        self.store
            .create_directory(&merge.artist_path)
            .map_err(|source| MergeError::CreateFailed {
                path: merge.artist_path.clone(),
                source,
            })
    }

    fn move_album(&self, album: &AlbumMove) -> Result<()> {
        if self.options.simulate {
            return Ok(());
        }

        self.store
            .move_directory(&album.source, &album.dest)
            .map_err(|source| MergeError::MoveFailed {
                source_path: album.source.clone(),
                dest: album.dest.clone(),
                source,
            })
    }
}
