//! Per-artist merge decisions
//!
//! Planning is pure: it looks only at the grouped folder names and the root
//! path. Whether the artist folder has to be created is decided later, at
//! execution time, because earlier moves can change the answer.

use crate::classify::SplitName;
use crate::group::ArtistGroup;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One album folder to move under its artist folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumMove {
    /// Folder name, rebuilt from its tokens
    pub folder: String,
    /// `root/folder`
    pub source: PathBuf,
    /// `root/artist/folder`
    pub dest: PathBuf,
}

/// Albums to gather under one artist folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    /// Artist key shared by the group
    pub artist: String,
    /// `root/artist`
    pub artist_path: PathBuf,
    /// Whether the group contained the artist folder itself
    pub has_artist_folder: bool,
    /// Album folders in group order
    pub moves: Vec<AlbumMove>,
}

/// What to do with one artist group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupPlan {
    /// An artist folder with no albums beside it, nothing to do
    Skip { artist: String },
    /// Move the group's album folders into the artist folder
    Merge(MergePlan),
    /// Folders whose artist name is blank, left where they are
    NoArtist { folders: Vec<String> },
}

impl GroupPlan {
    /// Artist key of the group
    #[must_use]
    pub fn artist(&self) -> &str {
        match self {
            Self::Skip { artist } => artist,
            Self::Merge(plan) => &plan.artist,
            Self::NoArtist { .. } => "",
        }
    }

    /// Number of album moves planned
    #[must_use]
    pub fn move_count(&self) -> usize {
        match self {
            Self::Skip { .. } | Self::NoArtist { .. } => 0,
            Self::Merge(plan) => plan.moves.len(),
        }
    }
}

/// Decide what to do with a single artist group
///
/// Single-token members name the artist folder itself: they stay where they
/// are and are never moved. With sorted input the artist folder is always the
/// group's first member. A group left with nothing to move is skipped, and a
/// group whose artist name is blank is never touched.
#[must_use]
pub fn plan_group(group: &ArtistGroup, root: &Path) -> GroupPlan {
    if group.artist.is_empty() {
        warn!(
            "Ignoring {} folder(s) with no artist name before the delimiter",
            group.members.len()
        );
        return GroupPlan::NoArtist {
            folders: group.members.iter().map(SplitName::rejoin).collect(),
        };
    }

    let (artist_folders, albums): (Vec<&SplitName>, Vec<&SplitName>) =
        group.members.iter().partition(|m| m.is_artist_folder());

    // "Beatles - " collapses to "Beatles" and cannot be told apart from the artist folder
    for extra in artist_folders.iter().skip(1) {
        warn!(
            "Leaving '{}' in place, it resolves to the artist folder '{}'",
            extra.first(),
            group.artist
        );
    }

    if albums.is_empty() {
        return GroupPlan::Skip {
            artist: group.artist.clone(),
        };
    }

    let artist_path = root.join(&group.artist);
    let moves = albums
        .into_iter()
        .map(|member| {
            let folder = member.rejoin();
            AlbumMove {
                source: root.join(&folder),
                dest: artist_path.join(&folder),
                folder,
            }
        })
        .collect();

    GroupPlan::Merge(MergePlan {
        artist: group.artist.clone(),
        artist_path,
        has_artist_folder: !artist_folders.is_empty(),
        moves,
    })
}

/// Plan every group, keeping group order
#[must_use]
pub fn plan(groups: &[ArtistGroup], root: &Path) -> Vec<GroupPlan> {
    groups.iter().map(|g| plan_group(g, root)).collect()
}
