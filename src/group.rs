//! Grouping of classified folder names by artist

use crate::classify::{SplitName, classify};

/// All folders sharing one artist key, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistGroup {
    /// Trimmed first token shared by every member
    pub artist: String,
    /// Members in the order they were enumerated
    pub members: Vec<SplitName>,
}

impl ArtistGroup {
    /// Create an empty group for an artist
    #[must_use]
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            members: Vec::new(),
        }
    }

    /// Number of folders in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group folder names by artist key
///
/// Groups appear in first-occurrence order of their key and members keep
/// their input order, so the result is a stable partition of `names`.
/// Keys are case-sensitive.
#[must_use]
pub fn group<S: AsRef<str>>(names: &[S]) -> Vec<ArtistGroup> {
    let mut groups: Vec<ArtistGroup> = Vec::new();

    for name in names {
        let split = classify(name.as_ref());
        let key = split.artist_key();

        if let Some(existing) = groups.iter_mut().find(|g| g.artist == key) {
            existing.members.push(split);
        } else {
            let mut new_group = ArtistGroup::new(key);
            new_group.members.push(split);
            groups.push(new_group);
        }
    }

    groups
}

/// Sort names lexically, then group them
///
/// Directory enumeration order is platform dependent; sorting first makes
/// the plan reproducible and puts a bare artist folder ahead of its
/// `"Artist - Album"` siblings.
#[must_use]
pub fn group_sorted<S: AsRef<str>>(names: &[S]) -> Vec<ArtistGroup> {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    group(&sorted)
}
