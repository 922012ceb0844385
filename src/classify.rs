//! Folder name classification
//!
//! Top-level folder names follow the `"Artist - Album"` convention. A name is
//! split on every occurrence of [`DELIMITER`] into a [`SplitName`]; a single
//! token means the folder is an artist folder, more than one token means it is
//! an album folder belonging to the artist named by the first token.
//!
//! # Limitations
//!
//! A name that legitimately contains `" - "` inside the album title
//! (`"Artist - Album - Part 2"`) cannot be told apart from a three-token split.
//! Only the first token is ever interpreted, so such folders are still grouped
//! under the right artist and moved with their full name.

use std::fmt;

/// Separator between artist and album in a folder name
pub const DELIMITER: &str = " - ";

/// A folder name split on [`DELIMITER`], with empty tokens discarded
///
/// Always holds at least one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitName {
    tokens: Vec<String>,
}

impl SplitName {
    /// All tokens in their original order
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`, a split name has at least one token
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token, untrimmed
    #[must_use]
    pub fn first(&self) -> &str {
        &self.tokens[0]
    }

    /// Whether this names an artist folder (no delimiter)
    #[must_use]
    pub fn is_artist_folder(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Grouping key: first token with surrounding whitespace trimmed
    #[must_use]
    pub fn artist_key(&self) -> &str {
        self.first().trim()
    }

    /// Rebuild the folder name by joining the tokens with [`DELIMITER`]
    ///
    /// Reproduces the original name unless it contained empty segments
    /// (leading, trailing or doubled delimiters), which collapse.
    #[must_use]
    pub fn rejoin(&self) -> String {
        self.tokens.join(DELIMITER)
    }
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rejoin())
    }
}

/// Split a folder name into its tokens
///
/// Never fails. A name without the delimiter yields a single token equal to
/// the whole name. A name consisting only of delimiters (or the empty string)
/// keeps the whole name as its single token so the result is never empty.
///
/// # Examples
/// ```
/// use album_merge::classify::classify;
///
/// let split = classify("Pink Floyd - The Wall");
/// assert_eq!(split.tokens(), ["Pink Floyd", "The Wall"]);
/// assert_eq!(split.artist_key(), "Pink Floyd");
///
/// assert!(classify("Radiohead").is_artist_folder());
/// ```
#[must_use]
pub fn classify(name: &str) -> SplitName {
    let tokens: Vec<String> = name
        .split(DELIMITER)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return SplitName {
            tokens: vec![name.to_string()],
        };
    }

    SplitName { tokens }
}

/// Grouping key of a raw folder name
#[must_use]
pub fn artist_key(name: &str) -> String {
    classify(name).artist_key().to_string()
}
