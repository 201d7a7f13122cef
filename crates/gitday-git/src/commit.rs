//! Commit and per-repository result types

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Number of hash characters kept for display
pub const SHORT_HASH_LEN: usize = 7;

/// A single commit parsed from `git log` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Abbreviated commit hash (at most 7 characters)
    pub hash: String,
    /// Commit subject line
    pub message: String,
    /// Author display name
    pub author: String,
    /// Author timestamp with its original offset
    pub timestamp: DateTime<FixedOffset>,
    /// Number of files changed, 0 when git reported no stats
    pub files: usize,
}

impl Commit {
    /// Truncate a full hash to [`SHORT_HASH_LEN`] characters
    #[must_use]
    pub fn short_hash(hash: &str) -> &str {
        hash.char_indices()
            .nth(SHORT_HASH_LEN)
            .map_or(hash, |(idx, _)| &hash[..idx])
    }
}

/// Commits collected from one repository
///
/// Only repositories with at least one commit in the window produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoResult {
    /// Directory base name of the repository
    pub name: String,
    /// Absolute path of the repository
    pub path: PathBuf,
    /// Commits in `git log` order (newest first)
    pub commits: Vec<Commit>,
}

impl RepoResult {
    /// Build a result, naming it after the final path component
    #[must_use]
    pub fn new(path: PathBuf, commits: Vec<Commit>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            commits,
        }
    }

    /// Number of commits in this repository
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Sum of changed-file counts over all commits
    #[must_use]
    pub fn files_changed(&self) -> usize {
        self.commits.iter().map(|c| c.files).sum()
    }
}
