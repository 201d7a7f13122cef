// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! Repository discovery
//!
//! Each scan root is either a repository itself or a directory whose
//! immediate children are checked for a `.git` directory. There is no deeper
//! recursion.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Name of the metadata directory that marks a repository
const GIT_DIR: &str = ".git";

/// Find repositories under the given roots
///
/// Missing or unreadable roots are skipped. Results are absolute paths,
/// de-duplicated across roots in first-seen order.
#[must_use]
pub fn scan_repos<R, E>(roots: &[R], exclude: &[E]) -> Vec<PathBuf>
where
    R: AsRef<str>,
    E: AsRef<str>,
{
    let mut repos = Vec::new();
    let mut seen = HashSet::new();
    let mut record = |path: PathBuf| {
        if seen.insert(path.clone()) {
            repos.push(path);
        }
    };

    for root in roots {
        let expanded = expand_home(root.as_ref());

        if is_git_repo(&expanded) {
            record(absolute(&expanded));
            continue;
        }

        let entries = match fs::read_dir(&expanded) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(root = %expanded.display(), error = %err, "skipping unreadable scan root");
                continue;
            }
        };

        for entry in entries.flatten() {
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            let name = entry.file_name();
            if should_exclude(&name.to_string_lossy(), exclude) {
                continue;
            }

            let candidate = absolute(&entry.path());
            if is_git_repo(&candidate) {
                record(candidate);
            }
        }
    }

    debug!(count = repos.len(), "repository scan complete");
    repos
}

/// Whether `path` contains a `.git` directory
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).is_dir()
}

/// Dot-prefixed names and exact exclude matches are skipped
#[must_use]
pub fn should_exclude<E: AsRef<str>>(name: &str, exclude: &[E]) -> bool {
    name.starts_with('.') || exclude.iter().any(|e| e.as_ref() == name)
}

/// Expand a leading `~` to the user's home directory
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Absolute form of `path` with `.` and `..` resolved lexically
fn absolute(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                let at_root = matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
