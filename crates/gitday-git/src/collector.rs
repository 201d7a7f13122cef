// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! Concurrent commit collection across repositories
//!
//! One task runs `git log` per repository. Failures stay local to their
//! repository: the caller only ever sees the repositories that produced
//! commits.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, TimeZone};
use tokio::process::Command;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::commit::{Commit, RepoResult};
use crate::error::GitError;
use crate::parser::{LOG_FORMAT, parse_log};

/// Time range and author filter for a log query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower bound
    pub since: DateTime<FixedOffset>,
    /// Upper bound, usually "now"
    pub until: DateTime<FixedOffset>,
    /// Restrict to commits whose author matches this pattern
    pub author: Option<String>,
}

impl LogQuery {
    /// Query every author between `since` and `until`
    #[must_use]
    pub fn new<Tz: TimeZone>(since: DateTime<Tz>, until: DateTime<Tz>) -> Self {
        Self {
            since: since.fixed_offset(),
            until: until.fixed_offset(),
            author: None,
        }
    }

    /// Filter by author; an empty string clears the filter
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = (!author.trim().is_empty()).then_some(author);
        self
    }

    /// Arguments passed to `git`
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--all".to_string(),
            format!("--format={LOG_FORMAT}"),
            format!("--since={}", self.since.to_rfc3339()),
            format!("--until={}", self.until.to_rfc3339()),
            "--shortstat".to_string(),
        ];
        if let Some(author) = &self.author {
            args.push(format!("--author={author}"));
        }
        args
    }
}

/// Run `git log` in one repository and parse its commits
///
/// # Errors
///
/// Returns `GitError::Io` if git cannot be started and
/// `GitError::CommandFailed` if it exits unsuccessfully.
pub async fn repo_log(path: &Path, query: &LogQuery) -> Result<Vec<Commit>, GitError> {
    let output = Command::new("git")
        .args(query.git_args())
        .current_dir(path)
        .kill_on_drop(true)
        .output()
        .await?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            path: path.to_path_buf(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(parse_log(&String::from_utf8_lossy(&output.stdout)))
}

/// Collect commits from every repository concurrently
///
/// Never fails. Repositories whose query errors or matches nothing are left
/// out. Results are ordered by repository name, then path.
pub async fn collect(repos: &[PathBuf], query: &LogQuery) -> Vec<RepoResult> {
    let mut tasks = JoinSet::new();

    for repo in repos {
        let repo = repo.clone();
        let query = query.clone();
        tasks.spawn(async move {
            match repo_log(&repo, &query).await {
                Ok(commits) if commits.is_empty() => {
                    debug!(repo = %repo.display(), "no commits in window");
                    None
                }
                Ok(commits) => Some(RepoResult::new(repo, commits)),
                Err(err) => {
                    debug!(repo = %repo.display(), error = %err, "skipping repository");
                    None
                }
            }
        });
    }

    let mut results = Vec::with_capacity(repos.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {}
            Err(err) => debug!(error = %err, "collection task did not complete"),
        }
    }

    results.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    info!(
        repos = repos.len(),
        active = results.len(),
        "commit collection complete"
    );
    results
}
