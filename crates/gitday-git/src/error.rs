// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! Error types for gitday-git

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while querying a single repository
///
/// The collector absorbs these per repository; they only surface to callers
/// of [`crate::collector::repo_log`].
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` process could not be spawned or its output read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `git log` exited with a non-zero status
    #[error("git log failed in {path} ({status}): {stderr}")]
    CommandFailed {
        /// Repository the command ran in
        path: PathBuf,
        /// Exit status as reported by the process
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },
}
