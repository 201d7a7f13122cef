// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! gitday-git: repository scanning and commit collection for gitday
//!
//! This library crate finds git repositories under a set of scan roots and
//! gathers the commits each one recorded inside a time window, by running
//! `git log` once per repository and parsing its output.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use gitday_git::{LogQuery, collect, scan_repos};
//!
//! # async fn run() {
//! let repos = scan_repos(&["~/work"], &["node_modules"]);
//! let now = Local::now();
//! let query = LogQuery::new(now - Duration::days(1), now);
//!
//! for result in collect(&repos, &query).await {
//!     println!("{} - {} commits", result.name, result.commit_count());
//! }
//! # }
//! ```

#![warn(missing_docs)]

pub mod collector;
pub mod commit;
pub mod error;
pub mod parser;
pub mod scanner;

pub use collector::{LogQuery, collect, repo_log};
pub use commit::{Commit, RepoResult};
pub use error::GitError;
pub use parser::{parse_file_count, parse_log};
pub use scanner::scan_repos;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::collector::{LogQuery, collect};
    pub use crate::commit::{Commit, RepoResult};
    pub use crate::error::GitError;
    pub use crate::scanner::scan_repos;
}
