// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! `git log` output parsing
//!
//! The collector asks git for one header line per commit, with fields joined
//! by [`SEPARATOR`], followed by the `--shortstat` line when the commit
//! touched files:
//!
//! ```text
//! abc1234567890§§fix bug§§dev§§2026-02-26T15:00:00+09:00
//!
//!  3 files changed, 100 insertions(+), 20 deletions(-)
//! ```
//!
//! A subject that itself contains the separator corrupts its record. The
//! separator is not escaped.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::trace;

use crate::commit::Commit;

/// Field separator placed between header fields
pub const SEPARATOR: &str = "§§";

/// `--format` argument producing `hash§§subject§§author§§iso-date`
pub const LOG_FORMAT: &str = "%H§§%s§§%an§§%aI";

/// Parse the combined header and shortstat output of `git log`
///
/// Malformed header lines are skipped. A commit without a stats line keeps a
/// file count of 0. Empty input yields an empty vector.
#[must_use]
pub fn parse_log(raw: &str) -> Vec<Commit> {
    let mut commits: Vec<Commit> = Vec::new();
    // Whether the last pushed commit may still take a stats line
    let mut open = false;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line.contains(SEPARATOR) {
            match parse_header(line) {
                Some(commit) => {
                    commits.push(commit);
                    open = true;
                }
                None => trace!(line, "skipping malformed log header"),
            }
            continue;
        }

        if open && line.contains("file") {
            if let Some(last) = commits.last_mut() {
                last.files = parse_file_count(line);
            }
            open = false;
        }
    }

    commits
}

/// Parse a `hash§§subject§§author§§date` header line
fn parse_header(line: &str) -> Option<Commit> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < 4 {
        return None;
    }

    let timestamp =
        DateTime::parse_from_rfc3339(fields[3]).unwrap_or_else(|_| fallback_timestamp());

    Some(Commit {
        hash: Commit::short_hash(fields[0]).to_string(),
        message: fields[1].to_string(),
        author: fields[2].to_string(),
        timestamp,
        files: 0,
    })
}

/// Extract the leading file count from a shortstat line
///
/// `" 3 files changed, 45 insertions(+)"` yields 3; anything unparseable
/// yields 0.
#[must_use]
pub fn parse_file_count(stat: &str) -> usize {
    stat.split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Timestamp assigned when a header carries an unparseable date
#[must_use]
pub fn fallback_timestamp() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}
