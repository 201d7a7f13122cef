//! Report rendering
//!
//! Two renderers share the same layout: a dated header, one section per
//! repository and a totals footer. [`markdown`] produces text for files and
//! webhooks; [`terminal`] produces styled text for a TTY.

pub mod markdown;
pub mod terminal;

use gitday_git::RepoResult;

use crate::period::TimeWindow;

pub use markdown::to_markdown;
pub use terminal::TerminalRenderer;

/// Aggregate counts shown in a report footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    /// Commits across every repository
    pub commits: usize,
    /// Repositories with at least one commit
    pub repos: usize,
    /// Files changed across every commit
    pub files: usize,
}

impl ReportTotals {
    /// Sum counts over `results`
    #[must_use]
    pub fn from_results(results: &[RepoResult]) -> Self {
        results.iter().fold(Self::default(), |acc, result| Self {
            commits: acc.commits + result.commit_count(),
            repos: acc.repos + 1,
            files: acc.files + result.files_changed(),
        })
    }

    /// `총 C commits | R개 프로젝트 | F files changed`
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "총 {} commits | {}개 프로젝트 | {} files changed",
            self.commits, self.repos, self.files
        )
    }
}

/// `📅 YYYY-MM-DD (요일)` for the start of `window`
#[must_use]
pub fn date_heading(window: &TimeWindow) -> String {
    format!("📅 {} ({})", window.date_label(), window.weekday_label())
}

/// ` (N files)`, or nothing when no files were counted
pub(crate) fn files_suffix(files: usize) -> String {
    if files > 0 {
        format!(" ({files} files)")
    } else {
        String::new()
    }
}
