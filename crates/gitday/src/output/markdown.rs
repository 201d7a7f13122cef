//! Markdown report rendering

use std::fmt::Write as _;

use gitday_git::RepoResult;

use super::{ReportTotals, date_heading, files_suffix};
use crate::period::TimeWindow;

/// Render `results` as a Markdown report
///
/// The summary section is appended only when `summary` has non-whitespace
/// content. Its text is written as given, without trimming.
#[must_use]
pub fn to_markdown(results: &[RepoResult], window: &TimeWindow, summary: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", date_heading(window));

    for result in results {
        let _ = writeln!(out, "## {} ({} commits)\n", result.name, result.commit_count());
        for commit in &result.commits {
            let _ = writeln!(
                out,
                "- `{}` {}{}",
                commit.hash,
                commit.message,
                files_suffix(commit.files)
            );
        }
        out.push('\n');
    }

    let totals = ReportTotals::from_results(results);
    let _ = writeln!(out, "---\n\n📊 **{}**", totals.line());

    if let Some(text) = summary.filter(|s| !s.trim().is_empty()) {
        let _ = write!(out, "\n## 📝 요약\n\n{text}\n");
    }

    out
}
