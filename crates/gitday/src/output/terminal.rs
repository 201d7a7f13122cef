//! Styled terminal rendering

use std::fmt::Write as _;

use gitday_git::RepoResult;
use owo_colors::{OwoColorize, Style};

use super::{ReportTotals, date_heading, files_suffix};
use crate::period::{Period, TimeWindow};

/// Commits shown per repository in compact mode
pub const COMPACT_LIMIT: usize = 3;

/// Column the repository header rule extends to
const HEADER_WIDTH: usize = 50;

/// Shortest rule drawn after a long repository header
const MIN_RULE: usize = 3;

/// Renders reports for a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRenderer {
    /// Emit ANSI styling
    pub color: bool,
    /// Show at most [`COMPACT_LIMIT`] commits per repository
    pub compact: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            color: true,
            compact: false,
        }
    }
}

impl TerminalRenderer {
    /// Create a renderer
    #[must_use]
    pub fn new(color: bool, compact: bool) -> Self {
        Self { color, compact }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render the report body
    #[must_use]
    pub fn render(&self, results: &[RepoResult], window: &TimeWindow) -> String {
        let mut out = String::new();
        let repo_style = Style::new().bold().bright_yellow();
        let dim = Style::new().bright_black();

        let _ = writeln!(
            out,
            "{}\n",
            self.paint(&date_heading(window), Style::new().bold().bright_blue())
        );

        for result in results {
            let mut header = format!("━━ {} ({} commits) ", result.name, result.commit_count());
            let width = HEADER_WIDTH
                .saturating_sub(header.chars().count())
                .max(MIN_RULE);
            header.push_str(&"━".repeat(width));
            let _ = writeln!(out, "{}", self.paint(&header, repo_style));

            let shown = if self.compact {
                COMPACT_LIMIT.min(result.commits.len())
            } else {
                result.commits.len()
            };
            for commit in &result.commits[..shown] {
                let _ = writeln!(
                    out,
                    "  {} {}{}",
                    self.paint(&commit.hash, Style::new().yellow()),
                    self.paint(&commit.message, Style::new().bright_white()),
                    self.paint(&files_suffix(commit.files), dim)
                );
            }
            if shown < result.commits.len() {
                let more = format!("  ... +{} more", result.commits.len() - shown);
                let _ = writeln!(out, "{}", self.paint(&more, dim));
            }
            out.push('\n');
        }

        let totals = ReportTotals::from_results(results);
        let footer = format!("📊 {}", totals.line());
        let _ = writeln!(out, "{}", self.paint(&footer, dim));
        out
    }

    /// Render an AI summary block, with the text as given
    #[must_use]
    pub fn render_summary(&self, text: &str, period: Period) -> String {
        let title = match period {
            Period::Today => "📝 오늘의 요약",
            Period::Week => "📝 이번 주 요약",
        };
        format!(
            "\n{}\n{}\n",
            self.paint(title, Style::new().bold().bright_magenta()),
            self.paint(text, Style::new().bright_cyan())
        )
    }

    /// Print the report body to stdout
    pub fn print_report(&self, results: &[RepoResult], window: &TimeWindow) {
        print!("{}", self.render(results, window));
    }

    /// Print an AI summary block to stdout
    pub fn print_summary(&self, text: &str, period: Period) {
        print!("{}", self.render_summary(text, period));
    }
}
