//! Subcommand implementations
//!
//! Every reporting command follows the same pipeline: resolve the time
//! window, scan for repositories, collect commits concurrently, then render.
//! AI summaries are best-effort: a failure is reported and the command
//! carries on without one.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use gitday_ai::{ProviderSettings, SummaryProvider, build_prompt, new_provider};
use gitday_git::{RepoResult, collect, scan_repos};
use tracing::{debug, info};

use crate::config::{Cli, Command};
use crate::notify::{WEBHOOK_TIMEOUT, send_webhook};
use crate::output::{TerminalRenderer, to_markdown};
use crate::period::{Period, TimeWindow};
use crate::settings::{Settings, log_dir};

/// Time allowed for an AI summary
pub const SUMMARY_TIMEOUT: Duration = Duration::from_secs(30);

/// Repositories found by a scan and the commits collected from them
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Repositories the scan found, with or without commits
    pub scanned: usize,
    /// Repositories that have commits in the window
    pub results: Vec<RepoResult>,
}

/// Run the command selected on the command line
///
/// # Errors
///
/// Returns an error for unusable settings, a failed write, or a failed
/// webhook delivery. Summary failures are never errors.
pub async fn run(cli: Cli) -> Result<()> {
    let command = cli.subcommand();
    debug!(?command, "Running command");

    match command {
        Command::Init { force } => {
            let path = Settings::path_for(&cli)?;
            init(&path, force, confirm_overwrite)
        }
        Command::Today => report(&load_settings(&cli)?, Period::Today, cli.summary).await,
        Command::Week => report(&load_settings(&cli)?, Period::Week, cli.summary).await,
        Command::Export { output, period } => {
            export(&load_settings(&cli)?, period, output.as_deref()).await
        }
        Command::Log { period } => log(&load_settings(&cli)?, period).await,
        Command::Send { slack, period } => send(&load_settings(&cli)?, period, slack).await,
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::resolve(cli).context("Failed to load settings")
}

fn renderer(settings: &Settings) -> TerminalRenderer {
    TerminalRenderer::new(settings.output.color, settings.output.compact)
}

/// Scan the configured roots and collect commits inside `window`
pub async fn collect_window(settings: &Settings, window: &TimeWindow) -> Collected {
    let repos = scan_repos(settings.scan_paths.as_slice(), settings.exclude.as_slice());
    debug!(repos = repos.len(), "Scan complete");
    let results = collect(&repos, &window.query(&settings.author)).await;
    Collected {
        scanned: repos.len(),
        results,
    }
}

async fn report(settings: &Settings, period: Period, summary: bool) -> Result<()> {
    let window = TimeWindow::current(period);
    let Collected { scanned, results } = collect_window(settings, &window).await;

    if scanned == 0 {
        println!("스캔된 Git 레포가 없습니다. `gitday init`으로 scan_paths를 설정하세요.");
        return Ok(());
    }
    if results.is_empty() {
        println!(
            "📭 {} ~ {} 기간에 커밋이 없습니다.",
            window.date_label(),
            window.until.format("%Y-%m-%d %H:%M")
        );
        return Ok(());
    }

    let renderer = renderer(settings);
    renderer.print_report(&results, &window);

    if summary {
        let text = summarize(&settings.ai, &results, &window).await;
        if let Some(text) = &text {
            renderer.print_summary(text, period);
        }
        let saved = log_dir()
            .map_err(anyhow::Error::from)
            .and_then(|dir| save_log(&dir, &results, &window, text.as_deref()));
        match saved {
            Ok(path) => println!("\n✓ 저장됨: {}", path.display()),
            Err(err) => {
                debug!(error = %err, "Failed to save report log");
                eprintln!("⚠ 로그 저장 실패: {err:#}");
            }
        }
    }
    Ok(())
}

async fn export(settings: &Settings, period: Period, output: Option<&Path>) -> Result<()> {
    let window = TimeWindow::current(period);
    let results = collect_window(settings, &window).await.results;
    if results.is_empty() {
        println!("내보낼 커밋이 없습니다.");
        return Ok(());
    }

    let markdown = to_markdown(&results, &window, None);
    match output {
        None => print!("{markdown}"),
        Some(path) => {
            std::fs::write(path, markdown)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("✓ 리포트 저장됨: {}", path.display());
        }
    }
    Ok(())
}

async fn log(settings: &Settings, period: Period) -> Result<()> {
    let window = TimeWindow::current(period);
    let results = collect_window(settings, &window).await.results;
    if results.is_empty() {
        println!("저장할 커밋이 없습니다.");
        return Ok(());
    }

    let summary = summarize(&settings.ai, &results, &window).await;
    let path = save_log(&log_dir()?, &results, &window, summary.as_deref())?;

    let renderer = renderer(settings);
    renderer.print_report(&results, &window);
    if let Some(text) = &summary {
        renderer.print_summary(text, period);
    }
    println!("\n✓ 저장됨: {}", path.display());
    Ok(())
}

async fn send(settings: &Settings, period: Period, slack: bool) -> Result<()> {
    if !slack {
        bail!("No destination given (use --slack)");
    }
    let url = settings.slack_webhook()?;

    let window = TimeWindow::current(period);
    let results = collect_window(settings, &window).await.results;
    if results.is_empty() {
        println!("전송할 커밋이 없습니다.");
        return Ok(());
    }

    let markdown = to_markdown(&results, &window, None);
    send_webhook(url, &markdown, WEBHOOK_TIMEOUT)
        .await
        .context("Failed to send report to Slack")?;
    info!(repos = results.len(), "Report delivered to Slack");
    println!("✓ Slack 전송 완료!");
    Ok(())
}

/// Build a provider from `settings` and summarize; `None` on any failure
pub async fn summarize(
    settings: &ProviderSettings,
    results: &[RepoResult],
    window: &TimeWindow,
) -> Option<String> {
    match new_provider(settings) {
        Ok(provider) => summarize_with(provider.as_ref(), results, window).await,
        Err(err) => {
            debug!(error = %err, "Summary provider unavailable");
            eprintln!("⚠ AI 요약 실패: {err}");
            None
        }
    }
}

/// Summarize with an existing provider; `None` on failure
pub async fn summarize_with(
    provider: &dyn SummaryProvider,
    results: &[RepoResult],
    window: &TimeWindow,
) -> Option<String> {
    let prompt = build_prompt(results, &window.date_label());
    eprintln!("📝 AI 요약 생성 중 ({})...", provider.name());

    match provider.summarize(&prompt, SUMMARY_TIMEOUT).await {
        Ok(text) => Some(text),
        Err(err) => {
            debug!(provider = provider.name(), error = %err, "Summary failed");
            eprintln!("⚠ AI 요약 실패: {err}");
            None
        }
    }
}

/// Write the Markdown report for `window` into `dir`, returning its path
///
/// # Errors
///
/// Returns an error if `dir` cannot be created or the file cannot be written.
pub fn save_log(
    dir: &Path,
    results: &[RepoResult],
    window: &TimeWindow,
    summary: Option<&str>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(window.log_file_name());
    std::fs::write(&path, to_markdown(results, window, summary))
        .with_context(|| format!("Failed to write log {}", path.display()))?;
    debug!(path = %path.display(), "Saved report log");
    Ok(path)
}

/// Write the starter settings file to `path`
///
/// An existing file is only replaced with `force` or when `confirm` agrees.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init(path: &Path, force: bool, confirm: impl FnOnce(&Path) -> bool) -> Result<()> {
    if path.exists() && !force && !confirm(path) {
        println!("취소되었습니다.");
        return Ok(());
    }
    Settings::write_template(path)?;
    println!("✓ 설정 파일 생성됨: {}", path.display());
    println!("  scan_paths를 수정하여 스캔할 디렉토리를 지정하세요.");
    Ok(())
}

fn confirm_overwrite(path: &Path) -> bool {
    println!("⚠ 이미 설정 파일이 존재합니다: {}", path.display());
    print!("덮어쓰시겠습니까? (y/N): ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y")
}
