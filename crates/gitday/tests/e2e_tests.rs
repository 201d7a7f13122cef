// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! End-to-end report tests
//!
//! Real repositories are created with git2, scanned and collected through the
//! same pipeline the commands use, then rendered. Summary providers and
//! webhooks are stood in for by wiremock.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local};
use git2::{Oid, Repository, Signature, Time};
use gitday::commands::{collect_window, save_log, summarize};
use gitday::notify::{WEBHOOK_TIMEOUT, send_webhook};
use gitday::output::{TerminalRenderer, to_markdown};
use gitday::{Period, Settings, TimeWindow};
use gitday_ai::ProviderSettings;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str, when: i64) -> Oid {
    let workdir = repo.workdir().expect("non-bare repository");
    let mut index = repo.index().expect("open index");
    for (name, content) in files {
        fs::write(workdir.join(name), content).expect("write fixture file");
        index.add_path(Path::new(name)).expect("stage file");
    }
    index.write().expect("write index");

    let tree = repo
        .find_tree(index.write_tree().expect("write tree"))
        .expect("find tree");
    let signature =
        Signature::new("wook", "wook@example.com", &Time::new(when, 0)).expect("signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("create commit")
}

struct Workspace {
    root: TempDir,
    settings: Settings,
    fix: Oid,
}

/// Scan root with one active repository, one excluded and one plain directory
fn workspace() -> Workspace {
    let tmp = TempDir::new().expect("tempdir");
    let now = Local::now().timestamp();

    let project = tmp.path().join("project");
    fs::create_dir_all(&project).expect("mkdir project");
    let repo = Repository::init(&project).expect("init project");
    let fix = commit_files(
        &repo,
        &[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")],
        "fix bug",
        now - 3600,
    );
    commit_files(&repo, &[], "add feature", now - 1800);

    let vendored = tmp.path().join("node_modules");
    fs::create_dir_all(&vendored).expect("mkdir node_modules");
    let repo = Repository::init(&vendored).expect("init node_modules");
    commit_files(&repo, &[("x.js", "x")], "vendored change", now - 600);

    fs::create_dir_all(tmp.path().join("notes")).expect("mkdir notes");

    let settings = Settings {
        scan_paths: vec![tmp.path().to_string_lossy().into_owned()],
        ..Default::default()
    };
    Workspace {
        root: tmp,
        settings,
        fix,
    }
}

/// A window around "now" that cannot miss the fixture commits
fn window() -> TimeWindow {
    let now = Local::now().fixed_offset();
    TimeWindow {
        period: Period::Today,
        since: now - Duration::days(1),
        until: now + Duration::minutes(1),
    }
}

#[tokio::test]
async fn e2e_scan_collect_and_render_markdown() {
    let ws = workspace();
    let window = window();

    let collected = collect_window(&ws.settings, &window).await;
    assert_eq!(collected.scanned, 1, "node_modules is excluded");
    assert_eq!(collected.results.len(), 1);

    let markdown = to_markdown(&collected.results, &window, None);
    assert!(markdown.contains("## project (2 commits)"));
    let short_hash = &ws.fix.to_string()[..7];
    assert!(markdown.contains(&format!("- `{short_hash}` fix bug (3 files)\n")));
    assert!(markdown.contains(" add feature\n"));
    assert!(!markdown.contains("vendored"));
    assert!(markdown.contains("📊 **총 2 commits | 1개 프로젝트 | 3 files changed**"));

    // newest commit first
    let feature = markdown.find("add feature").expect("feature line");
    let fix = markdown.find("fix bug").expect("fix line");
    assert!(feature < fix);
}

#[tokio::test]
async fn e2e_terminal_report() {
    let ws = workspace();
    let window = window();
    let results = collect_window(&ws.settings, &window).await.results;

    let out = TerminalRenderer::new(false, true).render(&results, &window);
    assert!(out.contains("project (2 commits) ━"));
    assert!(out.contains("총 2 commits | 1개 프로젝트 | 3 files changed"));
    assert!(!out.contains('\u{1b}'));
}

#[tokio::test]
async fn e2e_author_filter_excludes_everything() {
    let Workspace {
        root: _root,
        mut settings,
        ..
    } = workspace();
    settings.author = "somebody-else".to_string();
    let collected = collect_window(&settings, &window()).await;
    assert_eq!(collected.scanned, 1);
    assert!(collected.results.is_empty());
}

#[tokio::test]
async fn e2e_summary_and_log_file() {
    let ws = workspace();
    let window = window();
    let results = collect_window(&ws.settings, &window).await.results;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("fix bug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "버그 수정과 기능 추가"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = ProviderSettings {
        provider: "ollama".to_string(),
        ollama_url: server.uri(),
        ..Default::default()
    };
    let summary = summarize(&provider, &results, &window).await;
    assert_eq!(summary.as_deref(), Some("버그 수정과 기능 추가"));

    let log_dir: PathBuf = ws.root.path().join("logs");
    let saved = save_log(&log_dir, &results, &window, summary.as_deref()).expect("save log");
    assert_eq!(saved, log_dir.join(window.log_file_name()));

    let written = fs::read_to_string(saved).expect("read log");
    assert!(written.contains("## project (2 commits)"));
    assert!(written.ends_with("## 📝 요약\n\n버그 수정과 기능 추가\n"));
}

#[tokio::test]
async fn e2e_summary_failure_still_produces_report() {
    let ws = workspace();
    let window = window();
    let results = collect_window(&ws.settings, &window).await.results;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let provider = ProviderSettings {
        provider: "ollama".to_string(),
        ollama_url: server.uri(),
        ..Default::default()
    };
    let summary = summarize(&provider, &results, &window).await;
    assert_eq!(summary, None);

    let markdown = to_markdown(&results, &window, summary.as_deref());
    assert!(!markdown.contains("요약"));
    assert!(markdown.contains("3 files changed"));
}

#[tokio::test]
async fn e2e_send_markdown_to_webhook() {
    let ws = workspace();
    let window = window();
    let results = collect_window(&ws.settings, &window).await.results;
    let markdown = to_markdown(&results, &window, None);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_string_contains("project (2 commits)"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    send_webhook(&format!("{}/hook", server.uri()), &markdown, WEBHOOK_TIMEOUT)
        .await
        .expect("delivered");
}
