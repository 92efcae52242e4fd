// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end pipeline tests for semainier
//!
//! These tests build synthetic repositories, run the full
//! extract-classify-render pipeline and inspect the written report file.
//! PDF-producing tests skip when no font family is installed.

use std::path::{Path, PathBuf};

use chrono::{Duration, Local};
use git2::{Repository, Signature, Time};
use semainier::config::Config;
use semainier::pipeline;
use tempfile::TempDir;

/// Create a commit with a fixed committer time, chained to the current HEAD
fn commit_at(repo: &Repository, message: &str, seconds: i64) {
    let signature =
        Signature::new("Test Author", "test@example.com", &Time::new(seconds, 0))
            .expect("signature");
    let tree_id = {
        let mut index = repo.index().expect("index");
        index.write_tree().expect("write tree")
    };
    let tree = repo.find_tree(tree_id).expect("find tree");
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
    .expect("commit");
}

fn config_for(repo: &Path, output: PathBuf) -> Config {
    Config {
        repo: Some(repo.to_path_buf()),
        output: Some(output),
        days: 7,
        fonts: None,
        verbose: false,
        quiet: false,
    }
}

/// True when no usable font family is installed on this host
fn fonts_unavailable() -> bool {
    if semainier_report::fonts::load_font_family(None).is_err() {
        eprintln!("Skipping: no LiberationSans family installed");
        return true;
    }
    false
}

#[test]
fn test_pipeline_generates_report() {
    if fonts_unavailable() {
        return;
    }

    let repo_dir = TempDir::new().expect("tempdir");
    let repo = Repository::init(repo_dir.path()).expect("init repo");
    let now = Local::now();
    commit_at(
        &repo,
        "Add user profile page\n- responsive layout\n- API integration",
        (now - Duration::days(2)).timestamp(),
    );
    commit_at(
        &repo,
        "Fix responsive styling",
        (now - Duration::hours(4)).timestamp(),
    );

    let out_dir = TempDir::new().expect("tempdir");
    let output = out_dir.path().join("commits_report.pdf");
    let config = config_for(repo_dir.path(), output.clone());

    let written = pipeline::run(&config).expect("pipeline run");

    assert_eq!(written, output);
    let bytes = std::fs::read(&output).expect("read report");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pipeline_with_empty_window() {
    if fonts_unavailable() {
        return;
    }

    let repo_dir = TempDir::new().expect("tempdir");
    let repo = Repository::init(repo_dir.path()).expect("init repo");
    let now = Local::now();
    commit_at(
        &repo,
        "Work from last month",
        (now - Duration::days(30)).timestamp(),
    );

    let out_dir = TempDir::new().expect("tempdir");
    let output = out_dir.path().join("commits_report.pdf");
    let config = config_for(repo_dir.path(), output.clone());

    pipeline::run(&config).expect("pipeline run");

    // Header-only table and intro-only summary still produce a document
    let bytes = std::fs::read(&output).expect("read report");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pipeline_invalid_repository_aborts_before_rendering() {
    let out_dir = TempDir::new().expect("tempdir");
    let output = out_dir.path().join("commits_report.pdf");
    let config = config_for(Path::new("/nonexistent/repository"), output.clone());

    let result = pipeline::run(&config);

    assert!(result.is_err());
    assert!(
        !output.exists(),
        "No output file may appear when extraction fails"
    );
}

#[test]
fn test_pipeline_plain_directory_is_not_a_repository() {
    let not_a_repo = TempDir::new().expect("tempdir");
    let out_dir = TempDir::new().expect("tempdir");
    let output = out_dir.path().join("commits_report.pdf");
    let config = config_for(not_a_repo.path(), output.clone());

    let result = pipeline::run(&config);

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_pipeline_rejects_invalid_config() {
    let repo_dir = TempDir::new().expect("tempdir");
    Repository::init(repo_dir.path()).expect("init repo");

    let out_dir = TempDir::new().expect("tempdir");
    let mut config = config_for(repo_dir.path(), out_dir.path().join("report.pdf"));
    config.days = 0;

    assert!(pipeline::run(&config).is_err());
}
