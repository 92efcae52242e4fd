// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The report pipeline: extract, classify, render
//!
//! A single synchronous pass with no state between stages. Each stage
//! consumes the previous stage's output; a failure at any stage aborts the
//! run before the output file is touched.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Duration, Local};
use tracing::debug;

use semainier_git::GitRepo;
use semainier_report::{build_summary, render_report};

use crate::config::Config;

/// Run the full report pipeline and return the written report path
///
/// # Errors
///
/// Fails when the configuration is invalid, the repository cannot be
/// opened or walked, or the report cannot be rendered or written.
pub fn run(config: &Config) -> anyhow::Result<PathBuf> {
    config.validate()?;

    let repo_path = config.repo_path();
    let window_start = Local::now() - Duration::days(i64::from(config.days));

    let repo = GitRepo::open(&repo_path)
        .with_context(|| format!("Failed to open repository at {}", repo_path.display()))?;
    let commits = repo
        .commits_since(window_start)
        .context("Failed to walk commit history")?;
    debug!(count = commits.len(), "Commits in report window");

    let summary = build_summary(&commits);

    let output = config.output_path();
    render_report(&commits, &summary, &output, config.fonts.as_deref())
        .with_context(|| format!("Failed to render report to {}", output.display()))?;

    Ok(output)
}
