// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository access and history walking
//!
//! This module walks a repository's commit history with the `git2` crate,
//! newest first, and keeps the commits whose commit time falls inside the
//! report window.

use crate::commit::Commit;
use crate::error::GitError;
use chrono::{DateTime, Local, TimeZone};
use git2::{Repository, Sort};
use std::path::Path;
use tracing::{debug, info};

/// A git repository wrapper for extracting report commits
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "Opened repository");
        Ok(Self { repo })
    }

    /// Walk commits strictly newer than `since`, newest first
    ///
    /// History is walked from HEAD in commit-time order, so the walk stops
    /// at the first commit at or before `since`. The returned commits keep
    /// the walk order; messages are trimmed at the boundaries only.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the repository history cannot be walked.
    pub fn commits_since(&self, since: DateTime<Local>) -> Result<Vec<Commit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;

            let time = git_commit.time();
            let committed_at = Local
                .timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Local::now);

            // Time-sorted walk: once a commit falls outside the window,
            // everything after it does too.
            if committed_at <= since {
                break;
            }

            commits.push(Self::extract_commit(&git_commit, committed_at));
        }

        info!(count = commits.len(), since = %since, "Extracted report commits");
        Ok(commits)
    }

    /// Extract commit metadata from a git2 commit
    fn extract_commit(git_commit: &git2::Commit<'_>, committed_at: DateTime<Local>) -> Commit {
        Commit {
            sha: git_commit.id().to_string(),
            message: git_commit.message().unwrap_or("").trim().to_string(),
            committed_at,
        }
    }
}
