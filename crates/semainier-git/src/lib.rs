// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! semainier-git: commit history extraction for semainier
//!
//! This library crate wraps `git2` to walk a repository's history
//! newest-first and extract the commits that fall inside the report window.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use semainier_git::GitRepo;
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let since = Local::now() - Duration::days(7);
//! let commits = repo.commits_since(since).expect("walk commits");
//!
//! for c in commits {
//!     println!("{} - {}", c.short_sha(), c.subject());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod repo;

pub use commit::Commit;
pub use error::GitError;
pub use repo::GitRepo;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::repo::GitRepo;
}
