//! Git commit types and operations

use chrono::{DateTime, Local};

/// A commit extracted from the report window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Commit message, trimmed at the boundaries only
    pub message: String,
    /// Commit timestamp, local wall-clock time
    pub committed_at: DateTime<Local>,
}

impl Commit {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Format the commit timestamp for the report's date column
    #[must_use]
    pub fn date_label(&self) -> String {
        self.committed_at.format("%Y-%m-%d %H:%M").to_string()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate valid 40-character hex SHA strings
    fn sha_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9a-f]{40}")
            .expect("valid regex")
            .prop_map(|s| s.to_lowercase())
    }

    /// Strategy to generate arbitrary Commit values
    fn commit_strategy() -> impl Strategy<Value = Commit> {
        (
            sha_strategy(),
            ".*",                   // message
            0i64..2_000_000_000i64, // timestamp as unix seconds
        )
            .prop_map(|(sha, message, ts)| {
                let committed_at = DateTime::from_timestamp(ts, 0)
                    .map(|t| t.with_timezone(&Local))
                    .unwrap_or_else(Local::now);
                Commit {
                    sha,
                    message,
                    committed_at,
                }
            })
    }

    proptest! {
        /// Property: Any generated Commit should have a valid SHA
        #[test]
        fn prop_commit_sha_is_valid(commit in commit_strategy()) {
            prop_assert!(
                Commit::is_valid_sha(&commit.sha),
                "Generated SHA should be valid: {}",
                commit.sha
            );
        }

        /// Property: short_sha returns at most 7 characters
        #[test]
        fn prop_short_sha_length(commit in commit_strategy()) {
            let short = commit.short_sha();
            prop_assert!(short.len() <= 7);
            prop_assert!(short.len() >= 1);
        }

        /// Property: subject is always a prefix of message
        #[test]
        fn prop_subject_is_prefix_of_message(commit in commit_strategy()) {
            let subject = commit.subject();
            prop_assert!(
                commit.message.starts_with(subject),
                "Subject '{}' should be prefix of message '{}'",
                subject,
                commit.message
            );
        }

        /// Property: date_label always has minute precision, no seconds
        #[test]
        fn prop_date_label_format(commit in commit_strategy()) {
            let label = commit.date_label();
            prop_assert_eq!(label.len(), "YYYY-MM-DD HH:MM".len());
            prop_assert_eq!(&label[4..5], "-");
            prop_assert_eq!(&label[10..11], " ");
            prop_assert_eq!(&label[13..14], ":");
        }

        /// Property: is_valid_sha accepts only 40-char hex
        #[test]
        fn prop_valid_sha_format(sha in sha_strategy()) {
            prop_assert!(Commit::is_valid_sha(&sha));
            prop_assert_eq!(sha.len(), 40);
            prop_assert!(sha.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
