//! Error types for release-herald

use thiserror::Error;

/// Errors that can occur during reconciliation or its setup.
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API call failed (octocrab transport or API error).
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// GitHub API call failed outside octocrab (raw REST, response decoding).
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// A commit message carries the merge-commit template but the captured
    /// reference is not a pull request number. Aborts the run: skipping
    /// would silently drop a checklist entry.
    #[error("commit {sha}: merge reference '#{capture}' is not a pull request number")]
    InvalidMergeCapture {
        /// Commit that carried the malformed reference.
        sha: String,
        /// The captured text that failed to parse.
        capture: String,
    },

    /// No usable GitHub credentials were found.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration file missing, unreadable, or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Event payload could not be obtained.
    #[error("event error: {0}")]
    Event(String),

    /// Filesystem error (event payload, config file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error that should not normally occur.
    #[error("{0}")]
    Internal(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
