//! Authentication for GitHub
//!
//! Supports environment variables and CLI-based auth (gh).

mod github;

pub use github::{GitHubAuth, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the gh CLI
    Cli,
    /// Token from environment variable
    EnvVar,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "gh CLI"),
            Self::EnvVar => write!(f, "environment"),
        }
    }
}
