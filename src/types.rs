//! Core types for release-herald

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A repository addressed by owner login and name.
///
/// Carried per call rather than bound into the client: every webhook
/// delivery names its own repository, and one long-lived client serves
/// them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Owner login (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Create a repository reference from owner and name.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::Config(format!(
                "invalid repository '{s}': expected <owner>/<name>"
            ))),
        }
    }
}

/// One commit from the compared range between the release-target and
/// integration branches.
///
/// Transient: recomputed from the host on every reconciliation, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    /// Commit SHA (hex)
    pub sha: String,
    /// Full commit message
    pub message: String,
}

/// A pull request as seen through the platform seam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description (the checklist, for a release PR)
    pub body: Option<String>,
    /// Head branch name
    pub head_ref: String,
    /// Base branch name
    pub base_ref: String,
    /// Web URL for the PR
    pub html_url: String,
}

/// Parameters for creating a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// PR title
    pub title: String,
    /// Head branch name
    pub head: String,
    /// Base branch name
    pub base: String,
    /// PR body/description
    pub body: String,
}
