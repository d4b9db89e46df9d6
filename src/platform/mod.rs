//! Platform services for the source-control host
//!
//! Provides the seam between reconciliation logic and the host's REST API.
//! Only GitHub (and GitHub Enterprise) is implemented; the trait keeps the
//! core testable with an in-process fake.

mod github;

pub use github::GitHubService;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CommitEntry, NewPullRequest, PullRequest, RepoRef};

/// Platform service trait for the remote calls reconciliation needs.
///
/// Implementations must be `Send + Sync` so one long-lived client can be
/// shared across deliveries. Failures surface unmodified; retry policy
/// belongs to whatever re-delivers the event.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List open pull requests with the given base and head branch.
    ///
    /// Order is whatever the host returns; callers that expect a singleton
    /// operate on the first entry.
    async fn list_open_prs(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<PullRequest>>;

    /// Compare two refs, returning the commits unique to `head` relative to
    /// `base`, in the host's order.
    async fn compare_commits(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<CommitEntry>>;

    /// Fetch a single pull request (for its current body).
    async fn get_pr(&self, repo: &RepoRef, number: u64) -> Result<PullRequest>;

    /// Create a pull request.
    async fn create_pr(&self, repo: &RepoRef, params: &NewPullRequest) -> Result<PullRequest>;

    /// Replace a pull request's body, leaving title, head, and base
    /// untouched.
    async fn update_pr_body(
        &self,
        repo: &RepoRef,
        number: u64,
        body: &str,
    ) -> Result<PullRequest>;
}
