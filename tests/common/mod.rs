//! Shared fixtures for release-herald tests

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{CreatePrCall, MockPlatformService, RangeCall, UpdateBodyCall};

use release_herald::types::{CommitEntry, PullRequest, RepoRef};

/// The repository every test reconciles against.
pub fn test_repo() -> RepoRef {
    RepoRef::new("acme", "widget")
}

/// A merge commit for feature PR `number`.
pub fn merge_commit(sha: &str, number: u64) -> CommitEntry {
    CommitEntry {
        sha: sha.to_string(),
        message: format!("Merge pull request #{number} from acme/feat-{number}"),
    }
}

/// A commit that is not a feature merge.
pub fn plain_commit(sha: &str, message: &str) -> CommitEntry {
    CommitEntry {
        sha: sha.to_string(),
        message: message.to_string(),
    }
}

/// An open release PR (develop → main) with the given body.
pub fn release_pr(number: u64, body: Option<&str>) -> PullRequest {
    PullRequest {
        number,
        title: "Release Wed, 05 Aug 2026 12:00:00 +0000".to_string(),
        body: body.map(ToString::to_string),
        head_ref: "develop".to_string(),
        base_ref: "main".to_string(),
        html_url: format!("https://github.com/acme/widget/pull/{number}"),
    }
}

/// A push event payload for acme/widget with the given ref.
pub fn push_event_payload(git_ref: &str) -> String {
    format!(
        r#"{{"ref": "{git_ref}", "repository": {{"name": "widget", "owner": {{"login": "acme"}}}}}}"#
    )
}
