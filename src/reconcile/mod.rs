//! Release PR reconciliation engine
//!
//! Three-phase pattern:
//! 1. Gather - fetch the open release PR and the compared commit range
//!    (effectful, bounded)
//! 2. Plan - decide create-vs-update and rebuild the checklist body
//!    (pure, testable)
//! 3. Execute - perform the single write call (effectful)
//!
//! A run makes two or three reads and exactly one write. Failures surface
//! unmodified and nothing is cleaned up: each remote call is atomic on the
//! host's side, and the next push re-derives everything from the then-current
//! history.

mod execute;
mod plan;

pub use execute::{ReconcileOutcome, execute_reconciliation};
pub use plan::{ReconcileAction, plan_reconciliation, release_title};

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::merges::merged_pr_ids;
use crate::platform::PlatformService;
use crate::types::{PullRequest, RepoRef};

/// Gather-phase output: everything the pure planner needs.
#[derive(Debug, Clone)]
pub struct ReleaseSnapshot {
    /// The open release PR, with its current body; `None` when one must be
    /// created.
    pub existing: Option<PullRequest>,
    /// Merged feature PR numbers in the compared range, extraction order.
    pub merged: Vec<u64>,
}

/// Gather the current release state for a repository (EFFECTFUL).
///
/// Lists open PRs from the integration branch into the release branch and
/// compares the two refs. When the listing returns more than one PR, the
/// first entry wins and the rest are left untouched (a known limitation,
/// kept as-is). The winner's body is re-fetched so the rebuild starts from
/// the body as it is now, not as some earlier listing saw it.
pub async fn gather_release_state(
    platform: &dyn PlatformService,
    repo: &RepoRef,
    integration_branch: &str,
    release_branch: &str,
) -> Result<ReleaseSnapshot> {
    let open = platform
        .list_open_prs(repo, release_branch, integration_branch)
        .await?;
    if open.len() > 1 {
        debug!(%repo, count = open.len(), "multiple open release PRs; using the first");
    }

    let commits = platform
        .compare_commits(repo, release_branch, integration_branch)
        .await?;
    let merged = merged_pr_ids(&commits)?;

    let existing = match open.into_iter().next() {
        Some(pr) => Some(platform.get_pr(repo, pr.number).await?),
        None => None,
    };

    Ok(ReleaseSnapshot { existing, merged })
}

/// Run one end-to-end reconciliation: gather, plan, execute.
///
/// `title` overrides the generated label used when a release PR has to be
/// created; `None` applies the default rule ([`release_title`] at the
/// current time). Updates never touch the title.
pub async fn run_reconciliation(
    platform: &dyn PlatformService,
    repo: &RepoRef,
    integration_branch: &str,
    release_branch: &str,
    title: Option<&str>,
) -> Result<ReconcileOutcome> {
    let snapshot = gather_release_state(platform, repo, integration_branch, release_branch).await?;

    let title = title.map_or_else(|| release_title(Utc::now()), ToString::to_string);
    let action = plan_reconciliation(
        &snapshot.merged,
        snapshot.existing.as_ref(),
        integration_branch,
        release_branch,
        &title,
    );

    execute_reconciliation(&action, repo, platform).await
}
