//! Reconciliation execution - effectful operations
//!
//! Takes a [`ReconcileAction`] (created by the pure planning functions) and
//! performs the single create or update call via the platform API.

use tracing::debug;

use crate::error::Result;
use crate::platform::PlatformService;
use crate::reconcile::plan::ReconcileAction;
use crate::types::{NewPullRequest, PullRequest, RepoRef};

/// Result of executing a reconciliation.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The release pull request after the write
    pub pr: PullRequest,
    /// Whether this run created the PR (false: body update)
    pub created: bool,
    /// Number of checklist entries now tracked
    pub tracked: usize,
}

/// Execute the planned write (EFFECTFUL).
///
/// Exactly one remote write call. A failure leaves the prior PR state
/// intact - the host applies each call atomically - so there is nothing to
/// roll back here.
pub async fn execute_reconciliation(
    action: &ReconcileAction,
    repo: &RepoRef,
    platform: &dyn PlatformService,
) -> Result<ReconcileOutcome> {
    let tracked = action.tracked();

    match action {
        ReconcileAction::Create {
            title,
            head,
            base,
            body,
        } => {
            let pr = platform
                .create_pr(
                    repo,
                    &NewPullRequest {
                        title: title.clone(),
                        head: head.clone(),
                        base: base.clone(),
                        body: body.clone(),
                    },
                )
                .await?;

            debug!(%repo, number = pr.number, tracked, "created release PR");
            Ok(ReconcileOutcome {
                pr,
                created: true,
                tracked,
            })
        }
        ReconcileAction::Update { number, body } => {
            let pr = platform.update_pr_body(repo, *number, body).await?;

            debug!(%repo, number, tracked, "updated release PR checklist");
            Ok(ReconcileOutcome {
                pr,
                created: false,
                tracked,
            })
        }
    }
}
