//! Reconciliation planning - pure functions for deciding the write
//!
//! No I/O happens here - the gather phase hands in the merge set and the
//! existing release PR (if any), and planning produces the single write
//! to perform.

use chrono::{DateTime, Utc};

use crate::checklist;
use crate::types::PullRequest;

/// The single write a reconciliation run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileAction {
    /// No open release PR: create one with a freshly seeded checklist.
    Create {
        /// Generated PR title
        title: String,
        /// Head branch (the integration branch)
        head: String,
        /// Base branch (the release-target branch)
        base: String,
        /// Seeded checklist body, every entry unchecked
        body: String,
    },
    /// An open release PR exists: rewrite its checklist body.
    Update {
        /// Number of the PR being updated
        number: u64,
        /// Rebuilt checklist body
        body: String,
    },
}

impl ReconcileAction {
    /// The checklist body this action will write.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Create { body, .. } | Self::Update { body, .. } => body,
        }
    }

    /// Number of checklist entries in the body being written.
    #[must_use]
    pub fn tracked(&self) -> usize {
        let body = self.body();
        if body.is_empty() { 0 } else { body.lines().count() }
    }
}

/// Default title rule for a newly created release PR.
#[must_use]
pub fn release_title(now: DateTime<Utc>) -> String {
    format!("Release {}", now.to_rfc2822())
}

/// Plan the reconciliation write (PURE - no I/O, easily testable).
///
/// With no existing PR, seeds a checklist with every merged id unchecked.
/// With an existing PR, rebuilds the body from the current merge set in
/// extraction order: an id checked in the prior body stays checked, a newly
/// observed id is unchecked, and anything else in the prior body is
/// discarded. The existing PR's title, head, and base are never touched.
#[must_use]
pub fn plan_reconciliation(
    merged: &[u64],
    existing: Option<&PullRequest>,
    integration_branch: &str,
    release_branch: &str,
    title: &str,
) -> ReconcileAction {
    match existing {
        None => ReconcileAction::Create {
            title: title.to_string(),
            head: integration_branch.to_string(),
            base: release_branch.to_string(),
            body: checklist::render(merged, &std::collections::HashSet::new()),
        },
        Some(pr) => {
            let checked = checklist::checked_ids(pr.body.as_deref().unwrap_or_default());
            ReconcileAction::Update {
                number: pr.number,
                body: checklist::render(merged, &checked),
            }
        }
    }
}
