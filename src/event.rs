//! Push event payloads and the event filter
//!
//! A delivery arrives as the JSON document of a `push` webhook event (for
//! example the file GitHub Actions exposes via `GITHUB_EVENT_PATH`). Only
//! the ref and the repository coordinates matter here; commit data is
//! fetched separately through the compare API.
//!
//! Malformed or differently-shaped payloads never error: they parse to a
//! value that fails the filter, and the run is a no-op.

use serde::Deserialize;

use crate::types::RepoRef;

/// A push event delivery, reduced to the fields reconciliation needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    /// The pushed ref, e.g. `refs/heads/develop`
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
    /// The repository the push happened in
    #[serde(default)]
    pub repository: Option<EventRepository>,
}

/// Repository section of a push event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRepository {
    /// Repository name
    #[serde(default)]
    pub name: Option<String>,
    /// Repository owner (absent for some deleted-account payloads)
    #[serde(default)]
    pub owner: Option<EventAccount>,
}

/// Owner section of a push event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EventAccount {
    /// Account login
    pub login: String,
}

impl PushEvent {
    /// Parse a raw payload leniently.
    ///
    /// Returns `None` when the document is not JSON or not an object;
    /// missing fields inside an object are tolerated and surface as `None`
    /// through [`PushEvent::repo`] and the filter.
    #[must_use]
    pub fn from_json(payload: &str) -> Option<Self> {
        serde_json::from_str(payload).ok()
    }

    /// The repository this event belongs to, when the payload names one.
    #[must_use]
    pub fn repo(&self) -> Option<RepoRef> {
        let repository = self.repository.as_ref()?;
        let name = repository.name.as_ref()?;
        let owner = repository.owner.as_ref()?;
        Some(RepoRef::new(owner.login.clone(), name.clone()))
    }

    /// Event filter: true iff this is a push to the given integration
    /// branch. No side effects; false for absent or non-branch refs.
    #[must_use]
    pub fn is_integration_push(&self, integration_branch: &str) -> bool {
        self.git_ref.as_deref() == Some(branch_ref(integration_branch).as_str())
    }
}

/// The fully-qualified ref for a branch name.
#[must_use]
pub fn branch_ref(branch: &str) -> String {
    format!("refs/heads/{branch}")
}
