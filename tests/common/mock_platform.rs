//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use release_herald::error::{Error, Result};
use release_herald::platform::PlatformService;
use release_herald::types::{CommitEntry, NewPullRequest, PullRequest, RepoRef};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `list_open_prs` and `compare_commits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCall {
    pub repo: String,
    pub base: String,
    pub head: String,
}

/// Call record for `create_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub repo: String,
    pub params: NewPullRequest,
}

/// Call record for `update_pr_body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBodyCall {
    pub repo: String,
    pub number: u64,
    pub body: String,
}

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using a mocking
/// crate, which keeps async methods and stateful behavior straightforward.
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Configurable open PRs and compare ranges
/// - Error injection for failure path testing
/// - Stateful bodies: `update_pr_body` persists into the mock, so a second
///   reconciliation reads what the first one wrote (idempotence tests)
pub struct MockPlatformService {
    next_pr_number: AtomicU64,
    open_prs: Mutex<Vec<PullRequest>>,
    commits: Mutex<Vec<CommitEntry>>,
    bodies: Mutex<HashMap<u64, Option<String>>>,
    // Call tracking
    list_calls: Mutex<Vec<RangeCall>>,
    compare_calls: Mutex<Vec<RangeCall>>,
    get_calls: Mutex<Vec<u64>>,
    create_calls: Mutex<Vec<CreatePrCall>>,
    update_calls: Mutex<Vec<UpdateBodyCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_compare: Mutex<Option<String>>,
    error_on_get: Mutex<Option<String>>,
    error_on_create: Mutex<Option<String>>,
    error_on_update: Mutex<Option<String>>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create an empty mock: no open PRs, empty compare range.
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            open_prs: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            bodies: Mutex::new(HashMap::new()),
            list_calls: Mutex::new(Vec::new()),
            compare_calls: Mutex::new(Vec::new()),
            get_calls: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_compare: Mutex::new(None),
            error_on_get: Mutex::new(None),
            error_on_create: Mutex::new(None),
            error_on_update: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Add an open PR the listing will return (listing order = insertion
    /// order). Its body becomes the mock's stored body for that number.
    pub fn add_open_pr(&self, pr: PullRequest) {
        self.bodies
            .lock()
            .unwrap()
            .insert(pr.number, pr.body.clone());
        self.open_prs.lock().unwrap().push(pr);
    }

    /// Set the commits the compare call returns.
    pub fn set_compare_commits(&self, commits: Vec<CommitEntry>) {
        *self.commits.lock().unwrap() = commits;
    }

    /// Read the body currently stored for a PR.
    pub fn stored_body(&self, number: u64) -> Option<String> {
        self.bodies.lock().unwrap().get(&number).cloned().flatten()
    }

    // === Error injection methods ===

    /// Make `list_open_prs` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `compare_commits` return an error
    pub fn fail_compare(&self, msg: &str) {
        *self.error_on_compare.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pr` return an error
    pub fn fail_get(&self, msg: &str) {
        *self.error_on_get.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr` return an error
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `update_pr_body` return an error
    pub fn fail_update(&self, msg: &str) {
        *self.error_on_update.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `list_open_prs` calls
    pub fn get_list_calls(&self) -> Vec<RangeCall> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Get all `compare_commits` calls
    pub fn get_compare_calls(&self) -> Vec<RangeCall> {
        self.compare_calls.lock().unwrap().clone()
    }

    /// Get all `get_pr` calls (PR numbers)
    pub fn get_get_calls(&self) -> Vec<u64> {
        self.get_calls.lock().unwrap().clone()
    }

    /// Get all `create_pr` calls
    pub fn get_create_calls(&self) -> Vec<CreatePrCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Get all `update_pr_body` calls
    pub fn get_update_calls(&self) -> Vec<UpdateBodyCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Count of write calls (create + update)
    pub fn write_call_count(&self) -> usize {
        self.create_calls.lock().unwrap().len() + self.update_calls.lock().unwrap().len()
    }

    /// Assert no write call was made
    pub fn assert_no_writes(&self) {
        let creates = self.get_create_calls();
        let updates = self.get_update_calls();
        assert!(
            creates.is_empty() && updates.is_empty(),
            "Expected no writes but got creates: {creates:?}, updates: {updates:?}"
        );
    }

    /// Assert that exactly one create happened, with the given head/base
    pub fn assert_created(&self, head: &str, base: &str) {
        let calls = self.get_create_calls();
        assert_eq!(calls.len(), 1, "Expected one create, got: {calls:?}");
        assert_eq!(calls[0].params.head, head);
        assert_eq!(calls[0].params.base, base);
    }

    /// Assert that exactly one body update happened, on the given PR
    pub fn assert_updated(&self, number: u64) {
        let calls = self.get_update_calls();
        assert_eq!(calls.len(), 1, "Expected one update, got: {calls:?}");
        assert_eq!(calls[0].number, number);
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<PullRequest>> {
        self.list_calls.lock().unwrap().push(RangeCall {
            repo: repo.to_string(),
            base: base.to_string(),
            head: head.to_string(),
        });

        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.open_prs.lock().unwrap().clone())
    }

    async fn compare_commits(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<CommitEntry>> {
        self.compare_calls.lock().unwrap().push(RangeCall {
            repo: repo.to_string(),
            base: base.to_string(),
            head: head.to_string(),
        });

        if let Some(msg) = self.error_on_compare.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.commits.lock().unwrap().clone())
    }

    async fn get_pr(&self, _repo: &RepoRef, number: u64) -> Result<PullRequest> {
        self.get_calls.lock().unwrap().push(number);

        if let Some(msg) = self.error_on_get.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let pr = self
            .open_prs
            .lock()
            .unwrap()
            .iter()
            .find(|pr| pr.number == number)
            .cloned()
            .ok_or_else(|| {
                Error::GitHubApi(format!("get_pr: no PR #{number} configured"))
            })?;

        // Serve the stored body, which later updates may have replaced
        let body = self.bodies.lock().unwrap().get(&number).cloned().flatten();
        Ok(PullRequest { body, ..pr })
    }

    async fn create_pr(&self, repo: &RepoRef, params: &NewPullRequest) -> Result<PullRequest> {
        self.create_calls.lock().unwrap().push(CreatePrCall {
            repo: repo.to_string(),
            params: params.clone(),
        });

        if let Some(msg) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        let pr = PullRequest {
            number,
            title: params.title.clone(),
            body: Some(params.body.clone()),
            head_ref: params.head.clone(),
            base_ref: params.base.clone(),
            html_url: format!("https://github.com/{repo}/pull/{number}"),
        };

        // The created PR is now open: later listings and gets see it
        self.add_open_pr(pr.clone());
        Ok(pr)
    }

    async fn update_pr_body(
        &self,
        repo: &RepoRef,
        number: u64,
        body: &str,
    ) -> Result<PullRequest> {
        self.update_calls.lock().unwrap().push(UpdateBodyCall {
            repo: repo.to_string(),
            number,
            body: body.to_string(),
        });

        if let Some(msg) = self.error_on_update.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        self.bodies
            .lock()
            .unwrap()
            .insert(number, Some(body.to_string()));

        let pr = self
            .open_prs
            .lock()
            .unwrap()
            .iter()
            .find(|pr| pr.number == number)
            .cloned()
            .ok_or_else(|| {
                Error::GitHubApi(format!("update_pr_body: no PR #{number} configured"))
            })?;

        Ok(PullRequest {
            body: Some(body.to_string()),
            ..pr
        })
    }
}
