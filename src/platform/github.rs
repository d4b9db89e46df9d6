//! GitHub platform service implementation

use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{CommitEntry, NewPullRequest, PullRequest, RepoRef};

/// GitHub service using octocrab
///
/// PR operations go through octocrab's typed builders; the compare endpoint
/// uses a raw authenticated GET because octocrab's typed surface does not
/// cover it.
pub struct GitHubService {
    client: Octocrab,
    /// Token for raw HTTP requests (compare endpoint)
    token: String,
    /// HTTP client for raw requests (compare endpoint)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service.
    ///
    /// `host` selects a GitHub Enterprise instance; `None` means github.com.
    pub fn new(token: &str, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("release-herald")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            http_client,
            api_host,
        })
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        body: pr.body.clone(),
        head_ref: pr.head.ref_field.clone(),
        base_ref: pr.base.ref_field.clone(),
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<PullRequest>> {
        debug!(%repo, base, head, "listing open PRs");

        // The list endpoint wants the head owner-qualified
        let qualified_head = format!("{}:{}", repo.owner, head);

        let prs = self
            .client
            .pulls(&repo.owner, &repo.name)
            .list()
            .state(octocrab::params::State::Open)
            .base(base)
            .head(qualified_head)
            .send()
            .await?;

        let result: Vec<PullRequest> = prs.items.iter().map(pr_from_octocrab).collect();
        debug!(%repo, count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn compare_commits(
        &self,
        repo: &RepoRef,
        base: &str,
        head: &str,
    ) -> Result<Vec<CommitEntry>> {
        #[derive(Deserialize)]
        struct Comparison {
            commits: Vec<ComparisonCommit>,
        }

        #[derive(Deserialize)]
        struct ComparisonCommit {
            sha: String,
            commit: CommitDetail,
        }

        #[derive(Deserialize)]
        struct CommitDetail {
            message: String,
        }

        debug!(%repo, base, head, "comparing commits");

        let url = format!(
            "https://{}/repos/{}/{}/compare/{base}...{head}",
            self.api_host, repo.owner, repo.name
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to compare commits: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "compare {base}...{head} for {repo} returned {}",
                response.status()
            )));
        }

        let comparison: Comparison = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse comparison: {e}")))?;

        let commits: Vec<CommitEntry> = comparison
            .commits
            .into_iter()
            .map(|c| CommitEntry {
                sha: c.sha,
                message: c.commit.message,
            })
            .collect();

        debug!(%repo, count = commits.len(), "compared commits");
        Ok(commits)
    }

    async fn get_pr(&self, repo: &RepoRef, number: u64) -> Result<PullRequest> {
        debug!(%repo, number, "getting PR");

        let pr = self
            .client
            .pulls(&repo.owner, &repo.name)
            .get(number)
            .await?;

        Ok(pr_from_octocrab(&pr))
    }

    async fn create_pr(&self, repo: &RepoRef, params: &NewPullRequest) -> Result<PullRequest> {
        debug!(%repo, head = %params.head, base = %params.base, "creating PR");

        let pr = self
            .client
            .pulls(&repo.owner, &repo.name)
            .create(&params.title, &params.head, &params.base)
            .body(&params.body)
            .send()
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(%repo, number = result.number, "created PR");
        Ok(result)
    }

    async fn update_pr_body(
        &self,
        repo: &RepoRef,
        number: u64,
        body: &str,
    ) -> Result<PullRequest> {
        debug!(%repo, number, "updating PR body");

        let pr = self
            .client
            .pulls(&repo.owner, &repo.name)
            .update(number)
            .body(body)
            .send()
            .await?;

        debug!(%repo, number, "updated PR body");
        Ok(pr_from_octocrab(&pr))
    }
}
