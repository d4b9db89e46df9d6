//! GitHub token resolution
//!
//! Env vars first (`GITHUB_TOKEN`, then `GH_TOKEN`), then the `gh` CLI.

use std::process::Command;

use tracing::debug;

use crate::auth::AuthSource;
use crate::error::{Error, Result};

/// A resolved GitHub credential.
#[derive(Debug, Clone)]
pub struct GitHubAuth {
    /// The token itself
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a GitHub token.
///
/// Checks `GITHUB_TOKEN`, then `GH_TOKEN`, then asks the `gh` CLI. Blank
/// values are treated as unset.
pub fn get_github_auth() -> Result<GitHubAuth> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            debug!(var, "using GitHub token from environment");
            return Ok(GitHubAuth {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(token) = gh_cli_token() {
        debug!("using GitHub token from gh CLI");
        return Ok(GitHubAuth {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "no GitHub token found: set GITHUB_TOKEN, or install gh and run 'gh auth login'"
            .to_string(),
    ))
}

/// Ask the `gh` CLI for its stored token, if gh is installed and logged in.
fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}
