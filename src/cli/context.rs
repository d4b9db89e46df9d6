//! Shared command context for CLI commands
//!
//! Extracts the setup code shared by run and reconcile: resolving
//! credentials and constructing the long-lived platform client.

use release_herald::auth::get_github_auth;
use release_herald::config::HeraldConfig;
use release_herald::error::Result;
use release_herald::platform::{GitHubService, PlatformService};
use tracing::debug;

/// Shared context for commands that talk to the platform.
///
/// The client is built once per process and passed by reference into the
/// reconciliation core, which keeps the core testable with a substituted
/// platform.
pub struct CommandContext {
    /// Loaded configuration
    pub config: HeraldConfig,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
}

impl CommandContext {
    /// Build a context from already-loaded configuration.
    ///
    /// Resolves a GitHub token and constructs the client against
    /// github.com or the configured Enterprise host.
    pub fn from_config(config: HeraldConfig) -> Result<Self> {
        let auth = get_github_auth()?;
        debug!(source = %auth.source, "authenticated");

        let service = GitHubService::new(&auth.token, config.github_host.clone())?;

        Ok(Self {
            config,
            platform: Box::new(service),
        })
    }
}
