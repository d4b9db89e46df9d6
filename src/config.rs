//! Configuration for release-herald
//!
//! Branch names and the optional GitHub Enterprise host come from a TOML
//! config file. An explicit `--config` path must exist and parse; otherwise
//! the default location (`<config dir>/release-herald/config.toml`) is used
//! when present, and built-in defaults apply when it is not.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default integration branch: where merged feature work accumulates.
const DEFAULT_INTEGRATION_BRANCH: &str = "develop";

/// Default release-target branch: where releases land.
const DEFAULT_RELEASE_BRANCH: &str = "main";

/// Application configuration.
///
/// ```toml
/// # release-herald config
/// integration-branch = "develop"
/// release-branch = "main"
/// # github-host = "github.example.com"   # GitHub Enterprise only
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HeraldConfig {
    /// The integration branch whose pushes trigger reconciliation
    #[serde(default = "default_integration_branch")]
    pub integration_branch: String,
    /// The release-target branch the release PR merges into
    #[serde(default = "default_release_branch")]
    pub release_branch: String,
    /// GitHub Enterprise host, `None` for github.com
    #[serde(default)]
    pub github_host: Option<String>,
}

fn default_integration_branch() -> String {
    DEFAULT_INTEGRATION_BRANCH.to_string()
}

fn default_release_branch() -> String {
    DEFAULT_RELEASE_BRANCH.to_string()
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self {
            integration_branch: default_integration_branch(),
            release_branch: default_release_branch(),
            github_host: None,
        }
    }
}

impl HeraldConfig {
    /// Load configuration.
    ///
    /// With `Some(path)`, the file must exist and parse. With `None`, the
    /// default location is read if present, else defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

        Ok(config)
    }
}

/// Default config file location under the user's config directory.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("release-herald").join("config.toml"))
}
