//! herald - keep a release pull request in sync with merged work

mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use release_herald::config::HeraldConfig;
use release_herald::types::RepoRef;
use tracing_subscriber::EnvFilter;

use crate::cli::ReconcileOptions;

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Keep a release pull request in sync with merged work"
)]
struct Cli {
    /// Path to a config file (default: the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one push event delivery, reconciling if it targets the
    /// integration branch
    Run {
        /// Path to the event payload JSON
        #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH")]
        event_file: Option<PathBuf>,
    },
    /// Reconcile the release pull request for a repository now
    Reconcile {
        /// Repository as <owner>/<name>
        repo: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Title to use if a release PR has to be created
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HeraldConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { event_file } => {
            cli::run_event(config, event_file.as_deref()).await?;
        }
        Commands::Reconcile {
            repo,
            yes,
            dry_run,
            title,
        } => {
            let repo: RepoRef = repo.parse()?;
            cli::run_reconcile(
                config,
                &repo,
                ReconcileOptions {
                    yes,
                    dry_run,
                    title,
                },
            )
            .await?;
        }
    }

    Ok(())
}
