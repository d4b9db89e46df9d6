//! Reconcile command - manual trigger for one repository

use std::time::Duration;

use anstream::println;
use chrono::Utc;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use release_herald::config::HeraldConfig;
use release_herald::error::{Error, Result};
use release_herald::reconcile::{
    ReconcileAction, execute_reconciliation, gather_release_state, plan_reconciliation,
    release_title,
};
use release_herald::types::RepoRef;

use crate::cli::CommandContext;
use crate::cli::style::{Stylize, arrow, check, pr_link, spinner_style};

/// Options for the reconcile command
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Skip the confirmation prompt
    pub yes: bool,
    /// Show the plan without writing
    pub dry_run: bool,
    /// Title override for a newly created release PR
    pub title: Option<String>,
}

/// Run the reconcile command
pub async fn run_reconcile(
    config: HeraldConfig,
    repo: &RepoRef,
    options: ReconcileOptions,
) -> Result<()> {
    let ctx = CommandContext::from_config(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Inspecting {}...", repo.to_string().emphasis()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let snapshot = gather_release_state(
        ctx.platform.as_ref(),
        repo,
        &ctx.config.integration_branch,
        &ctx.config.release_branch,
    )
    .await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let title = options
        .title
        .unwrap_or_else(|| release_title(Utc::now()));
    let action = plan_reconciliation(
        &snapshot.merged,
        snapshot.existing.as_ref(),
        &ctx.config.integration_branch,
        &ctx.config.release_branch,
        &title,
    );

    print_plan(&action, &ctx.config);

    if options.dry_run {
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    if !options.yes {
        let proceed = Confirm::new()
            .with_prompt("Apply this change?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?;
        if !proceed {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
    }

    let outcome = execute_reconciliation(&action, repo, ctx.platform.as_ref()).await?;

    println!(
        "{} {} release PR {} ({} tracked)",
        check(),
        if outcome.created {
            "Created".success()
        } else {
            "Updated".success()
        },
        pr_link(&outcome.pr),
        outcome.tracked.accent(),
    );

    Ok(())
}

/// Print what the planned write will do.
fn print_plan(action: &ReconcileAction, config: &HeraldConfig) {
    match action {
        ReconcileAction::Create { title, head, base, .. } => {
            println!(
                "{} {} ({} {} {})",
                "Will create".emphasis(),
                title.accent(),
                head.accent(),
                arrow(),
                base.accent()
            );
        }
        ReconcileAction::Update { number, .. } => {
            println!(
                "{} #{} ({} {} {})",
                "Will update".emphasis(),
                number.accent(),
                config.integration_branch.accent(),
                arrow(),
                config.release_branch.accent()
            );
        }
    }

    if action.body().is_empty() {
        println!("  {}", "(no merged feature PRs in range)".muted());
    } else {
        for line in action.body().lines() {
            println!("  {line}");
        }
    }
    println!();
}
