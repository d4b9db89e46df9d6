//! Run command - process one push event delivery

use std::fs;
use std::path::Path;

use anstream::println;
use release_herald::config::HeraldConfig;
use release_herald::error::{Error, Result};
use release_herald::event::PushEvent;
use release_herald::reconcile::{ReconcileOutcome, run_reconciliation};
use release_herald::types::RepoRef;

use crate::cli::CommandContext;
use crate::cli::style::{Stylize, check, pr_link};

/// Run one delivery: read the payload, filter, reconcile.
///
/// The payload is read and filtered BEFORE any credentials are resolved or
/// a client is built: a delivery that is not a push to the integration
/// branch needs no token and makes no remote calls.
pub async fn run_event(config: HeraldConfig, event_file: Option<&Path>) -> Result<()> {
    let path = event_file.ok_or_else(|| {
        Error::Event("no event payload: pass --event-file or set GITHUB_EVENT_PATH".to_string())
    })?;

    let payload = fs::read_to_string(path)?;

    let Some(event) = PushEvent::from_json(&payload) else {
        println!("{}", "Not a push event payload; nothing to do".muted());
        return Ok(());
    };

    if !event.is_integration_push(&config.integration_branch) {
        println!(
            "{}",
            format!(
                "Push is not to {}; nothing to do",
                config.integration_branch
            )
            .muted()
        );
        return Ok(());
    }

    let Some(repo) = event.repo() else {
        println!("{}", "Payload names no repository owner; nothing to do".muted());
        return Ok(());
    };

    let ctx = CommandContext::from_config(config)?;
    let outcome = run_reconciliation(
        ctx.platform.as_ref(),
        &repo,
        &ctx.config.integration_branch,
        &ctx.config.release_branch,
        None,
    )
    .await?;

    print_outcome(&repo, &outcome);
    Ok(())
}

/// Print the run summary.
fn print_outcome(repo: &RepoRef, outcome: &ReconcileOutcome) {
    let verb = if outcome.created {
        "created"
    } else {
        "updated"
    };
    println!(
        "{} {} release PR {} in {} ({} tracked)",
        check(),
        verb.success(),
        pr_link(&outcome.pr),
        repo.to_string().accent(),
        outcome.tracked.accent(),
    );
}
