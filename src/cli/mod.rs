//! CLI commands for herald

mod context;
mod reconcile;
mod run;
mod style;

pub use context::CommandContext;
pub use reconcile::{ReconcileOptions, run_reconcile};
pub use run::run_event;
