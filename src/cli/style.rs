//! Terminal styling helpers for herald commands

use std::fmt::Display;

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use release_herald::types::PullRequest;
use terminal_link::Link;

/// Check mark used in summary lines.
pub const CHECK: &str = "✓";

/// Green check mark.
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Cyan arrow for head → base displays.
pub fn arrow() -> String {
    "→".cyan().to_string()
}

/// Extension methods for styled terminal output.
///
/// Produces ANSI-styled strings; `anstream` strips them when stdout is not
/// a terminal.
pub trait Stylize: Display + Sized {
    /// Bold, for the main subject of a line.
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Cyan, for names and numbers.
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Dimmed, for secondary information.
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Green, for success summaries.
    fn success(&self) -> String {
        self.green().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Spinner style for remote-call progress.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}

/// A PR reference, hyperlinked when the terminal supports it.
pub fn pr_link(pr: &PullRequest) -> String {
    let label = format!("#{}", pr.number);
    if supports_hyperlinks::supports_hyperlinks() {
        Link::new(&label, &pr.html_url).to_string()
    } else {
        format!("{label} ({})", pr.html_url)
    }
}
