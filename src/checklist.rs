//! The release PR checklist body format
//!
//! The checklist is the only state this system owns: a newline-separated
//! sequence of `- [ ] #<n>` / `- [x] #<n>` lines in the release pull
//! request's body. It is rebuilt in full on every reconciliation: prior
//! check-off state is carried over by id, and any other body text is
//! dropped (the body belongs to the reconciler, not to prose).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// A checked checklist line. Keys are kept as strings: the id only ever
/// round-trips back into a rendered line, so no numeric parse is needed
/// (and a hand-edited `#007` stays distinct from `#7`).
static CHECKED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[x\] #(\d+)\s*$").expect("checked line pattern is valid"));

/// Collect the ids a reviewer has checked off in a prior body.
#[must_use]
pub fn checked_ids(body: &str) -> HashSet<String> {
    body.lines()
        .filter_map(|line| CHECKED_LINE.captures(line))
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Render the checklist body for a merge set.
///
/// One line per id, in the given order (duplicates included); an id is
/// checked iff its string form appears in `checked`. An empty merge set
/// renders an empty body.
#[must_use]
pub fn render(merged: &[u64], checked: &HashSet<String>) -> String {
    merged
        .iter()
        .map(|id| {
            if checked.contains(&id.to_string()) {
                format!("- [x] #{id}")
            } else {
                format!("- [ ] #{id}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
