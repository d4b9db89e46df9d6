//! Merged feature PR extraction from commit history
//!
//! Pure half of the merge-set extractor: the commit range itself comes from
//! [`crate::platform::PlatformService::compare_commits`]; this module turns
//! those messages into the ordered sequence of merged feature PR numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::CommitEntry;

/// Merge-commit message template. The capture is deliberately `\w+` rather
/// than `\d+`: a merge marker with a non-numeric reference is a
/// data-integrity error that must surface, not silently fail to match.
static MERGE_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Merge pull request #(\w+) from").expect("merge commit pattern is valid")
});

/// Extract merged feature PR numbers from a compared commit range.
///
/// Matches the template anywhere in each message, case-sensitively, at most
/// once per commit. Source order is preserved and duplicates pass through:
/// the same feature merged twice yields the number twice (dedup, if ever
/// wanted, is a reconciliation policy decision).
pub fn merged_pr_ids(commits: &[CommitEntry]) -> Result<Vec<u64>> {
    commits
        .iter()
        .filter_map(|commit| {
            MERGE_COMMIT
                .captures(&commit.message)
                .map(|captures| (commit, captures))
        })
        .map(|(commit, captures)| {
            let capture = &captures[1];
            capture
                .parse::<u64>()
                .map_err(|_| Error::InvalidMergeCapture {
                    sha: commit.sha.clone(),
                    capture: capture.to_string(),
                })
        })
        .collect()
}
