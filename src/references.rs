//! Extraction of issue references from commit subjects.
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

use crate::forge::types::ForgeCommit;

/// `fixes #123` anywhere in the subject
static FIXES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fixes #(\d+)").unwrap());

/// `(#123)` at the very end of the subject, as left by squash merges
static PULL_REQUEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(\d+)\)$").unwrap());

/// First line of a commit message.
pub fn subject(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default()
}

/// Collect the issue numbers referenced by the commit subjects, without
/// duplicates, in ascending order.
pub fn extract_issue_references(commits: &[ForgeCommit]) -> Vec<u64> {
    let mut seen = HashSet::new();
    let mut numbers = vec![];

    for commit in commits {
        let subject = subject(&commit.message);

        let fixes = FIXES_REGEX.captures_iter(subject).map(|c| c[1].to_string());
        let pull_request = PULL_REQUEST_REGEX
            .captures(subject)
            .map(|c| c[1].to_string());

        for capture in fixes.chain(pull_request) {
            // digits only, but may still overflow
            let Ok(number) = capture.parse::<u64>() else {
                continue;
            };

            if seen.insert(number) {
                numbers.push(number);
            }
        }
    }

    numbers.sort_unstable();
    numbers
}
