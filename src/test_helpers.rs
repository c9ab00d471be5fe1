//! Common test helper functions shared across test modules.
//!
//! This module provides reusable utilities for creating test fixtures and
//! mock objects, reducing code duplication across different test suites.
use secrecy::SecretString;

use crate::forge::{
    config::RemoteConfig,
    manager::{ForgeManager, ForgeOptions},
    traits::MockForge,
    types::{ForgeCommit, Issue, Milestone, State},
};

/// Creates a test RemoteConfig for `test/repo` on github.com.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig::new(
        "github.com",
        "test",
        "repo",
        Some(SecretString::from("test-token".to_string())),
    )
}

/// Creates a closed issue with the given labels and no milestone.
///
/// # Example
/// ```ignore
/// let issue = create_test_issue(1, "Crash on start", &["bug"]);
/// ```
pub fn create_test_issue(number: u64, title: &str, labels: &[&str]) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/test/repo/issues/{number}"),
        state: State::Closed,
        labels: labels.iter().map(|l| l.to_string()).collect(),
        milestone: None,
        is_pull_request: false,
    }
}

pub fn create_test_milestone(number: u64, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
        state: State::Open,
        description: None,
    }
}

pub fn create_test_commit(sha: &str, message: &str) -> ForgeCommit {
    ForgeCommit {
        sha: sha.to_string(),
        message: message.to_string(),
    }
}

/// Wraps the mock in a manager, after adding the `remote_config`
/// expectation the manager needs on construction.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_list_milestones().returning(|| Ok(vec![]));
/// let manager = create_test_manager(mock_forge, false);
/// ```
pub fn create_test_manager(
    mut mock_forge: MockForge,
    dry_run: bool,
) -> ForgeManager {
    mock_forge
        .expect_remote_config()
        .returning(create_test_remote_config);

    ForgeManager::new(Box::new(mock_forge), ForgeOptions { dry_run })
}
