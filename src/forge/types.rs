//! Normalized resources returned from, and requests sent to, a forge.
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Open/closed state shared by issues and milestones.
pub enum State {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A named grouping of issues identified by its title.
pub struct Milestone {
    pub number: u64,
    pub title: String,
    pub state: State,
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// An issue (or pull request, which the issues API also returns).
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: State,
    pub labels: Vec<String>,
    /// Number of the milestone this issue is assigned to
    pub milestone: Option<u64>,
    pub is_pull_request: bool,
}

impl Issue {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Represents a normalized commit returned from the forge
pub struct ForgeCommit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to publish a new release.
pub struct CreateReleaseRequest {
    pub name: String,
    pub tag: String,
    pub body: String,
    pub prerelease: bool,
    pub draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The release as created by the forge.
pub struct Release {
    pub tag: String,
    pub html_url: String,
}
