use serde::{Deserialize, Serialize};

use crate::forge::types::{ForgeCommit, Issue, Milestone, State};

#[derive(Debug, Serialize)]
pub struct ListParams<'a> {
    pub state: &'a str,
    pub per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GithubMilestone {
    pub number: u64,
    pub title: String,
    pub state: State,
    pub description: Option<String>,
}

impl From<GithubMilestone> for Milestone {
    fn from(m: GithubMilestone) -> Self {
        Self {
            number: m.number,
            title: m.title,
            state: m.state,
            description: m.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubMilestoneRef {
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct GithubIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: State,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
    pub milestone: Option<GithubMilestoneRef>,
    /// Only present when the issue is a pull request
    pub pull_request: Option<serde_json::Value>,
}

impl From<GithubIssue> for Issue {
    fn from(i: GithubIssue) -> Self {
        let mut labels = i
            .labels
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<String>>();
        labels.sort();

        Self {
            number: i.number,
            title: i.title,
            html_url: i.html_url,
            state: i.state,
            labels,
            milestone: i.milestone.map(|m| m.number),
            is_pull_request: i.pull_request.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubCommitDetails {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommit {
    pub sha: String,
    pub commit: GithubCommitDetails,
}

impl From<GithubCommit> for ForgeCommit {
    fn from(c: GithubCommit) -> Self {
        Self {
            sha: c.sha,
            message: c.commit.message,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubComparison {
    pub total_commits: u64,
    pub commits: Vec<GithubCommit>,
}

#[derive(Debug, Serialize)]
pub struct CreateMilestoneBody<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateMilestoneBody {
    pub state: State,
}

#[derive(Debug, Serialize)]
pub struct UpdateIssueMilestoneBody {
    pub milestone: u64,
}
