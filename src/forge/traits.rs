//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        types::{CreateReleaseRequest, ForgeCommit, Issue, Milestone, Release},
    },
};

/// Narrow view of the hosting service. Implementations follow pagination
/// internally so every list method returns the complete set.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    /// All milestones, open and closed.
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;
    async fn create_milestone(&self, title: &str) -> Result<Milestone>;
    async fn close_milestone(&self, number: u64) -> Result<()>;
    async fn get_issue(&self, number: u64) -> Result<Issue>;
    /// Issues (and pull requests) in any state assigned to the milestone.
    async fn list_milestone_issues(
        &self,
        milestone_number: u64,
    ) -> Result<Vec<Issue>>;
    async fn set_issue_milestone(
        &self,
        issue_number: u64,
        milestone_number: u64,
    ) -> Result<()>;
    /// Commits reachable from `head` but not from `base`, oldest first.
    async fn compare_commits(
        &self,
        base: &str,
        head: &str,
    ) -> Result<Vec<ForgeCommit>>;
    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release>;
}
