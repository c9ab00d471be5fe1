//! Manager that wraps forge implementations
use log::*;
use std::sync::Mutex;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{
            CreateReleaseRequest, ForgeCommit, Issue, Milestone, Release,
            State,
        },
    },
};

/// Per-invocation behavior of the manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForgeOptions {
    /// Log mutating calls instead of sending them
    pub dry_run: bool,
}

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
    options: ForgeOptions,
    /// Mutations skipped under dry-run, in call order
    dry_run_actions: Mutex<Vec<String>>,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>, options: ForgeOptions) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
            options,
            dry_run_actions: Mutex::new(vec![]),
        }
    }

    pub fn remote_config(&self) -> &RemoteConfig {
        &self.remote_config
    }

    pub fn dry_run(&self) -> bool {
        self.options.dry_run
    }

    /// Mutations that were logged instead of sent, in call order.
    pub fn dry_run_actions(&self) -> Vec<String> {
        self.dry_run_actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    fn skip_mutation(&self, action: String) {
        warn!("dry_run: would {action}");
        if let Ok(mut actions) = self.dry_run_actions.lock() {
            actions.push(action);
        }
    }

    /// Look up a milestone by exact title among open and closed milestones.
    pub async fn find_milestone(
        &self,
        title: &str,
    ) -> Result<Option<Milestone>> {
        debug!("looking up milestone: {title}");
        let milestones = self.forge.list_milestones().await?;
        Ok(milestones.into_iter().find(|m| m.title == title))
    }

    pub async fn get_issue(&self, number: u64) -> Result<Issue> {
        self.forge.get_issue(number).await
    }

    pub async fn list_milestone_issues(
        &self,
        milestone_number: u64,
    ) -> Result<Vec<Issue>> {
        self.forge.list_milestone_issues(milestone_number).await
    }

    pub async fn compare_commits(
        &self,
        base: &str,
        head: &str,
    ) -> Result<Vec<ForgeCommit>> {
        debug!("comparing commits: {base}...{head}");
        self.forge.compare_commits(base, head).await
    }

    /// Create the milestone. Under dry-run a placeholder numbered 0 is
    /// returned; no issue carries that number.
    pub async fn create_milestone(&self, title: &str) -> Result<Milestone> {
        if self.options.dry_run {
            self.skip_mutation(format!("create milestone: {title}"));
            return Ok(Milestone {
                number: 0,
                title: title.to_string(),
                state: State::Open,
                description: None,
            });
        }

        self.forge.create_milestone(title).await
    }

    pub async fn close_milestone(&self, milestone: &Milestone) -> Result<()> {
        if self.options.dry_run {
            self.skip_mutation(format!(
                "close milestone: {} (#{})",
                milestone.title, milestone.number
            ));
            return Ok(());
        }

        self.forge.close_milestone(milestone.number).await
    }

    pub async fn set_issue_milestone(
        &self,
        issue_number: u64,
        milestone: &Milestone,
    ) -> Result<()> {
        if self.options.dry_run {
            self.skip_mutation(format!(
                "set milestone {} on issue #{issue_number}",
                milestone.title
            ));
            return Ok(());
        }

        self.forge
            .set_issue_milestone(issue_number, milestone.number)
            .await
    }

    pub async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        if self.options.dry_run {
            self.skip_mutation(format!(
                "create release: {} (prerelease: {})",
                req.name, req.prerelease
            ));
            debug!("dry_run: release body:\n{}", req.body);
            return Ok(Release {
                tag: req.tag,
                html_url: "".into(),
            });
        }

        self.forge.create_release(req).await
    }
}
