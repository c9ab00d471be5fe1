//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, Page};
use serde::Serialize;

use crate::{
    Result,
    error::GrtError,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::Forge,
        types::{
            CreateReleaseRequest, ForgeCommit, Issue, Milestone, Release,
            State,
        },
    },
};

mod types;

use types::{
    CreateMilestoneBody, GithubComparison, GithubIssue, GithubMilestone,
    ListParams, UpdateIssueMilestoneBody, UpdateMilestoneBody,
};

#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

/// GitHub forge implementation using Octocrab for API interactions with
/// milestones, issues, commit comparisons and releases.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
    page_size: u8,
}

impl Github {
    /// Create GitHub client, authenticated with a personal access token when
    /// one is configured.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();

        let mut builder = Octocrab::builder()
            .base_uri(base_uri.clone())
            .map_err(GrtError::from)?;

        if let Some(token) = config.token.clone() {
            builder = builder.personal_token(token);
        } else {
            warn!("no token configured: using unauthenticated api access");
        }

        let instance = builder.build().map_err(GrtError::from)?;

        Ok(Self {
            config,
            base_uri,
            instance,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Use a smaller page size so pagination kicks in on small repos.
    #[cfg(all(test, feature = "_internal_e2e_tests"))]
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size;
        self
    }

    fn repo_endpoint(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_uri, self.config.owner, self.config.repo, path
        )
    }

    /// Follow `next` links until the last page, collecting every item.
    async fn get_all_pages<T>(
        &self,
        endpoint: String,
        params: &ListParams<'_>,
    ) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut page: Page<T> = self
            .instance
            .get(endpoint, Some(params))
            .await
            .map_err(GrtError::from)?;

        let mut items = page.take_items();

        while let Some(mut next) = self
            .instance
            .get_page::<T>(&page.next)
            .await
            .map_err(GrtError::from)?
        {
            items.extend(next.take_items());
            page = next;
        }

        Ok(items)
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        let params = ListParams {
            state: "all",
            per_page: self.page_size,
            milestone: None,
        };

        let milestones: Vec<GithubMilestone> = self
            .get_all_pages(self.repo_endpoint("milestones"), &params)
            .await?;

        debug!("found {} milestones", milestones.len());

        Ok(milestones.into_iter().map(Milestone::from).collect())
    }

    async fn create_milestone(&self, title: &str) -> Result<Milestone> {
        let milestone: GithubMilestone = self
            .instance
            .post(
                self.repo_endpoint("milestones"),
                Some(&CreateMilestoneBody { title }),
            )
            .await
            .map_err(GrtError::from)?;

        info!(
            "created milestone {} (#{})",
            milestone.title, milestone.number
        );

        Ok(milestone.into())
    }

    async fn close_milestone(&self, number: u64) -> Result<()> {
        let _: serde_json::Value = self
            .instance
            .patch(
                self.repo_endpoint(&format!("milestones/{number}")),
                Some(&UpdateMilestoneBody {
                    state: State::Closed,
                }),
            )
            .await
            .map_err(GrtError::from)?;

        Ok(())
    }

    async fn get_issue(&self, number: u64) -> Result<Issue> {
        let issue: GithubIssue = self
            .instance
            .get(
                self.repo_endpoint(&format!("issues/{number}")),
                None::<&()>,
            )
            .await
            .map_err(GrtError::from)?;

        Ok(issue.into())
    }

    async fn list_milestone_issues(
        &self,
        milestone_number: u64,
    ) -> Result<Vec<Issue>> {
        let params = ListParams {
            state: "all",
            per_page: self.page_size,
            milestone: Some(milestone_number.to_string()),
        };

        let issues: Vec<GithubIssue> = self
            .get_all_pages(self.repo_endpoint("issues"), &params)
            .await?;

        Ok(issues.into_iter().map(Issue::from).collect())
    }

    async fn set_issue_milestone(
        &self,
        issue_number: u64,
        milestone_number: u64,
    ) -> Result<()> {
        let _: serde_json::Value = self
            .instance
            .patch(
                self.repo_endpoint(&format!("issues/{issue_number}")),
                Some(&UpdateIssueMilestoneBody {
                    milestone: milestone_number,
                }),
            )
            .await
            .map_err(GrtError::from)?;

        Ok(())
    }

    async fn compare_commits(
        &self,
        base: &str,
        head: &str,
    ) -> Result<Vec<ForgeCommit>> {
        let endpoint =
            self.repo_endpoint(&format!("compare/{base}...{head}"));
        let mut commits: Vec<ForgeCommit> = vec![];
        let mut page = 1;

        loop {
            let comparison: GithubComparison = self
                .instance
                .get(
                    &endpoint,
                    Some(&PageParams {
                        per_page: self.page_size,
                        page,
                    }),
                )
                .await
                .map_err(GrtError::from)?;

            let received = comparison.commits.len();

            commits
                .extend(comparison.commits.into_iter().map(ForgeCommit::from));

            if received == 0
                || commits.len() as u64 >= comparison.total_commits
            {
                break;
            }

            page += 1;
        }

        debug!("found {} commits between {base} and {head}", commits.len());

        Ok(commits)
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        let repos = self.instance.repos(&self.config.owner, &self.config.repo);
        let releases = repos.releases();

        let release = releases
            .create(&req.tag)
            .name(&req.name)
            .body(&req.body)
            .draft(req.draft)
            .prerelease(req.prerelease)
            .send()
            .await
            .map_err(GrtError::from)?;

        Ok(Release {
            tag: release.tag_name,
            html_url: release.html_url.to_string(),
        })
    }
}
