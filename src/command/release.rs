//! Release publication command implementation.
use color_eyre::eyre::Context;
use log::*;

use crate::{
    Result,
    changelog::{self, ChangelogOptions},
    command,
    forge::{
        manager::ForgeManager,
        types::{CreateReleaseRequest, Release},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Milestone to publish, or a release name whose part before the
    /// first `-` is the milestone title
    pub milestone: String,
    /// Release name when it differs from the milestone, e.g. a release
    /// candidate built from it
    pub release_name: Option<String>,
    pub skip_labels: Vec<String>,
}

impl PublishRequest {
    /// Release name and milestone title for this request.
    fn names(&self) -> (&str, &str) {
        match self.release_name.as_deref() {
            Some(name) => (name, self.milestone.as_str()),
            None => (
                self.milestone.as_str(),
                changelog::milestone_title(&self.milestone),
            ),
        }
    }
}

/// Execute release command: publish the release with the milestone's
/// changelog and close the milestone for final releases.
pub async fn execute(
    manager: &ForgeManager,
    req: PublishRequest,
) -> Result<Release> {
    let (release, title) = req.names();
    let prerelease = release != title;

    let options = ChangelogOptions::builder()
        .skip_labels(req.skip_labels.clone())
        .build()?;

    let rendered = command::changelog::generate_from_milestone(
        manager, release, title, &options,
    )
    .await?;

    info!("creating release {release} (prerelease: {prerelease})");

    let created = manager
        .create_release(CreateReleaseRequest {
            name: release.to_string(),
            tag: release.to_string(),
            body: rendered.text,
            prerelease,
            draft: false,
        })
        .await
        .wrap_err("creating release")?;

    if !created.html_url.is_empty() {
        info!("release published: {}", created.html_url);
    }

    if !prerelease {
        info!("closing milestone {}", rendered.milestone.title);
        manager
            .close_milestone(&rendered.milestone)
            .await
            .wrap_err("closing milestone")?;
    }

    Ok(created)
}
