//! Changelog command implementation.
use color_eyre::eyre::Context;
use log::*;

use crate::{
    Result,
    changelog::{self, ChangelogContext, ChangelogOptions},
    command::common,
    forge::{manager::ForgeManager, types::Milestone},
};

/// A rendered changelog along with the milestone it was built from.
#[derive(Debug)]
pub struct RenderedChangelog {
    pub milestone: Milestone,
    pub text: String,
}

/// Resolve the milestone for `release`, fetch its issues and render them.
pub async fn generate(
    manager: &ForgeManager,
    release: &str,
    options: &ChangelogOptions,
) -> Result<RenderedChangelog> {
    let title = changelog::milestone_title(release);
    generate_from_milestone(manager, release, title, options).await
}

/// Render the changelog of the milestone titled `title` for `release`.
pub async fn generate_from_milestone(
    manager: &ForgeManager,
    release: &str,
    title: &str,
    options: &ChangelogOptions,
) -> Result<RenderedChangelog> {
    let milestone = common::find_required_milestone(manager, title)
        .await
        .wrap_err("getting milestone")?;

    let issues = manager
        .list_milestone_issues(milestone.number)
        .await
        .wrap_err("listing issues")?;

    info!(
        "rendering changelog for {release} from {} issues in milestone {}",
        issues.len(),
        milestone.title
    );

    let text = changelog::render(
        ChangelogContext {
            release,
            milestone: &milestone,
            issues,
            release_link_base_url: &manager
                .remote_config()
                .release_link_base_url,
        },
        options,
    );

    Ok(RenderedChangelog { milestone, text })
}

/// Execute changelog command, returning the text to print.
pub async fn execute(
    manager: &ForgeManager,
    release: &str,
    options: &ChangelogOptions,
) -> Result<String> {
    let rendered = generate(manager, release, options).await?;
    Ok(rendered.text)
}
