//! Milestone command implementation: assigns a milestone to the closed
//! issues referenced by the commits in a range.
use color_eyre::eyre::Context;
use log::*;

use crate::{
    Result,
    forge::{
        manager::ForgeManager,
        types::{Issue, Milestone, State},
    },
    references,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSyncRequest {
    /// Start of the commit range (exclusive)
    pub from: String,
    /// End of the commit range (inclusive)
    pub to: String,
    /// Title of the milestone to assign
    pub milestone: String,
    /// Replace a different milestone already set on an issue
    pub force: bool,
}

/// Why a referenced issue was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FetchFailed,
    PullRequest,
    NotClosed,
    AlreadyMarked,
    OtherMilestone,
    AssignFailed,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MilestoneSyncReport {
    pub milestone: Milestone,
    /// Issues that received the milestone (or would have, under dry-run)
    pub marked: Vec<u64>,
    pub skipped: Vec<(u64, SkipReason)>,
}

/// Execute milestone command.
pub async fn execute(
    manager: &ForgeManager,
    req: MilestoneSyncRequest,
) -> Result<MilestoneSyncReport> {
    let milestone = ensure_milestone(manager, &req.milestone).await?;

    let commits = manager
        .compare_commits(&req.from, &req.to)
        .await
        .wrap_err("listing commits")?;

    let numbers = references::extract_issue_references(&commits);

    info!(
        "found {} issue references in {} commits between {} and {}",
        numbers.len(),
        commits.len(),
        req.from,
        req.to
    );

    let mut report = MilestoneSyncReport {
        milestone,
        ..Default::default()
    };

    for number in numbers {
        let issue = match manager.get_issue(number).await {
            Ok(issue) => issue,
            Err(err) => {
                error!("getting issue #{number}: {err}");
                report.skipped.push((number, SkipReason::FetchFailed));
                continue;
            }
        };

        if let Some(reason) = skip_reason(&issue, &report.milestone, req.force)
        {
            report.skipped.push((number, reason));
            continue;
        }

        info!("marking issue #{number}");

        if let Err(err) =
            manager.set_issue_milestone(number, &report.milestone).await
        {
            error!("setting milestone on issue #{number}: {err}");
            report.skipped.push((number, SkipReason::AssignFailed));
            continue;
        }

        report.marked.push(number);
    }

    info!(
        "milestone {}: marked {} issues, skipped {}",
        report.milestone.title,
        report.marked.len(),
        report.skipped.len()
    );

    Ok(report)
}

/// Look up the milestone, creating it when it does not exist yet.
async fn ensure_milestone(
    manager: &ForgeManager,
    title: &str,
) -> Result<Milestone> {
    if let Some(milestone) = manager.find_milestone(title).await? {
        debug!("using milestone {} (#{})", milestone.title, milestone.number);
        return Ok(milestone);
    }

    info!("creating milestone {title}");

    manager
        .create_milestone(title)
        .await
        .wrap_err("creating milestone")
}

fn skip_reason(
    issue: &Issue,
    milestone: &Milestone,
    force: bool,
) -> Option<SkipReason> {
    if issue.is_pull_request {
        info!("#{} is a pull request; not marking", issue.number);
        return Some(SkipReason::PullRequest);
    }

    if issue.state != State::Closed {
        info!("issue #{} is not closed; not marking", issue.number);
        return Some(SkipReason::NotClosed);
    }

    match issue.milestone {
        Some(current) if current == milestone.number => {
            info!("issue #{} is already correctly marked", issue.number);
            Some(SkipReason::AlreadyMarked)
        }
        Some(_) if !force => {
            info!(
                "issue #{} is already marked with another milestone",
                issue.number
            );
            Some(SkipReason::OtherMilestone)
        }
        _ => None,
    }
}
