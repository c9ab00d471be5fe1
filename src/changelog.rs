//! Changelog rendering from the issues of a milestone.
//!
//! Issues are partitioned by label into bugfixes, enhancements and
//! everything else, then rendered as plain text or markdown after the
//! (word wrapped) milestone description.
use derive_builder::Builder;

use crate::{
    Result,
    error::GrtError,
    forge::types::{Issue, Milestone},
};

pub mod wrap;

/// Column width used for milestone descriptions.
pub const DEFAULT_WRAP_WIDTH: usize = 72;
/// Label marking an issue as a bugfix.
pub const BUG_LABEL: &str = "bug";
/// Label marking an issue as an enhancement.
pub const ENHANCEMENT_LABEL: &str = "enhancement";

/// Milestone title for a release name: everything before the first `-`,
/// so `v1.2.0-rc.1` belongs to milestone `v1.2.0`.
pub fn milestone_title(release: &str) -> &str {
    release.split('-').next().unwrap_or(release)
}

/// A release whose name differs from its milestone title (e.g. a release
/// candidate) is a prerelease.
pub fn is_prerelease(release: &str) -> bool {
    release != milestone_title(release)
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), default, build_fn(private, name = "_build"))]
pub struct ChangelogOptions {
    /// Render markdown headings and issue links
    pub markdown: bool,
    /// Start with the release name as heading
    pub with_subject: bool,
    /// Issues carrying any of these labels are left out
    pub skip_labels: Vec<String>,
    /// Wrap width for the milestone description
    pub width: usize,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            markdown: false,
            with_subject: false,
            skip_labels: vec![],
            width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl ChangelogOptions {
    pub fn builder() -> ChangelogOptionsBuilder {
        ChangelogOptionsBuilder::default()
    }
}

impl ChangelogOptionsBuilder {
    pub fn build(&self) -> Result<ChangelogOptions> {
        let options = self._build().map_err(|e| {
            GrtError::invalid_args(format!(
                "failed to build changelog options: {e}"
            ))
        })?;

        if options.width == 0 {
            return Err(
                GrtError::invalid_args("wrap width must be positive").into()
            );
        }

        Ok(options)
    }
}

/// Issues of a milestone grouped into changelog sections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub bugs: Vec<Issue>,
    pub enhancements: Vec<Issue>,
    pub other: Vec<Issue>,
}

/// Sort by number, drop pull requests and skipped issues, and bucket the
/// rest. The first matching rule wins, so an issue labelled both `bug` and
/// `enhancement` is a bugfix.
pub fn partition(mut issues: Vec<Issue>, skip_labels: &[String]) -> Partition {
    issues.sort_by_key(|i| i.number);

    let mut partition = Partition::default();

    for issue in issues {
        if issue.is_pull_request {
            continue;
        }

        if skip_labels.iter().any(|skip| issue.has_label(skip)) {
            continue;
        }

        if issue.has_label(BUG_LABEL) {
            partition.bugs.push(issue);
        } else if issue.has_label(ENHANCEMENT_LABEL) {
            partition.enhancements.push(issue);
        } else {
            partition.other.push(issue);
        }
    }

    partition
}

/// Everything needed to render the changelog of one release.
#[derive(Debug)]
pub struct ChangelogContext<'a> {
    /// Release (or milestone) name used in the heading
    pub release: &'a str,
    pub milestone: &'a Milestone,
    pub issues: Vec<Issue>,
    /// Base for the heading link in markdown output
    pub release_link_base_url: &'a str,
}

pub fn render(ctx: ChangelogContext<'_>, options: &ChangelogOptions) -> String {
    let mut out = String::new();

    if options.with_subject {
        if options.markdown {
            out.push_str(&format!(
                "# [{}]({}/{})\n\n",
                ctx.release, ctx.release_link_base_url, ctx.release
            ));
        } else {
            out.push_str(&format!("{}\n\n", ctx.release));
        }
    }

    if let Some(description) = ctx.milestone.description.as_deref() {
        let description = description.trim();
        if !description.is_empty() {
            out.push_str(&wrap::wrap(description, options.width));
            out.push_str("\n\n");
        }
    }

    let partition = partition(ctx.issues, &options.skip_labels);

    let sections = [
        ("Bugfixes", &partition.bugs),
        ("Enhancements", &partition.enhancements),
        ("Other issues", &partition.other),
    ];

    for (title, issues) in sections {
        if issues.is_empty() {
            continue;
        }

        if options.markdown {
            out.push_str(&format!("## {title}\n\n"));
        } else {
            out.push_str(&format!("{title}:\n\n"));
        }

        for issue in issues {
            out.push_str(&render_issue(issue, options.markdown));
        }

        out.push('\n');
    }

    out
}

fn render_issue(issue: &Issue, markdown: bool) -> String {
    if markdown {
        format!("- [#{}]({}): {}\n", issue.number, issue.html_url, issue.title)
    } else {
        format!("- #{}: {}\n", issue.number, issue.title)
    }
}
