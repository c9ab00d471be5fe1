//! CLI argument parsing and GitHub remote configuration.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use url::Url;

use crate::{
    Result,
    changelog::ChangelogOptions,
    command::{milestone::MilestoneSyncRequest, release::PublishRequest},
    error::GrtError,
    forge::config::{DEFAULT_HOST, RemoteConfig},
};

/// Default end of the commit range scanned for issue references.
pub const DEFAULT_TO_REF: &str = "HEAD";

/// Global CLI arguments for the GitHub remote and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "GRT_OWNER", global = true, default_value = "")]
    /// Repository owner (user or organization).
    pub owner: String,

    #[arg(long, env = "GRT_REPO", global = true, default_value = "")]
    /// Repository name.
    pub repo: String,

    #[arg(
        long,
        env = "GITHUB_TOKEN",
        global = true,
        hide_env_values = true
    )]
    /// GitHub personal access token. Requests are unauthenticated without
    /// one.
    pub token: Option<String>,

    #[arg(
        long,
        env = "GRT_HOST",
        global = true,
        default_value = DEFAULT_HOST
    )]
    /// GitHub host. Anything other than github.com is treated as a GitHub
    /// Enterprise instance.
    pub host: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release workflow subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assign a milestone to the closed issues referenced by a commit range.
    Milestone(MilestoneArgs),

    /// Print the changelog of a milestone.
    Changelog(ChangelogArgs),

    /// Publish a release with the milestone's changelog.
    Release(ReleaseArgs),
}

#[derive(clap::Args, Debug)]
pub struct MilestoneArgs {
    #[arg(long)]
    /// Start of the commit range (exclusive).
    pub from: String,

    #[arg(long, default_value = DEFAULT_TO_REF)]
    /// End of the commit range (inclusive).
    pub to: String,

    #[arg(long, default_value_t = false)]
    /// Replace a different milestone already set on an issue.
    pub force: bool,

    #[arg(long, default_value_t = false)]
    /// Log changes without sending them.
    pub dry_run: bool,

    /// Title of the milestone to assign.
    pub milestone: String,
}

#[derive(clap::Args, Debug)]
pub struct ChangelogArgs {
    #[arg(long, default_value_t = false)]
    /// Render markdown headings and issue links.
    pub md: bool,

    #[arg(
        long = "skip-label",
        env = "GRT_SKIPLABELS",
        value_delimiter = ','
    )]
    /// Leave out issues carrying this label. May be repeated.
    pub skip_labels: Vec<String>,

    /// Release name or milestone title.
    pub release: String,
}

#[derive(clap::Args, Debug)]
pub struct ReleaseArgs {
    #[arg(long, value_name = "NAME")]
    /// Release name when it differs from the milestone. Anything other
    /// than the milestone title is published as a prerelease.
    pub to: Option<String>,

    #[arg(
        long = "skip-label",
        env = "GRT_SKIPLABELS",
        value_delimiter = ','
    )]
    /// Leave out issues carrying this label. May be repeated.
    pub skip_labels: Vec<String>,

    #[arg(long, default_value_t = false)]
    /// Log the release instead of publishing it.
    pub dry_run: bool,

    /// Milestone title, or a release name whose part before the first
    /// `-` is the milestone title.
    pub milestone: String,
}

impl Args {
    /// Configure the remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let owner = self.owner.trim();
        let repo = self.repo.trim();

        if owner.is_empty() {
            return Err(
                GrtError::invalid_args("must set --owner or GRT_OWNER").into()
            );
        }

        if repo.is_empty() {
            return Err(
                GrtError::invalid_args("must set --repo or GRT_REPO").into()
            );
        }

        let host = self.host.trim();
        validate_host(host)?;

        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::from(t.to_string()));

        Ok(RemoteConfig::new(host, owner, repo, token))
    }
}

impl Command {
    pub fn dry_run(&self) -> bool {
        match self {
            Command::Milestone(args) => args.dry_run,
            Command::Changelog(_) => false,
            Command::Release(args) => args.dry_run,
        }
    }
}

impl From<MilestoneArgs> for MilestoneSyncRequest {
    fn from(args: MilestoneArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            milestone: args.milestone,
            force: args.force,
        }
    }
}

impl From<ReleaseArgs> for PublishRequest {
    fn from(args: ReleaseArgs) -> Self {
        Self {
            milestone: args.milestone,
            release_name: args.to,
            skip_labels: args.skip_labels,
        }
    }
}

impl ChangelogArgs {
    /// Options for printing the changelog on its own, heading included.
    pub fn options(&self) -> Result<ChangelogOptions> {
        ChangelogOptions::builder()
            .markdown(self.md)
            .with_subject(true)
            .skip_labels(self.skip_labels.clone())
            .build()
    }
}

/// Validate that `host` is a bare host name, optionally with a port.
fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(GrtError::invalid_args("host must not be empty").into());
    }

    let parsed =
        Url::parse(&format!("https://{host}")).map_err(GrtError::from)?;

    if parsed.path() != "/"
        || parsed.query().is_some()
        || !parsed.username().is_empty()
    {
        return Err(
            GrtError::invalid_args(format!("invalid host: {host}")).into()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn parses_milestone_command() {
        let args = parse(&[
            "grt",
            "--owner",
            "acme",
            "--repo",
            "rocket",
            "milestone",
            "--from",
            "v0.9.0",
            "--force",
            "v1.0.0",
        ]);

        assert!(!args.command.dry_run());

        let Command::Milestone(milestone_args) = args.command else {
            panic!("expected milestone command");
        };

        let req = MilestoneSyncRequest::from(milestone_args);
        assert_eq!(
            req,
            MilestoneSyncRequest {
                from: "v0.9.0".into(),
                to: DEFAULT_TO_REF.into(),
                milestone: "v1.0.0".into(),
                force: true,
            }
        );
    }

    #[test]
    fn milestone_requires_from() {
        let result = Args::try_parse_from([
            "grt", "--owner", "acme", "--repo", "rocket", "milestone", "v1.0.0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_changelog_command() {
        let args = parse(&[
            "grt",
            "changelog",
            "--md",
            "--skip-label",
            "wontfix",
            "--skip-label",
            "duplicate,invalid",
            "v1.0.0-rc.1",
            "--owner",
            "acme",
            "--repo",
            "rocket",
        ]);

        assert!(!args.command.dry_run());

        let Command::Changelog(changelog_args) = args.command else {
            panic!("expected changelog command");
        };

        assert_eq!(changelog_args.release, "v1.0.0-rc.1");

        let options = changelog_args.options().unwrap();
        assert!(options.markdown);
        assert!(options.with_subject);
        assert_eq!(
            options.skip_labels,
            vec!["wontfix", "duplicate", "invalid"]
        );
    }

    #[test]
    fn parses_release_command() {
        let args = parse(&[
            "grt",
            "--owner",
            "acme",
            "--repo",
            "rocket",
            "release",
            "--dry-run",
            "v1.0.0",
        ]);

        assert!(args.command.dry_run());

        let Command::Release(release_args) = args.command else {
            panic!("expected release command");
        };

        let req = PublishRequest::from(release_args);
        assert_eq!(req.milestone, "v1.0.0");
        assert_eq!(req.release_name, None);
    }

    #[test]
    fn release_to_names_the_release() {
        let args = parse(&[
            "grt",
            "--owner",
            "acme",
            "--repo",
            "rocket",
            "release",
            "--to",
            "v1.0.0-rc.1",
            "v1.0.0",
        ]);

        assert!(!args.command.dry_run());

        let Command::Release(release_args) = args.command else {
            panic!("expected release command");
        };

        let req = PublishRequest::from(release_args);
        assert_eq!(req.milestone, "v1.0.0");
        assert_eq!(req.release_name.as_deref(), Some("v1.0.0-rc.1"));
    }

    #[test]
    fn remote_for_public_github() {
        let mut args = parse(&[
            "grt", "--owner", "acme", "--repo", "rocket", "changelog", "v1.0.0",
        ]);
        args.host = DEFAULT_HOST.into();
        args.token = Some("secret".into());

        let remote = args.get_remote().unwrap();

        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.repo, "rocket");
        assert_eq!(remote.api_url, "https://api.github.com");
        assert_eq!(
            remote.release_link_base_url,
            "https://github.com/acme/rocket/releases"
        );
        assert_eq!(remote.token.unwrap().expose_secret(), "secret");
    }

    #[test]
    fn remote_for_enterprise_host() {
        let mut args = parse(&[
            "grt", "--owner", "acme", "--repo", "rocket", "changelog", "v1.0.0",
        ]);
        args.host = "github.example.com".into();
        args.token = Some("  ".into());

        let remote = args.get_remote().unwrap();

        assert_eq!(remote.api_url, "https://github.example.com/api/v3");
        assert!(remote.token.is_none());
    }

    #[test]
    fn remote_requires_owner_and_repo() {
        let mut args = parse(&[
            "grt", "--owner", "acme", "--repo", "rocket", "changelog", "v1.0.0",
        ]);

        args.owner = "".into();
        assert!(args.get_remote().is_err());

        args.owner = "acme".into();
        args.repo = " ".into();
        assert!(args.get_remote().is_err());
    }

    #[test]
    fn rejects_invalid_hosts() {
        assert!(validate_host("github.com").is_ok());
        assert!(validate_host("ghe.local:8443").is_ok());
        assert!(validate_host("").is_err());
        assert!(validate_host("bad host").is_err());
        assert!(validate_host("github.com/acme").is_err());
        assert!(validate_host("user@github.com").is_err());
    }
}
