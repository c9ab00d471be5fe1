//! Command execution for grt.
//!
//! Each subcommand is one step of the release workflow:
//!
//! - **milestone**: collect the closed issues referenced by a commit range
//!   into a milestone
//! - **changelog**: render the changelog of a milestone from its issues
//! - **release**: publish a release with that changelog as body and close
//!   the milestone once the final release is out
//!
//! Commands receive a [`crate::forge::manager::ForgeManager`]; dry-run is
//! decided when the manager is built and every mutating call goes through
//! it.

/// Helpers shared by the commands.
pub mod common;

/// Changelog rendering for a release or milestone.
pub mod changelog;

/// Milestone synchronization from a commit range.
pub mod milestone;

/// Release publication.
pub mod release;

#[cfg(test)]
mod tests;
