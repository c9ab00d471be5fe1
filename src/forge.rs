//! Interface to the hosting service that owns milestones, issues, commits
//! and releases.
//!
//! Commands talk to a [`manager::ForgeManager`], which wraps a
//! [`traits::Forge`] implementation and applies dry-run handling to every
//! mutating call.

/// Configuration and authentication for the remote.
pub mod config;

/// Builds a manager around the configured forge implementation.
pub mod factory;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Dry-run aware wrapper used by commands.
pub mod manager;

/// Common traits for forge platform abstraction.
pub mod traits;

/// Shared data types for milestones, issues, commits and releases.
pub mod types;
