//! Release workflow helpers for GitHub hosted projects: milestone syncing
//! from commit history, changelog rendering and release publishing.
pub mod changelog;
pub mod cli;
pub mod command;
pub mod error;
pub mod forge;
pub mod references;
mod result;

pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
