//! Common functionality shared between commands
use log::*;

use crate::{
    Result,
    error::GrtError,
    forge::{manager::ForgeManager, types::Milestone},
};

/// Find the milestone by title, failing when it does not exist.
pub async fn find_required_milestone(
    manager: &ForgeManager,
    title: &str,
) -> Result<Milestone> {
    let milestone = manager
        .find_milestone(title)
        .await?
        .ok_or_else(|| GrtError::milestone_not_found(title))?;

    debug!(
        "found milestone {} (#{}, {:?})",
        milestone.title, milestone.number, milestone.state
    );

    Ok(milestone)
}
