//! Factory for creating forge implementations based on configuration.

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        github::Github,
        manager::{ForgeManager, ForgeOptions},
        traits::Forge,
    },
};

/// Factory for creating forge implementations.
pub struct ForgeFactory;

impl ForgeFactory {
    /// Create a ForgeManager instance for the configured remote.
    pub fn create(
        remote: &RemoteConfig,
        options: ForgeOptions,
    ) -> Result<ForgeManager> {
        let forge = Self::create_github(remote)?;
        Ok(ForgeManager::new(forge, options))
    }

    fn create_github(config: &RemoteConfig) -> Result<Box<dyn Forge>> {
        Ok(Box::new(Github::new(config.clone())?))
    }
}
