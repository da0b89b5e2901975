use crate::config::{CleanupConfig, ConfigLoader, PruneConfig};
use crate::error::ConstructionError;
use crate::prune::SeriesPruner;
use log::info;
use std::path::Path;
use validator::Validate;

impl CleanupConfig {
    /// Loads and validates a cleanup config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConstructionError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConstructionError::NoConfigFileFound(path.to_path_buf()));
        }
        let config: CleanupConfig = ConfigLoader::load(path)?;
        config.validate()?;
        info!("Loaded {} prune jobs from {}", config.jobs.len(), path.display());
        Ok(config)
    }
}

impl TryFrom<PruneConfig> for SeriesPruner {
    type Error = ConstructionError;

    fn try_from(config: PruneConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(SeriesPruner::new(
            &config.directory,
            config.headers,
            config.start,
            config.end,
            config.stride,
            config.mode,
        )?)
    }
}

impl TryFrom<CleanupConfig> for Vec<SeriesPruner> {
    type Error = ConstructionError;

    fn try_from(config: CleanupConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        config
            .jobs
            .into_iter()
            .map(SeriesPruner::try_from)
            .collect()
    }
}
