use crate::prune::PruneError;
use crate::table::TableError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Prune(#[from] PruneError),
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unsupported file extension for {0}. Expected .csv or a column data file.")]
    UnsupportedExtension(PathBuf),
    #[error(transparent)]
    Table(#[from] TableError),
}
