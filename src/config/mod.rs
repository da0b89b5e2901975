mod cleanup_config;
pub use self::cleanup_config::{CleanupConfig, PruneConfig};
mod config_loader;
pub use self::config_loader::ConfigLoader;
mod try_from_config;
