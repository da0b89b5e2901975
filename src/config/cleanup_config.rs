use crate::prune::PruneMode;
use crate::validation::prune_config_validation::validate_headers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// A list of prune jobs, run in order.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CleanupConfig {
    #[validate(length(min = 1), nested)]
    pub jobs: Vec<PruneConfig>,
}

/// One prune job: the numbered families `{directory}/{header}.{n}` for every
/// header, limited to `[start, end]`.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PruneConfig {
    pub directory: PathBuf,
    #[validate(length(min = 1), custom(function = "validate_headers"))]
    pub headers: Vec<String>,
    pub start: i64,
    pub end: i64,
    /// Distance between kept or deleted members. Defaults to every number.
    #[serde(default = "default_stride")]
    #[validate(range(min = 1))]
    pub stride: i64,
    #[serde(default)]
    pub mode: PruneMode,
}

fn default_stride() -> i64 {
    1
}
