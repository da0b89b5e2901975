use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Stride has to be at least 1, got {0}.")]
    InvalidStride(i64),
    #[error("Invalid file header '{header}': {reason}")]
    InvalidHeader { header: String, reason: String },
    #[error("Could not scan directory {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
}
