use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// What a prune run did. Deletion failures are collected here instead of
/// aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PruneReport {
    pub deleted: Vec<PathBuf>,
    /// Members of the series that had no file on disk.
    pub missing: usize,
    pub failed: Vec<DeletionFailure>,
    /// Headers left untouched because an all-but run was given stride 1.
    pub guarded: Vec<String>,
}

impl PruneReport {
    pub fn merge(&mut self, other: PruneReport) {
        self.deleted.extend(other.deleted);
        self.missing += other.missing;
        self.failed.extend(other.failed);
        self.guarded.extend(other.guarded);
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
