use crate::prune::error::PruneError;
use crate::prune::file_series::FileSeries;
use crate::prune::prune_mode::PruneMode;
use crate::prune::report::PruneReport;
use log::info;
use std::path::{Path, PathBuf};

/// Prunes several numbered file families that share a directory and a range.
///
/// Headers are handled one after another in the given order. Each header is
/// independent of the others, and re-running a pruner only finds missing files.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPruner {
    series: Vec<FileSeries>,
    mode: PruneMode,
}

impl SeriesPruner {
    pub fn new<S: Into<String>>(
        directory: impl AsRef<Path>,
        headers: impl IntoIterator<Item = S>,
        start: i64,
        end: i64,
        stride: i64,
        mode: PruneMode,
    ) -> Result<Self, PruneError> {
        let directory: PathBuf = directory.as_ref().to_path_buf();
        let series = headers
            .into_iter()
            .map(|header| FileSeries::new(directory.clone(), header, start, end, stride))
            .collect::<Result<Vec<FileSeries>, PruneError>>()?;
        Ok(SeriesPruner { series, mode })
    }

    pub fn series(&self) -> &[FileSeries] {
        &self.series
    }

    pub fn mode(&self) -> PruneMode {
        self.mode
    }

    pub fn run(&self) -> PruneReport {
        let mut report = PruneReport::default();
        for series in &self.series {
            info!(
                "Pruning '{}' in {} ({})",
                series.header(),
                series.directory().display(),
                self.mode
            );
            let header_report = match self.mode {
                PruneMode::Series => series.delete_series(),
                PruneMode::AllBut => series.delete_except(),
            };
            report.merge(header_report);
        }
        info!(
            "Deleted {} files, {} members were not present, {} deletions failed",
            report.deleted.len(),
            report.missing,
            report.failed.len()
        );
        report
    }
}

/// Runs one prune job: [`FileSeries::delete_series`] or
/// [`FileSeries::delete_except`] for every header.
pub fn run<S: Into<String>>(
    directory: impl AsRef<Path>,
    headers: impl IntoIterator<Item = S>,
    start: i64,
    end: i64,
    stride: i64,
    mode: PruneMode,
) -> Result<PruneReport, PruneError> {
    Ok(SeriesPruner::new(directory, headers, start, end, stride, mode)?.run())
}
