use crate::prune::error::PruneError;
use crate::prune::report::{DeletionFailure, PruneReport};
use crate::prune::series::{build_series, full_range};
use log::{debug, error, info, warn};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf, is_separator};

/// A numbered file family `{directory}/{header}.{n}` restricted to
/// `[start, end]`, with `stride` selecting the series inside that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSeries {
    directory: PathBuf,
    header: String,
    start: i64,
    end: i64,
    stride: i64,
    members: Vec<i64>,
}

impl FileSeries {
    pub fn new(
        directory: impl Into<PathBuf>,
        header: impl Into<String>,
        start: i64,
        end: i64,
        stride: i64,
    ) -> Result<Self, PruneError> {
        let header = header.into();
        check_header(&header)?;
        let members = build_series(start, end, stride)?;
        Ok(FileSeries {
            directory: directory.into(),
            header,
            start,
            end,
            stride,
            members,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn stride(&self) -> i64 {
        self.stride
    }

    pub fn members(&self) -> &[i64] {
        &self.members
    }

    pub fn path_of(&self, number: i64) -> PathBuf {
        self.directory.join(format!("{}.{}", self.header, number))
    }

    /// Deletes every existing file of the stride series.
    pub fn delete_series(&self) -> PruneReport {
        let mut report = PruneReport::default();
        for &number in &self.members {
            self.delete_member(number, &mut report, |p| fs::remove_file(p));
        }
        report
    }

    /// Deletes every file in `[start, end]` that is not part of the stride
    /// series. With stride 1 the series covers the whole range, so nothing is
    /// deleted and a warning is logged instead.
    pub fn delete_except(&self) -> PruneReport {
        self.delete_except_with(|p| fs::remove_file(p))
    }

    fn delete_except_with(&self, remove: impl Fn(&Path) -> io::Result<()>) -> PruneReport {
        let mut report = PruneReport::default();
        if self.stride == 1 {
            warn!(
                "No files will be deleted in series '{}': stride 1 keeps every member of [{}, {}].",
                self.header, self.start, self.end
            );
            report.guarded.push(self.header.clone());
            return report;
        }

        let keep: HashSet<i64> = self.members.iter().copied().collect();
        for number in full_range(self.start, self.end).filter(|n| !keep.contains(n)) {
            self.delete_member(number, &mut report, &remove);
        }
        report
    }

    fn delete_member(
        &self,
        number: i64,
        report: &mut PruneReport,
        remove: impl Fn(&Path) -> io::Result<()>,
    ) {
        let path = self.path_of(number);
        if !path.is_file() {
            debug!("Skipping {}: no such file", path.display());
            report.missing += 1;
            return;
        }

        info!("Deleting: {}.{}", self.header, number);
        match remove(&path) {
            Ok(()) => report.deleted.push(path),
            Err(err) => {
                error!("Could not delete {}: {}", path.display(), err);
                report.failed.push(DeletionFailure {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Numbers of the files of this family that exist in `[start, end]`, sorted.
    pub fn existing_members(&self) -> Result<Vec<i64>, PruneError> {
        scan_members(&self.directory, &self.header, self.start, self.end)
    }
}

/// Numbers `n` of the regular files `{directory}/{header}.{n}` with `n` in
/// `[start, end]`, sorted. Nothing is deleted.
pub fn scan_members(
    directory: &Path,
    header: &str,
    start: i64,
    end: i64,
) -> Result<Vec<i64>, PruneError> {
    check_header(header)?;
    let pattern = Regex::new(&format!(r"^{}\.(-?\d+)$", regex::escape(header))).map_err(
        |err| PruneError::InvalidHeader {
            header: header.to_string(),
            reason: err.to_string(),
        },
    )?;
    let scan_error = |source| PruneError::Scan {
        path: directory.to_path_buf(),
        source,
    };
    let (low, high) = (start.min(end), end);

    let mut numbers = Vec::new();
    for entry in fs::read_dir(directory).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(captures) = file_name.to_str().and_then(|name| pattern.captures(name)) else {
            continue;
        };
        if let Ok(number) = captures[1].parse::<i64>()
            && (low..=high).contains(&number)
        {
            numbers.push(number);
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

fn check_header(header: &str) -> Result<(), PruneError> {
    let invalid = |reason: &str| PruneError::InvalidHeader {
        header: header.to_string(),
        reason: reason.to_string(),
    };
    if header.is_empty() {
        return Err(invalid("header is empty"));
    }
    if header.chars().any(is_separator) {
        return Err(invalid("header must not contain a path separator"));
    }
    Ok(())
}
