pub mod config;
pub mod convert;
pub mod error;
pub mod prune;
pub mod table;
#[cfg(test)]
mod test_suite;
mod validation;

pub use convert::convert_file;
pub use prune::{FileSeries, PruneMode, PruneReport, SeriesPruner, scan_members};
pub use table::{CellValue, ColumnTable};
