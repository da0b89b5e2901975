pub mod error;
mod file_series;
mod prune_mode;
mod pruner;
mod report;
mod series;

pub use self::error::PruneError;
pub use self::file_series::{FileSeries, scan_members};
pub use self::prune_mode::PruneMode;
pub use self::pruner::{SeriesPruner, run};
pub use self::report::{DeletionFailure, PruneReport};
pub use self::series::build_series;
