use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Table has no columns.")]
    NoColumns,
    #[error("Column '{0}' appears more than once.")]
    DuplicateColumn(String),
    #[error("Column '{column}' has {found} values, expected {expected}.")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("Row has {found} values, table has {expected} columns.")]
    RowWidthMismatch { expected: usize, found: usize },
    #[error("Row is missing a value for column '{0}'.")]
    MissingColumnInRow(String),
    #[error("Row contains column '{0}', which is not part of the table.")]
    UnknownColumnInRow(String),
    #[error("Column order {given:?} is not a permutation of {current:?}.")]
    ColumnOrderMismatch {
        given: Vec<String>,
        current: Vec<String>,
    },
    #[error("Column '{column}' has unsupported data type {dtype}.")]
    UnsupportedDataType { column: String, dtype: String },
    #[error("Could not parse {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("Cell '{value}' in column '{column}' can not be written: {reason}")]
    UnwritableCell {
        column: String,
        value: String,
        reason: String,
    },
    #[error("Column name '{column}' can not be written: {reason}")]
    UnwritableColumn { column: String, reason: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
