use crate::table::column_table::ColumnTable;
use crate::table::error::TableError;
use log::info;
use polars::io::SerReader;
use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::Path;

/// Reads a column data file straight into a `DataFrame`.
pub fn read_coldat_to_dataframe(path: impl AsRef<Path>) -> Result<DataFrame, TableError> {
    ColumnTable::read_file(path)?.to_dataframe()
}

/// Converts `df` to a [`ColumnTable`] and writes it as a column data file.
pub fn save_dataframe_as_coldat(path: impl AsRef<Path>, df: &DataFrame) -> Result<(), TableError> {
    ColumnTable::from_dataframe(df)?.write_file(path)
}

pub fn read_csv_to_dataframe(path: impl AsRef<Path>) -> Result<DataFrame, TableError> {
    let path = path.as_ref();
    info!("Attempting to read CSV data from: {}", path.display());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    info!(
        "Read {} columns and {} rows from {}",
        df.width(),
        df.height(),
        path.display()
    );
    Ok(df)
}

pub fn write_dataframe_to_csv(path: impl AsRef<Path>, df: &mut DataFrame) -> Result<(), TableError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!("Wrote CSV data to {}", path.display());
    Ok(())
}
