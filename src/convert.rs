use crate::error::ConversionError;
use crate::table::{
    read_coldat_to_dataframe, read_csv_to_dataframe, save_dataframe_as_coldat,
    write_dataframe_to_csv,
};
use log::info;
use polars::prelude::DataFrame;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Csv,
    ColDat,
}

impl TableFormat {
    /// `.csv` is CSV, `.dat`/`.cdat`/`.coldat` and extension-less files are column data.
    fn from_path(path: &Path) -> Result<Self, ConversionError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            None | Some("dat") | Some("cdat") | Some("coldat") => Ok(TableFormat::ColDat),
            Some(_) => Err(ConversionError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

/// Converts a table file into another format, going through a `DataFrame`.
/// The formats are picked from the file extensions.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), ConversionError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let input_format = TableFormat::from_path(input)?;
    let output_format = TableFormat::from_path(output)?;

    let mut df: DataFrame = match input_format {
        TableFormat::Csv => read_csv_to_dataframe(input)?,
        TableFormat::ColDat => read_coldat_to_dataframe(input)?,
    };
    match output_format {
        TableFormat::Csv => write_dataframe_to_csv(output, &mut df)?,
        TableFormat::ColDat => save_dataframe_as_coldat(output, &df)?,
    }

    info!(
        "Converted {} to {} ({} columns, {} rows)",
        input.display(),
        output.display(),
        df.width(),
        df.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnTable;
    use crate::test_suite::fixtures::trajectory_table;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("run/loads.csv", TableFormat::Csv)]
    #[case("run/loads.dat", TableFormat::ColDat)]
    #[case("run/EFT1CFD", TableFormat::ColDat)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: TableFormat) {
        assert_eq!(TableFormat::from_path(&PathBuf::from(path)).unwrap(), expected);
    }

    #[rstest]
    fn test_format_unsupported() {
        assert!(matches!(
            TableFormat::from_path(&PathBuf::from("loads.xlsx")),
            Err(ConversionError::UnsupportedExtension(_))
        ));
    }

    #[rstest]
    fn test_convert_coldat_to_csv_and_back(trajectory_table: ColumnTable) {
        let dir = tempfile::tempdir().unwrap();
        let coldat = dir.path().join("trajectory.dat");
        let csv = dir.path().join("trajectory.csv");
        let back = dir.path().join("trajectory_back.dat");
        trajectory_table.write_file(&coldat).unwrap();

        convert_file(&coldat, &csv).unwrap();
        convert_file(&csv, &back).unwrap();

        assert_eq!(ColumnTable::read_file(&back).unwrap(), trajectory_table);
    }
}
