use crate::table::cell_value::CellValue;
use crate::table::column_table::ColumnTable;
use crate::table::error::TableError;
use log::{debug, info};
use polars::datatypes::AnyValue;
use polars::frame::DataFrame;
use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

impl ColumnTable {
    /// Converts the table into a polars `DataFrame` with the same column order
    /// and the same cell values.
    ///
    /// Ints mixed with floats end up as `Float64`. Any other column that mixes
    /// value kinds (say strings and ints, or bools and ints) is turned into a
    /// string column, and an info record names it.
    pub fn to_dataframe(&self) -> Result<DataFrame, TableError> {
        if self.width() == 0 {
            return Err(TableError::NoColumns);
        }

        let columns = self
            .params()
            .iter()
            .map(|name| {
                let values: Vec<AnyValue> = self
                    .column(name)
                    .into_iter()
                    .flatten()
                    .map(CellValue::as_any_value)
                    .collect();

                let series = if mixes_value_kinds(&values) {
                    info!(
                        "Column {name} mixes value kinds. Its values have been turned into strings."
                    );
                    self.stringified_column(name)
                } else {
                    Series::from_any_values(name.as_str().into(), &values, false)
                        .unwrap_or_else(|_| {
                            info!(
                                "Column {name} contained values without a common type. These have been turned into strings."
                            );
                            self.stringified_column(name)
                        })
                };
                series.into_column()
            })
            .collect::<Vec<Column>>();

        let df = DataFrame::new(columns)?;
        debug!(
            "Converted table with {} columns and {} rows to DataFrame",
            df.width(),
            df.height()
        );
        Ok(df)
    }

    /// Builds a table from a polars `DataFrame`, row by row in index order.
    ///
    /// The column order is taken from the DataFrame up front and asserted
    /// again once all rows are in.
    pub fn from_dataframe(df: &DataFrame) -> Result<ColumnTable, TableError> {
        let keys: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        if keys.is_empty() {
            return Err(TableError::NoColumns);
        }

        let mut table = ColumnTable::new(keys.iter().cloned())?;
        let columns = df.get_columns();
        for i in 0..df.height() {
            let row = columns
                .iter()
                .map(|col| {
                    let value = col.get(i)?;
                    CellValue::from_any_value(&value).ok_or_else(|| {
                        TableError::UnsupportedDataType {
                            column: col.name().to_string(),
                            dtype: col.dtype().to_string(),
                        }
                    })
                })
                .collect::<Result<Vec<CellValue>, TableError>>()?;
            table.push_values(row)?;
        }
        table.set_params(&keys)?;

        debug!(
            "Converted DataFrame with {} columns and {} rows to table",
            table.width(),
            table.height()
        );
        Ok(table)
    }
}

impl ColumnTable {
    fn stringified_column(&self, name: &str) -> Series {
        let stringified: Vec<Option<String>> = self
            .column(name)
            .into_iter()
            .flatten()
            .map(|cell| (!cell.is_null()).then(|| cell.to_string()))
            .collect();
        Series::new(name.into(), stringified)
    }
}

/// True when the non-null values are not all of one kind. Ints and floats
/// count as one numeric kind.
fn mixes_value_kinds(values: &[AnyValue]) -> bool {
    let mut kinds = values.iter().filter_map(|value| match value {
        AnyValue::Null => None,
        AnyValue::Int64(_) | AnyValue::Float64(_) => Some(0),
        AnyValue::Boolean(_) => Some(1),
        _ => Some(2),
    });
    kinds
        .next()
        .is_some_and(|first| kinds.any(|kind| kind != first))
}

impl TryFrom<&ColumnTable> for DataFrame {
    type Error = TableError;

    fn try_from(table: &ColumnTable) -> Result<Self, Self::Error> {
        table.to_dataframe()
    }
}

impl TryFrom<&DataFrame> for ColumnTable {
    type Error = TableError;

    fn try_from(df: &DataFrame) -> Result<Self, Self::Error> {
        ColumnTable::from_dataframe(df)
    }
}
