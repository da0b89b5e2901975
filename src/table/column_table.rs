use crate::table::cell_value::CellValue;
use crate::table::error::TableError;
use ordermap::OrderMap;
use std::collections::HashSet;

/// One table row keyed by column name.
pub type Row = OrderMap<String, CellValue>;

/// An ordered collection of named columns, stored row by row.
///
/// `params` is the only place the column order lives. Every row is stored
/// aligned to it, so reading a row back always yields the columns in the
/// order the table was built with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnTable {
    params: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ColumnTable {
    pub fn new<S: Into<String>>(params: impl IntoIterator<Item = S>) -> Result<Self, TableError> {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        check_unique(&params)?;
        Ok(ColumnTable {
            params,
            rows: Vec::new(),
        })
    }

    /// Builds a table from whole columns. All columns need the same length.
    pub fn from_columns<S: Into<String>>(
        columns: impl IntoIterator<Item = (S, Vec<CellValue>)>,
    ) -> Result<Self, TableError> {
        let (params, columns): (Vec<String>, Vec<Vec<CellValue>>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();
        check_unique(&params)?;

        let height = columns.first().map(Vec::len).unwrap_or(0);
        for (name, values) in params.iter().zip(columns.iter()) {
            if values.len() != height {
                return Err(TableError::RaggedColumns {
                    column: name.clone(),
                    expected: height,
                    found: values.len(),
                });
            }
        }

        let mut column_iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let rows = (0..height)
            .map(|_| column_iters.iter_mut().filter_map(Iterator::next).collect())
            .collect();

        Ok(ColumnTable { params, rows })
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn width(&self) -> usize {
        self.params.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p == name)
    }

    /// Appends a row given by name. The key order of `row` does not matter,
    /// but its key set has to match the table's columns exactly.
    pub fn push_row(&mut self, mut row: Row) -> Result<(), TableError> {
        let mut values = Vec::with_capacity(self.width());
        for param in &self.params {
            let value = row
                .remove(param)
                .ok_or_else(|| TableError::MissingColumnInRow(param.clone()))?;
            values.push(value);
        }
        if let Some((unknown, _)) = row.into_iter().next() {
            return Err(TableError::UnknownColumnInRow(unknown));
        }
        self.rows.push(values);
        Ok(())
    }

    /// Appends a row given positionally, in column order.
    pub fn push_values(&mut self, values: Vec<CellValue>) -> Result<(), TableError> {
        if values.len() != self.width() {
            return Err(TableError::RowWidthMismatch {
                expected: self.width(),
                found: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// All values of one column, top to bottom.
    pub fn values(&self, name: &str) -> Option<Vec<CellValue>> {
        self.column(name).map(|col| col.cloned().collect())
    }

    pub fn row(&self, index: usize) -> Option<Row> {
        self.rows.get(index).map(|values| {
            self.params
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect()
        })
    }

    /// Rows as positional slices, aligned to [`ColumnTable::params`].
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Re-asserts the column order. `order` has to be a permutation of the
    /// current columns; row storage is permuted along with it.
    pub fn set_params<S: AsRef<str>>(&mut self, order: &[S]) -> Result<(), TableError> {
        let mismatch = || TableError::ColumnOrderMismatch {
            given: order.iter().map(|s| s.as_ref().to_string()).collect(),
            current: self.params.clone(),
        };
        if order.len() != self.params.len() {
            return Err(mismatch());
        }

        let mut permutation = Vec::with_capacity(order.len());
        let mut seen = HashSet::new();
        for name in order {
            let idx = self.column_index(name.as_ref()).ok_or_else(mismatch)?;
            if !seen.insert(idx) {
                return Err(mismatch());
            }
            permutation.push(idx);
        }

        if permutation.iter().enumerate().all(|(i, p)| i == *p) {
            return Ok(());
        }

        self.params = permutation.iter().map(|&i| self.params[i].clone()).collect();
        for row in self.rows.iter_mut() {
            *row = permutation.iter().map(|&i| row[i].clone()).collect();
        }
        Ok(())
    }
}

fn check_unique(params: &[String]) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    match params.iter().find(|p| !seen.insert(p.as_str())) {
        Some(duplicate) => Err(TableError::DuplicateColumn(duplicate.clone())),
        None => Ok(()),
    }
}
