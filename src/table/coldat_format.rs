//! Plain-text column data files.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! case  alpha  CL
//! m15   10     0.125
//! m15   20     0.25
//! ```
//!
//! The first significant line names the columns, every later one is a row.
//! Fields are whitespace separated and parsed as int, float, bool, `null`,
//! or else string, in that order. A field in double quotes is always a
//! string, so `"10"` and `""` are written that way.

use crate::table::cell_value::CellValue;
use crate::table::column_table::ColumnTable;
use crate::table::error::TableError;
use log::info;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const COMMENT_PREFIX: char = '#';
const QUOTE: char = '"';

pub(crate) fn parse_field(field: &str) -> CellValue {
    if field.len() >= 2
        && let Some(quoted) = field.strip_prefix(QUOTE).and_then(|f| f.strip_suffix(QUOTE))
    {
        CellValue::String(quoted.to_string())
    } else if let Ok(i) = field.parse::<i64>() {
        CellValue::Int(i)
    } else if let Ok(f) = field.parse::<f64>() {
        CellValue::Float(f)
    } else if let Ok(b) = field.parse::<bool>() {
        CellValue::Bool(b)
    } else if field == "null" {
        CellValue::Null
    } else {
        CellValue::String(field.to_string())
    }
}

fn format_field(column: &str, value: &CellValue) -> Result<String, TableError> {
    let unwritable = |reason: &str| TableError::UnwritableCell {
        column: column.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if let CellValue::String(s) = value {
        if s.chars().any(char::is_whitespace) {
            return Err(unwritable("strings must not contain whitespace"));
        }
        if s.is_empty() || s.starts_with(COMMENT_PREFIX) || parse_field(s) != *value {
            return Ok(format!("{QUOTE}{s}{QUOTE}"));
        }
    }
    Ok(value.to_string())
}

fn check_column_name(name: &str) -> Result<(), TableError> {
    let unwritable = |reason: &str| TableError::UnwritableColumn {
        column: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(unwritable("column name is empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(unwritable("column name contains whitespace"));
    }
    if name.starts_with(COMMENT_PREFIX) {
        return Err(unwritable("column name starts with a comment marker"));
    }
    Ok(())
}

impl ColumnTable {
    /// Parses a column data file from its text.
    pub(crate) fn parse_coldat(text: &str, path: &Path) -> Result<ColumnTable, TableError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX));

        let (header_line, header) = lines.next().ok_or(TableError::NoColumns)?;
        let mut table =
            ColumnTable::new(header.split_whitespace()).map_err(|err| TableError::Parse {
                path: path.to_path_buf(),
                line: header_line,
                reason: err.to_string(),
            })?;

        let width = table.width();
        for (line_number, line) in lines {
            let values: Vec<CellValue> = line.split_whitespace().map(parse_field).collect();
            let found = values.len();
            table
                .push_values(values)
                .map_err(|_| TableError::Parse {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: format!("expected {width} fields, found {found}"),
                })?;
        }
        Ok(table)
    }

    /// Loads a table from a column data file.
    pub fn read_file(path: impl AsRef<Path>) -> Result<ColumnTable, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = Self::parse_coldat(&text, path)?;
        info!(
            "Read table with {} columns and {} rows from {}",
            table.width(),
            table.height(),
            path.display()
        );
        Ok(table)
    }

    /// Writes the table as a column data file, replacing an existing file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let path = path.as_ref();
        if self.width() == 0 {
            return Err(TableError::NoColumns);
        }

        // Render first so a bad name or cell does not leave a truncated file behind.
        for column in self.params() {
            check_column_name(column)?;
        }
        let mut body = Vec::with_capacity(self.height());
        for row in self.rows() {
            let fields = self
                .params()
                .iter()
                .zip(row)
                .map(|(column, value)| format_field(column, value))
                .collect::<Result<Vec<String>, TableError>>()?;
            body.push(fields.join(" "));
        }

        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", self.params().join(" "))?;
        for line in body {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        info!(
            "Wrote table with {} columns and {} rows to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_suite::fixtures::trajectory_table;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temporary directory")
    }

    #[rstest]
    #[case("42", CellValue::Int(42))]
    #[case("-3", CellValue::Int(-3))]
    #[case("0.15", CellValue::Float(0.15))]
    #[case("1e5", CellValue::Float(1e5))]
    #[case("1.0", CellValue::Float(1.0))]
    #[case("false", CellValue::Bool(false))]
    #[case("null", CellValue::Null)]
    #[case("m0.15a180.0", CellValue::from("m0.15a180.0"))]
    #[case("\"10\"", CellValue::from("10"))]
    #[case("\"\"", CellValue::from(""))]
    #[case("\"", CellValue::from("\""))]
    fn test_parse_field(#[case] field: &str, #[case] expected: CellValue) {
        assert_eq!(parse_field(field), expected);
    }

    #[rstest]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# generated\n\ncase alpha CL\n# row comment\nm15 10 0.125\n\nm15   20\t0.25\n";
        let table = ColumnTable::parse_coldat(text, &PathBuf::from("mem")).unwrap();

        assert_eq!(table.params(), ["case", "alpha", "CL"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.get(1, "CL"), Some(&CellValue::Float(0.25)));
    }

    #[rstest]
    fn test_parse_wrong_field_count_reports_line() {
        let text = "a b\n1 2\n3\n";
        let err = ColumnTable::parse_coldat(text, &PathBuf::from("mem")).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 3, .. }));
    }

    #[rstest]
    fn test_parse_empty_file() {
        let err = ColumnTable::parse_coldat("# nothing\n", &PathBuf::from("mem")).unwrap_err();
        assert!(matches!(err, TableError::NoColumns));
    }

    #[rstest]
    fn test_write_then_read(temp_dir: TempDir, trajectory_table: ColumnTable) {
        let path = temp_dir.path().join("trajectory.dat");
        trajectory_table.write_file(&path).unwrap();

        let read = ColumnTable::read_file(&path).unwrap();
        assert_eq!(read, trajectory_table);
    }

    #[rstest]
    fn test_write_rejects_whitespace_strings(temp_dir: TempDir) {
        let table =
            ColumnTable::from_columns([("label", vec![CellValue::from("two words")])]).unwrap();
        let path = temp_dir.path().join("bad.dat");

        let err = table.write_file(&path).unwrap_err();
        assert!(matches!(err, TableError::UnwritableCell { .. }));
        assert!(!path.exists());
    }

    #[rstest]
    #[case(CellValue::from("10"), "\"10\"")]
    #[case(CellValue::from("true"), "\"true\"")]
    #[case(CellValue::from("null"), "\"null\"")]
    #[case(CellValue::from(""), "\"\"")]
    #[case(CellValue::from("#3"), "\"#3\"")]
    #[case(CellValue::from("\"m15\""), "\"\"m15\"\"")]
    #[case(CellValue::from("m15"), "m15")]
    fn test_format_field_quotes_ambiguous_strings(#[case] value: CellValue, #[case] field: &str) {
        assert_eq!(format_field("case", &value).unwrap(), field);
        assert_eq!(parse_field(field), value);
    }

    #[rstest]
    fn test_write_then_read_strings_that_look_like_other_kinds(temp_dir: TempDir) {
        let table = ColumnTable::from_columns([
            (
                "case",
                vec![
                    CellValue::from("#1"),
                    CellValue::from("10"),
                    CellValue::from(""),
                ],
            ),
            (
                "CL",
                vec![
                    CellValue::Float(0.5),
                    CellValue::Float(0.25),
                    CellValue::Null,
                ],
            ),
        ])
        .unwrap();
        let path = temp_dir.path().join("cases.dat");

        table.write_file(&path).unwrap();

        assert_eq!(ColumnTable::read_file(&path).unwrap(), table);
    }

    #[rstest]
    #[case("Mach number")]
    #[case("")]
    #[case("#run")]
    fn test_write_rejects_unreadable_column_names(temp_dir: TempDir, #[case] name: &str) {
        let table = ColumnTable::from_columns([
            (name, vec![CellValue::Int(1), CellValue::Int(2)]),
            ("CL", vec![CellValue::Int(3), CellValue::Int(4)]),
        ])
        .unwrap();
        let path = temp_dir.path().join("bad.dat");

        let err = table.write_file(&path).unwrap_err();

        assert!(matches!(
            err,
            TableError::UnwritableColumn { ref column, .. } if column == name
        ));
        assert!(!path.exists());
    }
}
