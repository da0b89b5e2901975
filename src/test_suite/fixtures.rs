use crate::table::{CellValue, ColumnTable};
use rstest::fixture;
use std::fs::File;
use std::path::Path;

#[fixture]
pub(crate) fn trajectory_table() -> ColumnTable {
    ColumnTable::from_columns([
        (
            "case",
            vec![
                CellValue::from("m15"),
                CellValue::from("m15"),
                CellValue::from("m30"),
            ],
        ),
        (
            "alpha",
            vec![CellValue::Int(10), CellValue::Int(20), CellValue::Int(30)],
        ),
        (
            "CL",
            vec![
                CellValue::Float(0.125),
                CellValue::Float(0.25),
                CellValue::Float(0.375),
            ],
        ),
    ])
    .expect("Fixture table columns have equal length")
}

pub(crate) fn touch(path: &Path) {
    File::create(path).expect("Failed to create test file");
}

/// Creates empty files `{dir}/{header}.{n}` for every given number.
pub(crate) fn numbered_files(dir: &Path, header: &str, numbers: impl IntoIterator<Item = i64>) {
    for n in numbers {
        touch(&dir.join(format!("{header}.{n}")));
    }
}
