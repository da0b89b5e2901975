mod cell_value;
mod coldat_format;
mod column_table;
mod conversion;
mod dataframe_io;
pub mod error;

pub use self::cell_value::CellValue;
pub use self::column_table::{ColumnTable, Row};
pub use self::dataframe_io::{
    read_coldat_to_dataframe, read_csv_to_dataframe, save_dataframe_as_coldat,
    write_dataframe_to_csv,
};
pub use self::error::TableError;
