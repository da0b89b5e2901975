use polars::datatypes::AnyValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// Represents the value of a single cell of a [`ColumnTable`](crate::table::ColumnTable).
///
/// Untagged so that plain JSON/YAML scalars deserialize into the matching variant.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub(crate) fn as_any_value(&self) -> AnyValue<'_> {
        match self {
            CellValue::Null => AnyValue::Null,
            CellValue::Int(i) => AnyValue::Int64(*i),
            CellValue::Float(f) => AnyValue::Float64(*f),
            CellValue::Bool(b) => AnyValue::Boolean(*b),
            CellValue::String(s) => AnyValue::String(s.as_str()),
        }
    }

    /// Returns `None` for dtypes that have no cell representation (dates, lists, structs, ...).
    pub(crate) fn from_any_value(value: &AnyValue) -> Option<CellValue> {
        match value {
            AnyValue::Null => Some(CellValue::Null),
            AnyValue::Boolean(b) => Some(CellValue::Bool(*b)),
            AnyValue::String(s) => Some(CellValue::String(s.to_string())),
            AnyValue::StringOwned(s) => Some(CellValue::String(s.to_string())),
            AnyValue::Int32(i) => Some(CellValue::Int(i64::from(*i))),
            AnyValue::Int64(i) => Some(CellValue::Int(*i)),
            AnyValue::UInt32(u) => Some(CellValue::Int(i64::from(*u))),
            AnyValue::UInt64(u) => i64::try_from(*u).ok().map(CellValue::Int),
            AnyValue::Float32(f) => Some(CellValue::Float(f64::from(*f))),
            AnyValue::Float64(f) => Some(CellValue::Float(*f)),
            // Int8/Int16/UInt8/UInt16 sit behind polars dtype features.
            other if other.dtype().is_integer() => other.extract::<i64>().map(CellValue::Int),
            _ => None,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Int(i) => write!(f, "{i}"),
            // Debug keeps the decimal point, so 1.0 does not turn into 1.
            CellValue::Float(x) => write!(f, "{x:?}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}
