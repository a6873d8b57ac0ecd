//! SQLite value conversion traits and types

use compact_str::CompactString;
use flowdef_core::{SQL, SQLParam};

//------------------------------------------------------------------------------
// SQLiteValue Definition
//------------------------------------------------------------------------------

/// Represents a SQLite value bound as a statement parameter
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum SQLiteValue {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(CompactString),
    /// NULL value
    #[default]
    Null,
}

impl SQLParam for SQLiteValue {}

impl<'a> From<SQLiteValue> for SQL<'a, SQLiteValue> {
    fn from(value: SQLiteValue) -> Self {
        SQL::param(value)
    }
}

//------------------------------------------------------------------------------
// Database Driver Implementations
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl rusqlite::ToSql for SQLiteValue {
    fn to_sql(&self) -> ::rusqlite::Result<::rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value, ValueRef};

        Ok(match self {
            SQLiteValue::Null => ToSqlOutput::Owned(Value::Null),
            SQLiteValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            SQLiteValue::Real(r) => ToSqlOutput::Owned(Value::Real(*r)),
            SQLiteValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

//------------------------------------------------------------------------------
// From<T> implementations
//------------------------------------------------------------------------------

macro_rules! impl_from_integer {
    ($($ty:ty),*) => { $(
        impl From<$ty> for SQLiteValue {
            fn from(value: $ty) -> Self {
                SQLiteValue::Integer(i64::from(value))
            }
        }
    )* }
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, bool);

impl From<usize> for SQLiteValue {
    /// Values beyond `i64::MAX` saturate; they only occur as paging bounds.
    fn from(value: usize) -> Self {
        SQLiteValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for SQLiteValue {
    fn from(value: f64) -> Self {
        SQLiteValue::Real(value)
    }
}

impl From<&str> for SQLiteValue {
    fn from(value: &str) -> Self {
        SQLiteValue::Text(CompactString::new(value))
    }
}

impl From<String> for SQLiteValue {
    fn from(value: String) -> Self {
        SQLiteValue::Text(CompactString::from(value))
    }
}

impl From<&String> for SQLiteValue {
    fn from(value: &String) -> Self {
        SQLiteValue::Text(CompactString::new(value))
    }
}

impl From<CompactString> for SQLiteValue {
    fn from(value: CompactString) -> Self {
        SQLiteValue::Text(value)
    }
}

impl<T: Into<SQLiteValue>> From<Option<T>> for SQLiteValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SQLiteValue::Null, Into::into)
    }
}
