//! Row mapping for [`rusqlite::Row`].
//!
//! Columns are looked up by name, so both the generated queries and caller
//! supplied native queries (`SELECT * FROM ACT_RE_PROCDEF ...`) map the same way.

use flowdef_core::error::{FlowdefError, Result};
use flowdef_core::{Deployment, ProcessDefinition};
use rusqlite::Row;

/// Types that can be built from one result row.
pub trait FromSQLiteRow: Sized {
    fn from_row(row: &Row<'_>) -> Result<Self>;
}

fn column<T: rusqlite::types::FromSql>(row: &Row<'_>, name: &str) -> Result<T> {
    row.get(name).map_err(|err| match err {
        rusqlite::Error::InvalidColumnName(_)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => {
            FlowdefError::Mapping(format!("column {name}: {err}"))
        }
        other => other.into(),
    })
}

impl FromSQLiteRow for ProcessDefinition {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(ProcessDefinition {
            id: column(row, "ID_")?,
            key: column(row, "KEY_")?,
            name: column(row, "NAME_")?,
            category: column(row, "CATEGORY_")?,
            version: column(row, "VERSION_")?,
            deployment_id: column(row, "DEPLOYMENT_ID_")?,
            resource_name: column(row, "RESOURCE_NAME_")?,
        })
    }
}

impl FromSQLiteRow for Deployment {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Deployment {
            id: column(row, "ID_")?,
            name: column(row, "NAME_")?,
        })
    }
}

/// First column as an integer, for `SELECT count(...)` statements.
impl FromSQLiteRow for i64 {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        row.get(0).map_err(|err| FlowdefError::Mapping(format!("count column: {err}")))
    }
}
