//! Raw SQL escape hatch.
//!
//! The statement text is opaque: it is neither parsed nor validated beyond
//! rewriting `#{name}` placeholders into numbered driver parameters. Broken
//! SQL surfaces as a store error from SQLite.

use crate::executor::{at_most_one, query_all};
use crate::row::FromSQLiteRow;
use crate::values::SQLiteValue;
use compact_str::CompactString;
use flowdef_core::error::{FlowdefError, Result};
use flowdef_core::{NamedTemplate, Paging, ProcessDefinition};
use hashbrown::HashMap;
use rusqlite::Connection;
use smallvec::SmallVec;

#[derive(Debug)]
pub struct NativeProcessDefinitionQuery<'c> {
    conn: &'c Connection,
    sql: Option<String>,
    parameters: HashMap<CompactString, SQLiteValue>,
}

impl<'c> NativeProcessDefinitionQuery<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            sql: None,
            parameters: HashMap::new(),
        }
    }

    /// Sets the statement text, replacing any earlier one.
    pub fn sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.sql = Some(sql.into());
        self
    }

    /// Binds `value` to every `#{name}` in the statement. Binding a name again
    /// overwrites the earlier value.
    pub fn parameter(&mut self, name: impl Into<CompactString>, value: impl Into<SQLiteValue>) -> &mut Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// The rewritten statement and its parameters in driver order.
    fn prepare(&self, paging: Option<Paging>) -> Result<(String, SmallVec<[SQLiteValue; 8]>)> {
        let template = self
            .sql
            .as_deref()
            .ok_or_else(|| FlowdefError::ExecutionError("no SQL set on native query".into()))?;
        let template = NamedTemplate::parse(template);
        let mut params = template.bind(&self.parameters)?;
        // A trailing `;` cannot sit inside the paging subquery.
        let statement = template
            .sql()
            .trim_end_matches(|c: char| c == ';' || c.is_whitespace());

        let sql = match paging {
            None => statement.to_string(),
            Some(paging) => {
                let limit = paging.max_results.map_or(SQLiteValue::Integer(-1), SQLiteValue::from);
                let n = params.len();
                params.push(limit);
                params.push(SQLiteValue::from(paging.first_result));
                // The newline ends a trailing `--` comment before the paren.
                format!("SELECT * FROM ({statement}\n) LIMIT ?{} OFFSET ?{}", n + 1, n + 2)
            }
        };
        Ok((sql, params))
    }

    fn run<T: FromSQLiteRow>(&self, paging: Option<Paging>) -> Result<Vec<T>> {
        let (sql, params) = self.prepare(paging)?;
        flowdef_core::flowdef_trace_query!(sql, params.len());
        query_all(self.conn, &sql, params)
    }

    /// Every row the statement returns, mapped to definitions.
    pub fn list(&self) -> Result<Vec<ProcessDefinition>> {
        self.run(None)
    }

    /// At most `max_results` rows starting at `first_result`. The statement
    /// runs as a subquery, so it must be a single `SELECT`.
    pub fn list_page(&self, first_result: usize, max_results: usize) -> Result<Vec<ProcessDefinition>> {
        self.run(Some(Paging::new(first_result, max_results)))
    }

    /// The first column of the first row. The statement is expected to be a
    /// count query such as `SELECT count(*) FROM ACT_RE_PROCDEF`.
    pub fn count(&self) -> Result<u64> {
        let rows: Vec<i64> = self.run(None)?;
        let count = rows.first().copied().unwrap_or(0);
        u64::try_from(count).map_err(|_| FlowdefError::Mapping(format!("negative count {count}")))
    }

    /// Same cardinality rules as the criteria query; at most two rows are read.
    pub fn single_result(&self) -> Result<Option<ProcessDefinition>> {
        at_most_one(self.run(Some(Paging::new(0, 2)))?)
    }
}
