//! Runs criteria against the store and enforces result cardinality.

use crate::builder;
use crate::row::FromSQLiteRow;
use crate::values::SQLiteValue;
use flowdef_core::error::{FlowdefError, Result};
use flowdef_core::{Criteria, Paging, ProcessDefinition, SQL, latest_versions};
use rusqlite::{Connection, params_from_iter};

/// Runs `sql` with `params` and maps every row.
pub(crate) fn query_all<T, P>(conn: &Connection, sql: &str, params: P) -> Result<Vec<T>>
where
    T: FromSQLiteRow,
    P: IntoIterator,
    P::Item: rusqlite::ToSql,
{
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params_from_iter(params))?;

    let mut results = Vec::new();
    while let Some(row) = rows.next()? {
        results.push(T::from_row(row)?);
    }
    Ok(results)
}

/// Zero rows is `None`, one row is returned, more is an error.
pub(crate) fn at_most_one<T>(mut rows: Vec<T>) -> Result<Option<T>> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        count => Err(FlowdefError::AmbiguousResult { count }),
    }
}

/// Executes criteria queries for process definitions.
#[derive(Debug, Clone, Copy)]
pub struct Executor<'c> {
    conn: &'c Connection,
}

impl<'c> Executor<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn fetch<T: FromSQLiteRow>(&self, sql: &SQL<'_, SQLiteValue>) -> Result<Vec<T>> {
        let (sql_str, params) = sql.build();
        flowdef_core::flowdef_trace_query!(sql_str, params.len());
        query_all(self.conn, &sql_str, params)
    }

    /// Latest version per key among the matches, ordered but not paged.
    fn resolve_latest(&self, criteria: &Criteria) -> Result<Vec<ProcessDefinition>> {
        let candidates: Vec<ProcessDefinition> =
            self.fetch(&builder::select_candidates(criteria))?;
        let mut latest = latest_versions(candidates);
        latest.sort_by(|a, b| criteria.compare(a, b));
        Ok(latest)
    }

    /// Ordered matches, cut to the criteria's paging bounds.
    pub fn list(&self, criteria: &Criteria) -> Result<Vec<ProcessDefinition>> {
        self.list_page(criteria, criteria.paging())
    }

    /// Ordered matches, cut to `paging` instead of the criteria's own bounds.
    pub fn list_page(&self, criteria: &Criteria, paging: Paging) -> Result<Vec<ProcessDefinition>> {
        criteria.ensure_sorts_bound()?;
        if criteria.latest_only() {
            return Ok(paging.apply(self.resolve_latest(criteria)?));
        }
        self.fetch(&builder::select_definitions(criteria, paging))
    }

    /// Number of matches, ignoring paging bounds.
    pub fn count(&self, criteria: &Criteria) -> Result<u64> {
        criteria.ensure_sorts_bound()?;
        let count = if criteria.latest_only() {
            self.resolve_latest(criteria)?.len() as u64
        } else {
            let rows: Vec<i64> = self.fetch(&builder::count_definitions(criteria))?;
            let count = rows.first().copied().unwrap_or(0);
            u64::try_from(count)
                .map_err(|_| FlowdefError::Mapping(format!("negative count {count}")))?
        };
        Ok(count)
    }

    /// The only match, if any. Plain queries read at most two rows.
    pub fn single_result(&self, criteria: &Criteria) -> Result<Option<ProcessDefinition>> {
        criteria.ensure_sorts_bound()?;
        let rows = if criteria.latest_only() {
            self.resolve_latest(criteria)?
        } else {
            self.fetch(&builder::select_definitions(criteria, Paging::new(0, 2)))?
        };
        at_most_one(rows)
    }
}
