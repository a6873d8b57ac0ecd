use crate::executor::{at_most_one, query_all};
use crate::native::NativeProcessDefinitionQuery;
use crate::query::ProcessDefinitionQuery;
use crate::schema::{DEPLOYMENT_TABLE, Entity};
use flowdef_core::error::Result;
use flowdef_core::{Deployment, ProcessDefinition};
use rusqlite::Connection;

/// Entry point for reading deployed process definitions from a connection.
///
/// Holds no state besides the connection; every query it creates is built
/// and executed independently.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryService<'c> {
    conn: &'c Connection,
}

impl<'c> RepositoryService<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create_process_definition_query(&self) -> ProcessDefinitionQuery<'c> {
        ProcessDefinitionQuery::new(self.conn)
    }

    pub fn create_native_process_definition_query(&self) -> NativeProcessDefinitionQuery<'c> {
        NativeProcessDefinitionQuery::new(self.conn)
    }

    /// Looks up one definition by id.
    pub fn find_process_definition(&self, id: &str) -> Result<Option<ProcessDefinition>> {
        self.create_process_definition_query()
            .process_definition_id(id)?
            .single_result()
    }

    pub fn find_deployment(&self, id: &str) -> Result<Option<Deployment>> {
        let sql = format!("SELECT ID_, NAME_ FROM {DEPLOYMENT_TABLE} WHERE ID_ = ?1");
        flowdef_core::flowdef_trace_query!(sql, 1);
        at_most_one(query_all(self.conn, &sql, [id])?)
    }

    /// Name of the table backing `entity`, for writing native queries.
    pub fn table_name(&self, entity: Entity) -> &'static str {
        entity.table_name()
    }
}
