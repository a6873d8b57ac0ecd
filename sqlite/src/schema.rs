//! Tables the query layer reads.
//!
//! Rows are written by the deployment pipeline; this crate only creates the
//! tables (for embedded use and tests) and reads from them.

#[cfg(feature = "rusqlite")]
use flowdef_core::error::Result;

pub const DEPLOYMENT_TABLE: &str = "ACT_RE_DEPLOYMENT";
pub const PROCESS_DEFINITION_TABLE: &str = "ACT_RE_PROCDEF";
pub const EVENT_SUBSCRIPTION_TABLE: &str = "ACT_RU_EVENT_SUBSCR";

/// Event type of message start event subscriptions.
pub const MESSAGE_EVENT_TYPE: &str = "message";

/// Persisted entity kinds, for looking up their table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Deployment,
    ProcessDefinition,
    EventSubscription,
}

impl Entity {
    pub const fn table_name(&self) -> &'static str {
        match self {
            Entity::Deployment => DEPLOYMENT_TABLE,
            Entity::ProcessDefinition => PROCESS_DEFINITION_TABLE,
            Entity::EventSubscription => EVENT_SUBSCRIPTION_TABLE,
        }
    }
}

/// CREATE statements, parents first. Definitions cascade with their
/// deployment; subscriptions cascade with their definition.
pub const CREATE_TABLES: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS ACT_RE_DEPLOYMENT (
        ID_ TEXT PRIMARY KEY NOT NULL,
        NAME_ TEXT,
        DEPLOY_TIME_ TEXT
    )",
    "CREATE TABLE IF NOT EXISTS ACT_RE_PROCDEF (
        ID_ TEXT PRIMARY KEY NOT NULL,
        KEY_ TEXT NOT NULL,
        NAME_ TEXT,
        CATEGORY_ TEXT,
        VERSION_ INTEGER NOT NULL,
        DEPLOYMENT_ID_ TEXT NOT NULL REFERENCES ACT_RE_DEPLOYMENT (ID_) ON DELETE CASCADE,
        RESOURCE_NAME_ TEXT,
        UNIQUE (KEY_, VERSION_)
    )",
    "CREATE TABLE IF NOT EXISTS ACT_RU_EVENT_SUBSCR (
        ID_ TEXT PRIMARY KEY NOT NULL,
        EVENT_TYPE_ TEXT NOT NULL,
        EVENT_NAME_ TEXT,
        PROC_DEF_ID_ TEXT REFERENCES ACT_RE_PROCDEF (ID_) ON DELETE CASCADE
    )",
];

/// Enables foreign keys and creates the tables if they are missing.
#[cfg(feature = "rusqlite")]
pub fn create_tables(conn: &rusqlite::Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    for statement in CREATE_TABLES {
        flowdef_core::flowdef_trace_query!(statement, 0);
        conn.execute(statement, [])?;
    }
    Ok(())
}
