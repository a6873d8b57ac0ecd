//! # flowdef
//!
//! A query engine for versioned process definitions: filter, sort and page
//! deployed definitions through a fluent criteria API, resolve the latest
//! version per key, and fall back to raw parametrized SQL when needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowdef::prelude::*;
//!
//! # fn main() -> flowdef::Result<()> {
//! let conn = rusqlite::Connection::open_in_memory()?;
//! flowdef::sqlite::schema::create_tables(&conn)?;
//!
//! let repository = RepositoryService::new(&conn);
//! let latest = repository
//!     .create_process_definition_query()
//!     .process_definition_key("invoice")?
//!     .latest_version()?
//!     .single_result()?;
//! assert!(latest.is_none());
//!
//! let table = repository.table_name(Entity::ProcessDefinition);
//! let rows = repository
//!     .create_native_process_definition_query()
//!     .sql(format!("SELECT * FROM {table} WHERE NAME_ = #{{name}}"))
//!     .parameter("name", "Invoice")
//!     .list_page(0, 10)?;
//! assert!(rows.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Default | Effect                                              |
//! |------------|---------|-----------------------------------------------------|
//! | `rusqlite` | ✅      | SQLite store via `rusqlite`                         |
//! | `tracing`  |         | `tracing` debug events for statements and rejections |
//! | `serde`    |         | `Serialize`/`Deserialize` for the data model        |

/// Result type for query operations
pub use flowdef_core::error::Result;

/// Error types
pub mod error {
    pub use flowdef_core::error::FlowdefError;
}

/// Store-independent types: data model, criteria, resolver, templates.
pub use flowdef_core as core;

/// SQLite store: schema, criteria and native queries.
#[cfg(feature = "rusqlite")]
pub use flowdef_sqlite as sqlite;

pub mod prelude {
    pub use flowdef_core::{
        Criteria, Deployment, Direction, FlowdefError, ProcessDefinition, SortField,
    };

    #[cfg(feature = "rusqlite")]
    pub use flowdef_sqlite::{
        Entity, NativeProcessDefinitionQuery, ProcessDefinitionQuery, RepositoryService,
        SQLiteValue,
    };
}
