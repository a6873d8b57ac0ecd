//! SQLite store for the process definition query engine.
//!
//! Renders criteria into parametrized SQLite statements, runs them through
//! `rusqlite` and maps rows back to [`flowdef_core::ProcessDefinition`].

pub mod schema;
pub mod values;

#[cfg(feature = "rusqlite")]
pub mod builder;
#[cfg(feature = "rusqlite")]
pub mod executor;
#[cfg(feature = "rusqlite")]
pub mod native;
#[cfg(feature = "rusqlite")]
pub mod query;
#[cfg(feature = "rusqlite")]
pub mod repository;
#[cfg(feature = "rusqlite")]
pub mod row;

#[cfg(feature = "rusqlite")]
pub use executor::Executor;
#[cfg(feature = "rusqlite")]
pub use native::NativeProcessDefinitionQuery;
#[cfg(feature = "rusqlite")]
pub use query::ProcessDefinitionQuery;
#[cfg(feature = "rusqlite")]
pub use repository::RepositoryService;
#[cfg(feature = "rusqlite")]
pub use row::FromSQLiteRow;
pub use schema::Entity;
pub use values::SQLiteValue;
