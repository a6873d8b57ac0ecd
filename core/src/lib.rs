//! Store-independent building blocks for querying versioned process
//! definitions: the data model, the criteria model, latest-version resolution,
//! named-parameter templates and the SQL fragment builder the store dialects
//! render into.

pub mod criteria;
pub mod definition;
pub mod error;
pub mod placeholder;
pub mod sql;
pub mod template;
pub mod tracing;
pub mod version;

// Re-export key types and traits
pub use criteria::{
    Criteria, Direction, Field, LikePattern, Operator, Paging, Predicate, PredicateValue,
    SortField, SortKey,
};
pub use definition::{Deployment, ProcessDefinition};
pub use error::{FlowdefError, Result};
pub use placeholder::Placeholder;
pub use sql::{SQL, SQLChunk, SQLParam};
pub use template::NamedTemplate;
pub use version::{Versioned, latest_versions};
