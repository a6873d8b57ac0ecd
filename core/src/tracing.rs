//! Tracing utilities for query observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// flowdef_trace_query!(&sql_str, params.len());
/// ```
#[macro_export]
macro_rules! flowdef_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, params = $param_count, "flowdef.query");
    };
}

/// Emit a debug-level tracing event when a builder call is rejected.
///
/// ```ignore
/// flowdef_trace_reject!("version must not be negative");
/// ```
#[macro_export]
macro_rules! flowdef_trace_reject {
    ($reason:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %$reason, "flowdef.reject");
    };
}
