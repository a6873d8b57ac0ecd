use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowdefError {
    /// A builder call received a missing, negative or otherwise illegal value,
    /// or a sort direction was requested with no pending sort key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A single-result query matched more than one row
    #[error("Ambiguous result: query returned {count} results instead of at most 1")]
    AmbiguousResult { count: usize },

    /// Error executing a query
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Error mapping a row to a definition
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error binding native query parameters
    #[error("Parameter error: {0}")]
    ParameterError(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl FlowdefError {
    /// Builds an [`FlowdefError::InvalidArgument`] and traces the rejection.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        crate::flowdef_trace_reject!(&message);
        FlowdefError::InvalidArgument(message)
    }

    /// True for errors raised while building a query, before the store was touched.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FlowdefError::InvalidArgument(_))
    }

    pub fn is_ambiguous_result(&self) -> bool {
        matches!(self, FlowdefError::AmbiguousResult { .. })
    }

    /// True for failures reported by (or on the way to) the store.
    pub fn is_store_error(&self) -> bool {
        !self.is_invalid_argument() && !self.is_ambiguous_result()
    }
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, FlowdefError>;
