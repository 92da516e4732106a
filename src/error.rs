//! Error types for sqlquery.

use thiserror::Error;

/// The main error type for building and compiling queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed builder arguments, reported at the offending call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The query is structurally invalid and cannot be compiled.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }
}

/// A key that is missing from a dialect's lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown operator '{0}'")]
    Operator(String),

    #[error("unknown function '{0}'")]
    Function(String),

    #[error("unsupported join type '{0}'")]
    JoinType(String),

    #[error("unsupported insert mode '{0}'")]
    InsertMode(String),
}

/// Lookup failures abort the compile as an invalid query.
impl From<LookupError> for QueryError {
    fn from(err: LookupError) -> Self {
        Self::InvalidQuery(err.to_string())
    }
}

/// Result type alias for sqlquery operations.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::invalid("no verb selected");
        assert_eq!(err.to_string(), "Invalid query: no verb selected");
    }

    #[test]
    fn test_lookup_surfaces_as_invalid_query() {
        let err: QueryError = LookupError::Operator("between".to_string()).into();
        assert!(matches!(err, QueryError::InvalidQuery(_)));
        assert_eq!(err.to_string(), "Invalid query: unknown operator 'between'");
    }
}
