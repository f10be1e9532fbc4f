/// Core error types for the Kinetic editor.

/// A specialized Result type for Kinetic operations.
pub type KineticResult<T> = Result<T, KineticError>;

/// Top-level error type encompassing all Kinetic subsystems.
#[derive(Debug, thiserror::Error)]
pub enum KineticError {
    /// A candidate value does not satisfy its schema.
    #[error("schema error: {0}")]
    Schema(String),

    /// A reference (subject candidate, list index) no longer resolves.
    #[error("not found: {0}")]
    NotFound(String),

    /// The builder document is malformed, e.g. no base breakpoint.
    #[error("integrity error: {0}")]
    Integrity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl KineticError {
    /// Create a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        KineticError::Schema(message.into())
    }

    /// Create an integrity error.
    pub fn integrity(message: impl Into<String>) -> Self {
        KineticError::Integrity(message.into())
    }

    /// Whether the error is caused by user input and can be recovered by
    /// leaving state as it was.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            KineticError::Schema(_) | KineticError::NotFound(_) | KineticError::InvalidArgument(_)
        )
    }
}

impl From<toml::de::Error> for KineticError {
    fn from(err: toml::de::Error) -> Self {
        KineticError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KineticError {
    fn from(err: toml::ser::Error) -> Self {
        KineticError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = KineticError::schema("offset out of range");
        assert_eq!(err.to_string(), "schema error: offset out of range");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_integrity_error_is_fatal() {
        let err = KineticError::integrity("base breakpoint not found");
        assert!(err.to_string().contains("base breakpoint"));
        assert!(!err.is_recoverable());
    }
}
