//! Core error types for Biotools

use thiserror::Error;

/// Main error type for Biotools operations
#[derive(Error, Debug)]
pub enum BiotoolsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Biotools operations
pub type BiotoolsResult<T> = Result<T, BiotoolsError>;

impl BiotoolsError {
    /// Whether the caller supplied something the engine cannot accept.
    ///
    /// Client errors are reported per record in batch mode and as HTTP 400
    /// for single requests; everything else is an unexpected failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnsupportedOperation(_) | Self::Parse(_) | Self::InvalidInput(_)
        )
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::Parse(_) => "parse_error",
            Self::InvalidInput(_) => "invalid_input",
            Self::Computation(_) => "computation_error",
            Self::Io(_) => "io_error",
            Self::Serialization(_) => "serialization_error",
            Self::Configuration(_) => "configuration_error",
            Self::Other(_) => "unexpected_error",
        }
    }

    /// The error message without the kind prefix added by `Display`
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::UnsupportedOperation(msg)
            | Self::Parse(msg)
            | Self::InvalidInput(msg)
            | Self::Computation(msg)
            | Self::Serialization(msg)
            | Self::Configuration(msg)
            | Self::Other(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
        }
    }
}

// Conversion implementations for common error types
impl From<serde_json::Error> for BiotoolsError {
    fn from(err: serde_json::Error) -> Self {
        BiotoolsError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for BiotoolsError {
    fn from(err: anyhow::Error) -> Self {
        BiotoolsError::Other(err.to_string())
    }
}
