//! Domain errors - error types for the domain layer
//!
//! Messages carry a reason only. Connection strings and credentials never
//! appear in an error message.

use thiserror::Error;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Connector options are required")]
    MissingOptions,

    #[error("Invalid connection string: {reason}")]
    InvalidConnectionString { reason: String },

    #[error("Invalid service uri: {reason}")]
    InvalidServiceUri { reason: String },
}

impl DomainError {
    pub(crate) fn invalid_connection_string(reason: impl Into<String>) -> Self {
        Self::InvalidConnectionString {
            reason: reason.into(),
        }
    }

    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingOptions => "MISSING_OPTIONS",
            Self::InvalidConnectionString { .. } => "INVALID_CONNECTION_STRING",
            Self::InvalidServiceUri { .. } => "INVALID_SERVICE_URI",
        }
    }
}
