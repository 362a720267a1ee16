//! Connector error types

use binding_core::DomainError;

/// Result type for connector operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Errors raised while building connection strings or driver handles
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Invalid input (missing options, unusable connection string)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Driver error, passed through unmodified
    #[error(transparent)]
    Driver(#[from] sqlx::Error),
}

impl ConnectorError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Driver(_) => "DRIVER_ERROR",
        }
    }
}
