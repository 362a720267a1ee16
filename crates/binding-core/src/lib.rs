//! # binding-core
//!
//! Domain layer for service-binding database connectors: the bound service's
//! connection metadata, operator-supplied connector options, and the
//! engine-neutral connection string model both drivers share.
//! This crate has no dependency on any database driver.

pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ConnectorOptions, ServiceInfo};
pub use error::{DomainError, DomainResult};
pub use value_objects::{redact_connection_string, DsnParts, SslMode, DEFAULT_HOST};
