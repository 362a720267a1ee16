//! # binding-db
//!
//! MySQL and PostgreSQL connectors over SQLx.
//!
//! ## Overview
//!
//! A [`ConnectorFactory`] takes the bound service's [`ServiceInfo`] and the
//! operator's [`ConnectorOptions`], asks the engine's [`Configurer`] for a
//! connection string, and turns that string into the driver's connect
//! options. It handles:
//!
//! - Per-field precedence between options and the service binding
//! - Engine specific SSL mode spelling
//! - Pool sizing hints as SQLx pool options
//!
//! ## Usage
//!
//! ```rust,ignore
//! use binding_core::{ConnectorOptions, ServiceInfo};
//! use binding_db::PostgresConnectorFactory;
//! use sqlx::ConnectOptions;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let info = ServiceInfo::from_uri("appdb", "postgres://u:p@db.local:5432/appdb")?;
//!     let factory = PostgresConnectorFactory::new(Some(info), Some(ConnectorOptions::default()))?;
//!
//!     if let Some(options) = factory.create()? {
//!         let _conn = options.connect().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`ServiceInfo`]: binding_core::ServiceInfo
//! [`ConnectorOptions`]: binding_core::ConnectorOptions

pub mod configurer;
pub mod error;
pub mod factory;

// Re-export commonly used types
pub use configurer::{Configurer, MySqlConfigurer, PostgresConfigurer};
pub use error::{ConnectorError, ConnectorResult};
pub use factory::{ConnectorFactory, MySqlConnectorFactory, PostgresConnectorFactory};

// Re-export the driver handles for convenience
pub use sqlx::mysql::MySqlConnectOptions;
pub use sqlx::postgres::PgConnectOptions;
