//! Configurers - merge a service binding and connector options into a
//! connection string
//!
//! Each field is resolved on its own, first match wins:
//!
//! 1. the explicit `ConnectorOptions` field
//! 2. the same field inside `ConnectorOptions::connection_string`
//! 3. the `ServiceInfo` field
//! 4. nothing (the driver default applies)
//!
//! A connection string override with nothing else to merge is returned as
//! given. With nothing supplied at all there is no connection string; blank
//! values count as nothing. An override merged with other fields must use one
//! of the engine's schemes.

mod mysql;
mod postgres;

use std::fmt;

use binding_core::{ConnectorOptions, DomainError, DsnParts, ServiceInfo, SslMode};
use sqlx::ConnectOptions;

use crate::error::ConnectorResult;

pub use mysql::MySqlConfigurer;
pub use postgres::PostgresConfigurer;

/// Per-engine connection string and driver handle construction
pub trait Configurer: fmt::Debug + Clone + Send + Sync + 'static {
    /// SQLx database the driver handle connects to
    type Database: sqlx::Database;
    /// Un-opened driver handle built from a connection string
    type Options: ConnectOptions;

    /// Engine name used in logs
    const ENGINE: &'static str;
    /// Scheme of the connection strings this configurer builds
    const SCHEME: &'static str;
    /// Schemes the driver accepts for this engine, `SCHEME` included
    const SCHEMES: &'static [&'static str];

    /// Write the SSL mode into the connection string parameters
    fn apply_ssl_mode(&self, parts: &mut DsnParts, mode: SslMode);

    /// Build the connection string for a binding and options
    ///
    /// Returns `Ok(None)` when neither input carries connection details.
    fn configure(
        &self,
        info: Option<&ServiceInfo>,
        options: &ConnectorOptions,
    ) -> ConnectorResult<Option<String>> {
        merge_connection_string(self, info, options)
    }

    /// Build the driver handle; parse failures come straight from the driver
    fn new_connection(&self, connection_string: &str) -> Result<Self::Options, sqlx::Error> {
        connection_string.parse()
    }
}

fn merge_connection_string<C: Configurer>(
    configurer: &C,
    info: Option<&ServiceInfo>,
    options: &ConnectorOptions,
) -> ConnectorResult<Option<String>> {
    let info = info.filter(|info| info.has_connection_details());
    let has_extras = options.ssl_mode.is_some() || !options.extra_params.is_empty();

    if let Some(connection_string) = options.connection_string_override() {
        if info.is_none() && !options.has_connection_details() && !has_extras {
            return Ok(Some(connection_string.to_string()));
        }
    } else if info.is_none() && !options.has_connection_details() {
        return Ok(None);
    }

    let from_options = options.to_dsn_parts();
    let from_override = options.connection_string_parts()?.unwrap_or_default();
    let from_info = info.map(ServiceInfo::to_dsn_parts).unwrap_or_default();

    let scheme = match from_override.scheme {
        Some(scheme) if !C::SCHEMES.contains(&scheme.as_str()) => {
            return Err(DomainError::InvalidConnectionString {
                reason: format!("scheme '{scheme}' is not a {} scheme", C::ENGINE),
            }
            .into());
        }
        scheme => scheme,
    };

    let mut parts = DsnParts {
        scheme,
        host: from_options
            .host
            .or(from_override.host)
            .or(from_info.host),
        port: from_options.port.or(from_override.port).or(from_info.port),
        username: from_options
            .username
            .or(from_override.username)
            .or(from_info.username),
        password: from_options
            .password
            .or(from_override.password)
            .or(from_info.password),
        database: from_options
            .database
            .or(from_override.database)
            .or(from_info.database),
        params: from_override.params,
    };

    if let Some(mode) = options.ssl_mode {
        configurer.apply_ssl_mode(&mut parts, mode);
    }
    for (key, value) in &options.extra_params {
        parts.set_param(key.as_str(), value.as_str());
    }

    Ok(Some(parts.to_connection_string(C::SCHEME)?))
}
