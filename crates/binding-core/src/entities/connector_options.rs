//! Connector options - operator-supplied connection configuration
//!
//! Every field is optional. A field that is set here wins over the same field
//! of the bound service. Empty or whitespace-only strings count as unset, so
//! a blank value in a config file or environment variable never hides the
//! bound service's value.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::DomainResult;
use crate::value_objects::{non_blank, DsnParts, SslMode};

/// Connection overrides and pool hints for one engine
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectorOptions {
    /// Complete connection string; its fields can still be overridden below
    #[serde(alias = "url")]
    pub connection_string: Option<String>,

    #[serde(alias = "server", alias = "hostname")]
    pub host: Option<String>,

    pub port: Option<u16>,

    #[serde(alias = "user")]
    pub username: Option<String>,

    pub password: Option<String>,

    #[serde(alias = "name")]
    pub database: Option<String>,

    pub ssl_mode: Option<SslMode>,

    /// Additional driver parameters, appended to the connection string
    pub extra_params: BTreeMap<String, String>,

    /// Pool sizing hints, never written into the connection string
    pub min_pool_size: Option<u32>,
    pub max_pool_size: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
}

impl ConnectorOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection string override
    #[must_use]
    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    /// Set host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set password
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set database name
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set SSL mode
    #[must_use]
    pub fn with_ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = Some(mode);
        self
    }

    /// Add a driver parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Set pool size hints
    #[must_use]
    pub fn with_pool_size(mut self, min: u32, max: u32) -> Self {
        self.min_pool_size = Some(min);
        self.max_pool_size = Some(max);
        self
    }

    /// Set connect timeout hint
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Connect timeout hint as a duration
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Explicit connection fields, without the connection string override
    ///
    /// Blank fields are left unset.
    pub fn to_dsn_parts(&self) -> DsnParts {
        DsnParts {
            scheme: None,
            host: non_blank(self.host.as_deref()).map(str::to_owned),
            port: self.port,
            username: non_blank(self.username.as_deref()).map(str::to_owned),
            password: non_blank(self.password.as_deref()).map(str::to_owned),
            database: non_blank(self.database.as_deref()).map(str::to_owned),
            params: Vec::new(),
        }
    }

    /// The connection string override, unless it is blank
    pub fn connection_string_override(&self) -> Option<&str> {
        non_blank(self.connection_string.as_deref())
    }

    /// Parse the connection string override, if one is set
    pub fn connection_string_parts(&self) -> DomainResult<Option<DsnParts>> {
        self.connection_string_override()
            .map(DsnParts::parse)
            .transpose()
    }

    /// Whether any explicit connection field is set
    ///
    /// Only host, port, username, password, and database count. SSL mode,
    /// extra parameters, and pool hints alone do not describe a connection.
    pub fn has_connection_details(&self) -> bool {
        self.to_dsn_parts().has_connection_details()
    }
}

impl fmt::Debug for ConnectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorOptions")
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "***"),
            )
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode)
            .field("extra_params", &self.extra_params.keys().collect::<Vec<_>>())
            .field("min_pool_size", &self.min_pool_size)
            .field("max_pool_size", &self.max_pool_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
