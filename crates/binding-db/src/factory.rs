//! Connector factory - one factory type for every engine
//!
//! The factory only assembles. It never opens the handle it returns, never
//! retries, and keeps no state between calls.

use binding_core::{redact_connection_string, ConnectorOptions, DomainError, ServiceInfo};
use sqlx::pool::PoolOptions;
use tracing::debug;

use crate::configurer::{Configurer, MySqlConfigurer, PostgresConfigurer};
use crate::error::ConnectorResult;

/// Factory for MySQL connect options
pub type MySqlConnectorFactory = ConnectorFactory<MySqlConfigurer>;

/// Factory for PostgreSQL connect options
pub type PostgresConnectorFactory = ConnectorFactory<PostgresConfigurer>;

/// Builds driver connect options from a service binding and connector options
#[derive(Debug, Clone)]
pub struct ConnectorFactory<C: Configurer> {
    info: Option<ServiceInfo>,
    options: ConnectorOptions,
    configurer: C,
}

impl<C: Configurer + Default> ConnectorFactory<C> {
    /// Create a factory with the engine's default configurer
    ///
    /// `info` may be absent when no service is bound. `options` must be
    /// present.
    pub fn new(
        info: Option<ServiceInfo>,
        options: Option<ConnectorOptions>,
    ) -> ConnectorResult<Self> {
        Self::with_configurer(C::default(), info, options)
    }
}

impl<C: Configurer> ConnectorFactory<C> {
    /// Create a factory with a specific configurer
    pub fn with_configurer(
        configurer: C,
        info: Option<ServiceInfo>,
        options: Option<ConnectorOptions>,
    ) -> ConnectorResult<Self> {
        let options = options.ok_or(DomainError::MissingOptions)?;

        Ok(Self {
            info,
            options,
            configurer,
        })
    }

    /// Build the connection string, or `None` when there is nothing to
    /// connect to
    pub fn create_connection_string(&self) -> ConnectorResult<Option<String>> {
        let connection_string = self.configurer.configure(self.info.as_ref(), &self.options)?;

        match &connection_string {
            Some(cs) => debug!(
                engine = C::ENGINE,
                binding = self.info.as_ref().map(|info| info.id.as_str()),
                connection_string = %redact_connection_string(cs),
                "Connection string configured"
            ),
            None => debug!(
                engine = C::ENGINE,
                "No service binding or connection options, nothing to configure"
            ),
        }

        Ok(connection_string)
    }

    /// Build the driver connect options, or `None` when there is nothing to
    /// connect to
    ///
    /// The returned options are not connected; call
    /// [`sqlx::ConnectOptions::connect`] or hand them to a pool.
    pub fn create(&self) -> ConnectorResult<Option<C::Options>> {
        let Some(connection_string) = self.create_connection_string()? else {
            return Ok(None);
        };

        let connect_options = self.configurer.new_connection(&connection_string)?;
        Ok(Some(connect_options))
    }

    /// Pool options carrying the sizing hints of the connector options
    ///
    /// Hints that are not set keep the SQLx defaults. Nothing is connected.
    pub fn pool_options(&self) -> PoolOptions<C::Database> {
        let mut pool = PoolOptions::<C::Database>::new();

        if let Some(max) = self.options.max_pool_size {
            pool = pool.max_connections(max);
        }
        if let Some(min) = self.options.min_pool_size {
            pool = pool.min_connections(min);
        }
        if let Some(timeout) = self.options.connect_timeout() {
            pool = pool.acquire_timeout(timeout);
        }

        pool
    }

    pub fn service_info(&self) -> Option<&ServiceInfo> {
        self.info.as_ref()
    }

    pub fn options(&self) -> &ConnectorOptions {
        &self.options
    }

    pub fn configurer(&self) -> &C {
        &self.configurer
    }
}
