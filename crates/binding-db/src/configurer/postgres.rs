//! PostgreSQL configurer

use binding_core::{DsnParts, SslMode};
use sqlx::postgres::{PgConnectOptions, Postgres};

use super::Configurer;

/// Builds `postgres://` connection strings and SQLx PostgreSQL connect options
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConfigurer;

impl PostgresConfigurer {
    /// Parameter name SQLx reads the SSL mode from
    pub const SSL_MODE_PARAM: &'static str = "sslmode";

    /// libpq spelling of an SSL mode
    pub fn ssl_mode_value(mode: SslMode) -> &'static str {
        mode.as_str()
    }
}

impl Configurer for PostgresConfigurer {
    type Database = Postgres;
    type Options = PgConnectOptions;

    const ENGINE: &'static str = "postgres";
    const SCHEME: &'static str = "postgres";
    const SCHEMES: &'static [&'static str] = &["postgres", "postgresql"];

    fn apply_ssl_mode(&self, parts: &mut DsnParts, mode: SslMode) {
        parts.remove_param("ssl-mode");
        parts.set_param(Self::SSL_MODE_PARAM, Self::ssl_mode_value(mode));
    }
}
