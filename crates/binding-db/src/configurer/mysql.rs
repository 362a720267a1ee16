//! MySQL configurer

use binding_core::{DsnParts, SslMode};
use sqlx::mysql::{MySql, MySqlConnectOptions};

use super::Configurer;

/// Builds `mysql://` connection strings and SQLx MySQL connect options
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConfigurer;

impl MySqlConfigurer {
    /// Parameter name SQLx reads the SSL mode from
    pub const SSL_MODE_PARAM: &'static str = "ssl-mode";

    /// MySQL spelling of an SSL mode
    pub fn ssl_mode_value(mode: SslMode) -> &'static str {
        match mode {
            SslMode::Disable => "DISABLED",
            SslMode::Prefer => "PREFERRED",
            SslMode::Require => "REQUIRED",
            SslMode::VerifyCa => "VERIFY_CA",
            SslMode::VerifyFull => "VERIFY_IDENTITY",
        }
    }
}

impl Configurer for MySqlConfigurer {
    type Database = MySql;
    type Options = MySqlConnectOptions;

    const ENGINE: &'static str = "mysql";
    const SCHEME: &'static str = "mysql";
    const SCHEMES: &'static [&'static str] = &["mysql", "mariadb"];

    fn apply_ssl_mode(&self, parts: &mut DsnParts, mode: SslMode) {
        parts.remove_param("sslmode");
        parts.set_param(Self::SSL_MODE_PARAM, Self::ssl_mode_value(mode));
    }
}
