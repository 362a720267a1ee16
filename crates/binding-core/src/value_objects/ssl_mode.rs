//! SSL mode requested for a database connection

use serde::Deserialize;
use std::fmt;

/// SSL mode for database connections.
///
/// Each engine spells these differently in its connection string; this is the
/// engine-neutral form operators configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    /// No SSL.
    #[serde(alias = "disabled")]
    Disable,
    /// Use SSL if available, but don't require it.
    #[serde(alias = "preferred")]
    Prefer,
    /// Require SSL.
    #[serde(alias = "required")]
    Require,
    /// Require SSL and verify the CA certificate.
    #[serde(alias = "verify_ca")]
    VerifyCa,
    /// Require SSL and verify CA and hostname.
    #[serde(alias = "verify_full", alias = "verify-identity", alias = "verify_identity")]
    VerifyFull,
}

impl SslMode {
    /// Get the canonical (lowercase, kebab-case) name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
