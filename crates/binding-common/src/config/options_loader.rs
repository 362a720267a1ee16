//! Connector options loading
//!
//! Options for an engine live under its section (`mysql.client`,
//! `postgres.client`). They are read from an optional config file and then
//! from environment variables, which win:
//!
//! ```text
//! BINDING__MYSQL__CLIENT__HOST=db.local
//! BINDING__POSTGRES__CLIENT__SSL_MODE=require
//! BINDING__POSTGRES__CLIENT__EXTRA_PARAMS__APPLICATION_NAME=billing
//! ```
//!
//! A section that is not configured at all yields empty options.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use ::config::{Config, Environment, File};
use binding_core::ConnectorOptions;
use tracing::debug;

/// Prefix of connector environment variables
pub const DEFAULT_ENV_PREFIX: &str = "BINDING";

const ENV_SEPARATOR: &str = "__";

/// Configuration section holding one engine's connector options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    MySql,
    Postgres,
}

impl ConfigSection {
    /// Dotted key of the section
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::MySql => "mysql.client",
            Self::Postgres => "postgres.client",
        }
    }

    /// Engine name
    #[must_use]
    pub fn engine(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConfigSection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigError::UnknownEngine(s.to_string())),
        }
    }
}

/// Loads `ConnectorOptions` for one section
#[derive(Debug, Clone)]
pub struct OptionsLoader {
    section: ConfigSection,
    env_prefix: String,
    file: Option<PathBuf>,
    dotenv: bool,
}

impl OptionsLoader {
    pub fn new(section: ConfigSection) -> Self {
        Self {
            section,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            file: None,
            dotenv: true,
        }
    }

    /// Read environment variables under another prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read a config file first; the format follows the file extension
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Skip loading a `.env` file
    #[must_use]
    pub fn without_dotenv(mut self) -> Self {
        self.dotenv = false;
        self
    }

    /// Load the options
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or a value has the
    /// wrong type.
    pub fn load(&self) -> Result<ConnectorOptions, ConfigError> {
        if self.dotenv {
            // Load .env file if present (ignore errors if not found)
            let _ = dotenvy::dotenv();
        }

        let mut builder = Config::builder();
        if let Some(path) = &self.file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix).separator(ENV_SEPARATOR),
        );

        let options = section_options(&builder.build()?, self.section)?;
        debug!(
            section = %self.section,
            file = ?self.file,
            connection_string = options.connection_string.is_some(),
            host = ?options.host,
            database = ?options.database,
            "Connector options loaded"
        );
        Ok(options)
    }
}

fn section_options(
    config: &Config,
    section: ConfigSection,
) -> Result<ConnectorOptions, ConfigError> {
    match config.get::<ConnectorOptions>(section.key()) {
        Ok(options) => Ok(options),
        Err(::config::ConfigError::NotFound(_)) => Ok(ConnectorOptions::default()),
        Err(e) => Err(e.into()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown connector engine: {0}")]
    UnknownEngine(String),

    #[error("Failed to load connector options: {0}")]
    Load(#[from] ::config::ConfigError),
}
