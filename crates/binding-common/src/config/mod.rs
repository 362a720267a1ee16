//! Connector options configuration

mod options_loader;

pub use options_loader::{ConfigError, ConfigSection, OptionsLoader, DEFAULT_ENV_PREFIX};
