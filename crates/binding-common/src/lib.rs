//! # binding-common
//!
//! Shared utilities: loading connector options from configuration, and
//! telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ConfigError, ConfigSection, OptionsLoader, DEFAULT_ENV_PREFIX};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
