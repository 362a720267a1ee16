//! Value objects - immutable types that represent connection concepts

mod dsn;
mod ssl_mode;

pub(crate) use dsn::non_blank;
pub use dsn::{redact_connection_string, DsnParts, DEFAULT_HOST};
pub use ssl_mode::SslMode;
