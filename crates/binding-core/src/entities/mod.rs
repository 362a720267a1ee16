//! Domain entities - the two inputs every connector works from

mod connector_options;
mod service_info;

pub use connector_options::ConnectorOptions;
pub use service_info::ServiceInfo;
