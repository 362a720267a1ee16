//! Prints the connection string a connector would build, with the password
//! masked
//!
//! Run with:
//! ```bash
//! cargo run -p binding-db --bin binding-dsn -- postgres [config-file]
//! ```
//!
//! Options are loaded from the optional config file and `BINDING__*`
//! environment variables. A bound service can be passed as a uri in
//! `BINDING_SERVICE_URI`.

use anyhow::Context;
use binding_common::{try_init_tracing, ConfigSection, OptionsLoader};
use binding_core::{redact_connection_string, ServiceInfo};
use binding_db::{MySqlConnectorFactory, PostgresConnectorFactory};
use tracing::{error, info};

const USAGE: &str = "usage: binding-dsn <mysql|postgres> [config-file]";
const SERVICE_URI_VAR: &str = "BINDING_SERVICE_URI";

fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = run() {
        error!(error = %e, "Failed to build connection string");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let section: ConfigSection = args.next().context(USAGE)?.parse()?;

    let mut loader = OptionsLoader::new(section);
    if let Some(file) = args.next() {
        loader = loader.with_file(file);
    }
    let options = loader.load()?;

    let info = std::env::var(SERVICE_URI_VAR)
        .ok()
        .map(|uri| ServiceInfo::from_uri(section.engine(), &uri))
        .transpose()?;

    let connection_string = match section {
        ConfigSection::MySql => {
            MySqlConnectorFactory::new(info, Some(options))?.create_connection_string()?
        }
        ConfigSection::Postgres => {
            PostgresConnectorFactory::new(info, Some(options))?.create_connection_string()?
        }
    };

    match connection_string {
        Some(cs) => println!("{}", redact_connection_string(&cs)),
        None => info!(
            engine = section.engine(),
            "No service binding or connector options configured"
        ),
    }

    Ok(())
}
