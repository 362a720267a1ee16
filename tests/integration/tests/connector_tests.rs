//! Connector Integration Tests
//!
//! End-to-end from a bound service and connector options to driver connect
//! options. No database is needed: the connect options are never opened.
//!
//! Run with: cargo test -p integration-tests --test connector_tests

use binding_core::{ConnectorOptions, DomainError, DsnParts, ServiceInfo, SslMode};
use binding_db::{ConnectorError, MySqlConnectorFactory, PostgresConnectorFactory};
use integration_tests::fixtures::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_requires_options() {
    for info in [None, Some(postgres_binding())] {
        let err = PostgresConnectorFactory::new(info.clone(), None).unwrap_err();
        assert!(matches!(err, ConnectorError::Domain(DomainError::MissingOptions)));

        let err = MySqlConnectorFactory::new(info, None).unwrap_err();
        assert!(matches!(err, ConnectorError::Domain(DomainError::MissingOptions)));
    }
}

#[test]
fn test_construction_never_fails_with_options() {
    let option_sets = [
        ConnectorOptions::default(),
        ConnectorOptions::new().with_connection_string("garbage"),
        ConnectorOptions::new().with_host("h").with_port(1),
    ];
    for options in option_sets {
        assert!(PostgresConnectorFactory::new(None, Some(options.clone())).is_ok());
        assert!(MySqlConnectorFactory::new(Some(postgres_binding()), Some(options)).is_ok());
    }
}

// ============================================================================
// Connection strings
// ============================================================================

#[test]
fn test_nothing_configured_is_not_an_error() {
    let factory = MySqlConnectorFactory::new(None, empty_options()).unwrap();
    assert_eq!(factory.create_connection_string().unwrap(), None);
    assert!(factory.create().unwrap().is_none());

    let factory = PostgresConnectorFactory::new(None, empty_options()).unwrap();
    assert_eq!(factory.create_connection_string().unwrap(), None);
    assert!(factory.create().unwrap().is_none());
}

#[test]
fn test_override_only_is_returned_unchanged() {
    let raw = "postgres://reporting:pw@reports.local:5432/reports?sslmode=prefer";
    let factory = PostgresConnectorFactory::new(
        None,
        Some(ConnectorOptions::new().with_connection_string(raw)),
    )
    .unwrap();
    assert_eq!(factory.create_connection_string().unwrap().as_deref(), Some(raw));
}

#[test]
fn test_blank_override_is_not_configured() {
    let options = ConnectorOptions::new().with_connection_string("");
    let factory = PostgresConnectorFactory::new(None, Some(options.clone())).unwrap();
    assert_eq!(factory.create_connection_string().unwrap(), None);
    assert!(factory.create().unwrap().is_none());

    let factory = MySqlConnectorFactory::new(None, Some(options)).unwrap();
    assert_eq!(factory.create_connection_string().unwrap(), None);
    assert!(factory.create().unwrap().is_none());
}

#[test]
fn test_blank_options_keep_binding_values() {
    let options = ConnectorOptions::new().with_host("").with_password("");
    let factory = PostgresConnectorFactory::new(Some(postgres_binding()), Some(options)).unwrap();
    assert_eq!(
        factory.create_connection_string().unwrap().as_deref(),
        Some("postgres://u:p@db.local:5432/appdb")
    );
}

#[test]
fn test_override_for_other_engine_is_rejected() {
    let options = ConnectorOptions::new().with_connection_string("postgres://x/y");
    let factory = MySqlConnectorFactory::new(Some(postgres_binding()), Some(options)).unwrap();
    assert!(matches!(
        factory.create(),
        Err(ConnectorError::Domain(DomainError::InvalidConnectionString { .. }))
    ));
}

#[test]
fn test_options_win_on_conflict() {
    let options = ConnectorOptions::new()
        .with_host("pgbouncer.local")
        .with_port(6432)
        .with_username("pool_user");
    let factory = PostgresConnectorFactory::new(Some(postgres_binding()), Some(options)).unwrap();

    let dsn = factory.create_connection_string().unwrap().unwrap();
    let parts = DsnParts::parse(&dsn).unwrap();
    assert_eq!(parts.host.as_deref(), Some("pgbouncer.local"));
    assert_eq!(parts.port, Some(6432));
    assert_eq!(parts.username.as_deref(), Some("pool_user"));
    // not overridden, so taken from the binding
    assert_eq!(parts.password.as_deref(), Some("p"));
    assert_eq!(parts.database.as_deref(), Some("appdb"));
}

#[test]
fn test_connection_string_is_pure() {
    let options = ConnectorOptions::new()
        .with_ssl_mode(SslMode::VerifyCa)
        .with_param("application_name", "billing")
        .with_param("options", "-c search_path=billing");
    let factory = PostgresConnectorFactory::new(Some(postgres_binding()), Some(options)).unwrap();

    let first = factory.create_connection_string().unwrap();
    for _ in 0..10 {
        assert_eq!(factory.create_connection_string().unwrap(), first);
    }
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_postgres_binding_round_trips_all_fields() {
    let factory = PostgresConnectorFactory::new(Some(postgres_binding()), empty_options()).unwrap();

    let dsn = factory.create_connection_string().unwrap().unwrap();
    let parts = DsnParts::parse(&dsn).unwrap();
    assert_eq!(parts.host.as_deref(), Some("db.local"));
    assert_eq!(parts.port, Some(5432));
    assert_eq!(parts.username.as_deref(), Some("u"));
    assert_eq!(parts.password.as_deref(), Some("p"));
    assert_eq!(parts.database.as_deref(), Some("appdb"));

    let connect = factory.create().unwrap().expect("connect options");
    assert_eq!(connect.get_host(), "db.local");
    assert_eq!(connect.get_port(), 5432);
    assert_eq!(connect.get_username(), "u");
    assert_eq!(connect.get_database(), Some("appdb"));
}

#[test]
fn test_mysql_binding_from_credentials() {
    let info: ServiceInfo = serde_json::from_value(mysql_credentials()).unwrap();
    let options = ConnectorOptions::new()
        .with_ssl_mode(SslMode::Require)
        .with_pool_size(1, 8);
    let factory = MySqlConnectorFactory::new(Some(info), Some(options)).unwrap();

    let dsn = factory.create_connection_string().unwrap().unwrap();
    let parts = DsnParts::parse(&dsn).unwrap();
    assert_eq!(parts.scheme.as_deref(), Some("mysql"));
    assert_eq!(parts.password.as_deref(), Some("S3cr3t/+="));
    assert_eq!(parts.param("ssl-mode"), Some("REQUIRED"));

    let connect = factory.create().unwrap().expect("connect options");
    assert_eq!(connect.get_host(), "mysql.service.internal");
    assert_eq!(connect.get_port(), 3306);
    assert_eq!(connect.get_username(), "svc_user");
    assert_eq!(connect.get_database(), Some("cf_4f1c2e"));

    assert_eq!(factory.pool_options().get_max_connections(), 8);
}

#[test]
fn test_driver_errors_propagate() {
    let options = ConnectorOptions::new().with_connection_string("postgres://h:notaport/db");
    let factory = PostgresConnectorFactory::new(None, Some(options)).unwrap();

    // returned as given, so the driver is the one rejecting it
    assert!(factory.create_connection_string().unwrap().is_some());
    assert!(matches!(factory.create(), Err(ConnectorError::Driver(_))));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_factories_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MySqlConnectorFactory>();
    assert_send_sync::<PostgresConnectorFactory>();

    let factory = PostgresConnectorFactory::new(Some(postgres_binding()), empty_options()).unwrap();
    let expected = factory.create_connection_string().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| factory.create_connection_string().unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
