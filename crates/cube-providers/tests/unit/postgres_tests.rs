//! PostgreSQL index driver tests

use cube_domain::error::Error;
use cube_domain::ports::{Driver, IndexDriver};
use cube_domain::value_objects::LocalConfig;
use cube_providers::index::{ConnectionSettings, PostgresIndexDriver};

fn staging_config() -> LocalConfig {
    LocalConfig::new("staging")
        .with_value("db_hostname", "db.staging.example")
        .with_value("db_port", "6432")
        .with_value("db_database", "cube_staging")
        .with_value("db_username", "cube_ro")
        .with_value("db_password", "secret")
}

#[test]
fn test_driver_is_registered_as_default() {
    let driver = PostgresIndexDriver::new();

    assert_eq!(driver.name(), "default");
    assert_eq!(driver.aliases(), ["postgres"]);
}

#[test]
fn test_connect_reads_settings_from_config() {
    let index = PostgresIndexDriver::new()
        .connect_to_index(&staging_config(), Some("ingest"), true)
        .unwrap();

    assert_eq!(index.driver_name(), "default");
    assert_eq!(
        index.url(),
        "postgresql://cube_ro@db.staging.example:6432/cube_staging"
    );
    assert!(!index.url().contains("secret"));
    assert_eq!(index.application_name(), Some("ingest"));
}

#[test]
fn test_application_name_gets_suffix() {
    let settings = ConnectionSettings::from_config(&staging_config(), Some("  stats ")).unwrap();

    assert_eq!(settings.application_name, "stats datacube");
}

#[test]
fn test_malformed_port_fails_even_without_validation() {
    let config = LocalConfig::default().with_value("db_port", "fifty");

    let result = PostgresIndexDriver::new().connect_to_index(&config, None, false);

    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("db_port")),
        Err(other) => panic!("Expected Configuration error, got {other:?}"),
        Ok(_) => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_validation_is_deferred_when_disabled() {
    let config = LocalConfig::default().with_value("db_database", "");

    let deferred = PostgresIndexDriver::new().connect_to_index(&config, None, false);
    let immediate = PostgresIndexDriver::new().connect_to_index(&config, None, true);

    assert!(deferred.is_ok());
    assert!(matches!(immediate, Err(Error::Connection { .. })));
}

#[test]
fn test_overlong_application_name_fails_validation() {
    let name = "x".repeat(80);

    let result = PostgresIndexDriver::new().connect_to_index(&LocalConfig::default(), Some(&name), true);

    assert!(matches!(result, Err(Error::Connection { .. })));
}

#[test]
fn test_zero_port_fails_validation() {
    let config = LocalConfig::default().with_value("db_port", "0");
    let settings = ConnectionSettings::from_config(&config, None).unwrap();

    assert!(settings.validate().is_err());
}
