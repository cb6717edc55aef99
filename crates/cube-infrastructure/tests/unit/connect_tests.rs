//! Index connection tests

use cube_domain::constants::INDEX_DRIVER_KEY;
use cube_domain::error::Error;
use cube_domain::value_objects::LocalConfig;
use cube_infrastructure::index_connect;

#[test]
fn test_connect_with_supplied_config() {
    let config = LocalConfig::new("default")
        .with_value("db_hostname", "index.example")
        .with_value("db_database", "cube");

    let index = index_connect(Some(config), Some("connect-test"), true).unwrap();

    assert_eq!(index.driver_name(), "default");
    assert_eq!(index.url(), "postgresql://index.example:5432/cube");
    assert_eq!(index.application_name(), Some("connect-test"));
}

#[test]
fn test_connect_through_alias() {
    let config = LocalConfig::default().with_value(INDEX_DRIVER_KEY, "postgres");

    let index = index_connect(Some(config), None, false).unwrap();

    assert_eq!(index.driver_name(), "default");
}

#[test]
fn test_unknown_driver_message_lists_available_drivers() {
    let config = LocalConfig::default().with_value(INDEX_DRIVER_KEY, "s3aio_index");

    let Err(err) = index_connect(Some(config), None, true) else {
        panic!("s3aio_index is not a linked driver");
    };

    assert!(matches!(err, Error::DriverNotFound { .. }));
    assert!(
        err.to_string()
            .contains("2 available: default, postgres"),
        "got: {err}"
    );
}
