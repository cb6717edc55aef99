//! Unit tests for the local configuration value

use cube_domain::LocalConfig;
use cube_domain::constants::{DEFAULT_INDEX_DRIVER, INDEX_DRIVER_KEY};

#[test]
fn test_index_driver_defaults_when_unset() {
    let config = LocalConfig::default();
    assert_eq!(
        config.get(INDEX_DRIVER_KEY, DEFAULT_INDEX_DRIVER),
        "default"
    );
    assert!(!config.contains(INDEX_DRIVER_KEY));
}

#[test]
fn test_index_driver_read_from_values() {
    let config = LocalConfig::new("staging").with_value(INDEX_DRIVER_KEY, "postgres");
    assert_eq!(
        config.get(INDEX_DRIVER_KEY, DEFAULT_INDEX_DRIVER),
        "postgres"
    );
    assert_eq!(config.environment, "staging");
}

#[test]
fn test_config_serde_round_trip() {
    let config = LocalConfig::new("default").with_value("db_port", "5432");
    let json = serde_json::to_string(&config).unwrap();
    let parsed: LocalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
