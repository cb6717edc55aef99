//! Tests for the process-wide registries
//!
//! Uses `extern crate cube_providers` to force linkme registration of the
//! built-in drivers, then resolves them through the global query functions.

extern crate cube_providers;

use std::sync::Arc;
use std::thread;

use cube_application::registry::{
    DriverPlugin, LinkedDriverProvider, WRITER_DRIVERS, index_cache, index_driver_by_name,
    index_drivers, list_index_drivers, list_writer_drivers, storage_writer_by_name, writer_cache,
    writer_drivers, writer_provider,
};
use cube_application::use_cases::{DriverSelector, index_connect};
use cube_domain::constants::{INDEX_DRIVER_GROUP, INDEX_DRIVER_KEY, WRITER_DRIVER_GROUP};
use cube_domain::error::Error;
use cube_domain::ports::{DriverProvider, WriterDriver};
use cube_domain::value_objects::LocalConfig;

#[test]
fn test_writer_cache_is_a_singleton() {
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(writer_cache)).collect();
    let registries: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    let again = writer_cache().unwrap();
    for registry in &registries {
        assert!(Arc::ptr_eq(registry, &again));
    }
    assert_eq!(again.group(), WRITER_DRIVER_GROUP);
}

#[test]
fn test_writer_drivers_include_names_and_aliases() {
    let names = writer_drivers().unwrap();

    for expected in ["netcdf", "NetCDF CF", "geotiff", "GeoTIFF", "tif"] {
        assert!(
            names.iter().any(|name| name == expected),
            "{expected} should be registered. Available: {names:?}"
        );
    }
}

#[test]
fn test_storage_writer_by_name_resolves_alias() {
    let by_name = storage_writer_by_name("netcdf").unwrap().unwrap();
    let by_alias = storage_writer_by_name("NetCDF CF").unwrap().unwrap();

    assert!(Arc::ptr_eq(&by_name, &by_alias));
    assert_eq!(by_alias.format(), "NetCDF");
}

#[test]
fn test_storage_writer_by_unknown_name_is_none() {
    assert!(storage_writer_by_name("nc4").unwrap().is_none());
}

#[test]
fn test_list_writer_drivers_has_descriptions() {
    let drivers = list_writer_drivers();

    assert!(drivers.iter().any(|(name, _)| *name == "netcdf"));
    for (name, description) in &drivers {
        assert!(!name.is_empty(), "Driver name should not be empty");
        assert!(
            !description.is_empty(),
            "Driver '{name}' should have a description"
        );
    }
}

#[test]
fn test_index_drivers_include_default() {
    let names = index_drivers().unwrap();

    assert!(names.contains(&"default".to_string()));
    assert!(names.contains(&"postgres".to_string()));
    assert!(index_driver_by_name("postgres").unwrap().is_some());
    assert!(index_driver_by_name("s3aio_index").unwrap().is_none());
    assert!(list_index_drivers().iter().any(|(name, _)| *name == "default"));
    assert_eq!(index_cache().unwrap().group(), INDEX_DRIVER_GROUP);
}

#[test]
fn test_index_connect_uses_default_driver() {
    let index = index_connect(&LocalConfig::default(), Some("agdc-test"), true).unwrap();

    assert_eq!(index.driver_name(), "default");
    assert_eq!(index.url(), "postgresql://localhost:5432/datacube");
    assert_eq!(index.application_name(), Some("agdc-test"));
}

#[test]
fn test_index_connect_unknown_driver_lists_linked_drivers() {
    let config = LocalConfig::default().with_value(INDEX_DRIVER_KEY, "s3aio_index");

    let err = index_connect(&config, None, true)
        .err()
        .expect("s3aio_index is not linked");

    let message = err.to_string();
    let count = index_drivers().unwrap().len();
    assert!(message.starts_with("No index driver found for 's3aio_index'."));
    assert!(message.contains(&format!("{count} available")));
    assert!(message.contains("default"));
    assert!(message.contains("postgres"));
}

#[test]
fn test_selector_over_global_registry() {
    let selector = DriverSelector::from_linked().unwrap();
    let driver = selector.select(&LocalConfig::default()).unwrap();

    assert_eq!(driver.name(), "default");
    assert!(std::ptr::eq(selector.registry(), &*index_cache().unwrap()));
}

#[test]
fn test_linked_provider_rejects_other_groups() {
    let result = writer_provider().load(INDEX_DRIVER_GROUP);

    assert!(matches!(result, Err(Error::UnknownDriverGroup { .. })));
}

#[test]
fn test_linked_provider_reports_factory_failure() {
    struct Broken;

    impl DriverPlugin for Broken {
        type Driver = dyn WriterDriver;

        fn name(&self) -> &'static str {
            "broken"
        }

        fn description(&self) -> &'static str {
            "always fails"
        }

        fn instantiate(&self) -> Result<Arc<dyn WriterDriver>, String> {
            Err("native library missing".to_string())
        }
    }

    static BROKEN: [Broken; 1] = [Broken];
    let provider = LinkedDriverProvider::new(WRITER_DRIVER_GROUP, &BROKEN);

    match provider.load(WRITER_DRIVER_GROUP) {
        Err(Error::DriverLoad { name, message, .. }) => {
            assert_eq!(name, "broken");
            assert_eq!(message, "native library missing");
        }
        _ => panic!("Expected DriverLoad error"),
    }
    assert!(WRITER_DRIVERS.len() >= 2);
}

#[test]
fn test_linked_provider_rejects_empty_name() {
    struct Nameless;

    impl DriverPlugin for Nameless {
        type Driver = dyn WriterDriver;

        fn name(&self) -> &'static str {
            ""
        }

        fn description(&self) -> &'static str {
            "registered without a name"
        }

        fn instantiate(&self) -> Result<Arc<dyn WriterDriver>, String> {
            panic!("an unnamed entry must not be instantiated")
        }
    }

    static NAMELESS: [Nameless; 1] = [Nameless];
    let provider = LinkedDriverProvider::new(WRITER_DRIVER_GROUP, &NAMELESS);

    match provider.load(WRITER_DRIVER_GROUP) {
        Err(Error::DriverLoad { group, name, .. }) => {
            assert_eq!(group, WRITER_DRIVER_GROUP);
            assert!(name.is_empty());
        }
        _ => panic!("Expected DriverLoad error"),
    }
}
