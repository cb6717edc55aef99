//! Driver registry tests
//!
//! Name and alias resolution against providers with known contents.

use std::sync::Arc;

use cube_application::registry::{AliasPolicy, DriverRegistry};
use cube_domain::error::{Error, Result};
use cube_domain::ports::{Driver, DriverMap};

use crate::test_drivers::{FailingProvider, stub};

fn netcdf_and_geotiff(_group: &str) -> Result<DriverMap<dyn Driver>> {
    Ok(vec![stub("netcdf", &["nc"]), stub("geotiff", &[])])
}

#[test]
fn test_lookup_by_canonical_name_and_alias() {
    let registry = DriverRegistry::<dyn Driver>::new("writers", &netcdf_and_geotiff).unwrap();

    let netcdf = registry.lookup("netcdf").expect("netcdf registered");
    let by_alias = registry.lookup("nc").expect("alias registered");
    let geotiff = registry.lookup("geotiff").expect("geotiff registered");

    assert!(Arc::ptr_eq(&netcdf, &by_alias));
    assert_eq!(netcdf.name(), "netcdf");
    assert_eq!(geotiff.name(), "geotiff");
    assert!(!Arc::ptr_eq(&netcdf, &geotiff));
}

#[test]
fn test_unknown_name_is_absent() {
    let registry = DriverRegistry::<dyn Driver>::new("writers", &netcdf_and_geotiff).unwrap();

    assert!(registry.lookup("nc4").is_none());
    assert!(registry.lookup("").is_none());
    assert!(registry.lookup("NETCDF").is_none());
}

#[test]
fn test_names_include_canonical_names_and_aliases() {
    let registry = DriverRegistry::<dyn Driver>::new("writers", &netcdf_and_geotiff).unwrap();

    assert_eq!(registry.names(), vec!["geotiff", "nc", "netcdf"]);
    assert_eq!(
        registry.canonical_names(),
        ["netcdf".to_string(), "geotiff".to_string()]
    );
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.group(), "writers");
}

#[test]
fn test_names_without_aliases_match_canonical_names() {
    let provider = |_: &str| -> Result<DriverMap<dyn Driver>> {
        Ok(vec![stub("a", &[]), stub("b", &[]), stub("c", &[])])
    };
    let registry = DriverRegistry::<dyn Driver>::new("writers", &provider).unwrap();

    assert_eq!(registry.names().len(), registry.canonical_names().len());
}

#[test]
fn test_empty_provider_builds_empty_registry() {
    let provider = |_: &str| -> Result<DriverMap<dyn Driver>> { Ok(Vec::new()) };
    let registry = DriverRegistry::<dyn Driver>::new("writers", &provider).unwrap();

    assert!(registry.is_empty());
    assert!(registry.names().is_empty());
}

#[test]
fn test_later_alias_wins_collision() {
    let provider = |_: &str| -> Result<DriverMap<dyn Driver>> {
        Ok(vec![stub("netcdf", &["nc"]), stub("netcdf4", &["nc"])])
    };
    let registry = DriverRegistry::<dyn Driver>::new("writers", &provider).unwrap();

    assert_eq!(registry.lookup("nc").unwrap().name(), "netcdf4");
    assert_eq!(registry.lookup("netcdf").unwrap().name(), "netcdf");
    assert_eq!(registry.lookup("netcdf4").unwrap().name(), "netcdf4");
}

#[test]
fn test_reject_policy_fails_on_collision() {
    let provider = |_: &str| -> Result<DriverMap<dyn Driver>> {
        Ok(vec![stub("netcdf", &["nc"]), stub("netcdf4", &["nc"])])
    };
    let result = DriverRegistry::<dyn Driver>::with_policy("writers", &provider, AliasPolicy::Reject);

    match result {
        Err(Error::DriverConflict { group, name }) => {
            assert_eq!(group, "writers");
            assert_eq!(name, "nc");
        }
        other => panic!("Expected DriverConflict, got {other:?}"),
    }
}

#[test]
fn test_reject_policy_accepts_distinct_aliases() {
    let registry =
        DriverRegistry::<dyn Driver>::with_policy("writers", &netcdf_and_geotiff, AliasPolicy::Reject).unwrap();
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_construction_is_idempotent_in_key_set() {
    let first = DriverRegistry::<dyn Driver>::new("writers", &netcdf_and_geotiff).unwrap();
    let second = DriverRegistry::<dyn Driver>::new("writers", &netcdf_and_geotiff).unwrap();

    assert_eq!(first.names(), second.names());
}

#[test]
fn test_provider_failure_propagates() {
    let result = DriverRegistry::<dyn Driver>::new("writers", &FailingProvider);

    assert!(matches!(result, Err(Error::DriverLoad { .. })));
}
