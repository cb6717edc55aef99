//! Writer driver tests

use std::path::Path;

use cube_domain::error::Error;
use cube_domain::ports::{Driver, WriterDriver};
use cube_providers::writers::{GeotiffWriterDriver, NetcdfWriterDriver};

#[test]
fn test_geotiff_declares_aliases() {
    let driver = GeotiffWriterDriver::new();

    assert_eq!(driver.name(), "geotiff");
    assert_eq!(driver.aliases(), ["GeoTIFF", "tif"]);
    assert_eq!(driver.format(), "GeoTIFF");
}

#[cfg(unix)]
#[test]
fn test_mk_uri_for_absolute_path() {
    let driver = NetcdfWriterDriver::new();

    let uri = driver
        .mk_uri(Path::new("/g/data/LS8_NBAR_3577_15_-40.nc"))
        .unwrap();

    assert_eq!(uri, "file:///g/data/LS8_NBAR_3577_15_-40.nc");
}

#[test]
fn test_mk_uri_rejects_relative_path() {
    let driver = GeotiffWriterDriver::new();

    let result = driver.mk_uri(Path::new("out/tile.tif"));

    match result {
        Err(Error::InvalidArgument { message }) => {
            assert!(message.contains("out/tile.tif"), "got: {message}");
        }
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}
