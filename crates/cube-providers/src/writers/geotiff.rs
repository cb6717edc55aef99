//! GeoTIFF writer driver

use std::path::Path;
use std::sync::Arc;

use cube_application::registry::{WRITER_DRIVERS, WriterDriverEntry};
use cube_domain::error::Result;
use cube_domain::ports::{Driver, WriterDriver};

use crate::constants::{GEOTIFF_DRIVER_NAME, GEOTIFF_FORMAT};
use crate::utils::file_uri;

/// Cloud-optimised GeoTIFF writer
#[derive(Debug, Default, Clone, Copy)]
pub struct GeotiffWriterDriver;

impl GeotiffWriterDriver {
    /// Create the driver
    pub fn new() -> Self {
        Self
    }
}

impl Driver for GeotiffWriterDriver {
    fn name(&self) -> &str {
        GEOTIFF_DRIVER_NAME
    }

    fn aliases(&self) -> &[&'static str] {
        &["GeoTIFF", "tif"]
    }
}

impl WriterDriver for GeotiffWriterDriver {
    fn format(&self) -> &str {
        GEOTIFF_FORMAT
    }

    fn mk_uri(&self, path: &Path) -> Result<String> {
        file_uri(path)
    }
}

#[linkme::distributed_slice(WRITER_DRIVERS)]
static GEOTIFF_WRITER: WriterDriverEntry = WriterDriverEntry {
    name: GEOTIFF_DRIVER_NAME,
    description: "GeoTIFF writer for local storage",
    factory: || Ok(Arc::new(GeotiffWriterDriver::new())),
};
