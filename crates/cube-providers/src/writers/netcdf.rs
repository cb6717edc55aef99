//! NetCDF writer driver
//!
//! Writes CF-convention NetCDF files to local storage.

use std::path::Path;
use std::sync::Arc;

use cube_application::registry::{WRITER_DRIVERS, WriterDriverEntry};
use cube_domain::error::Result;
use cube_domain::ports::{Driver, WriterDriver};

use crate::constants::{NETCDF_DRIVER_NAME, NETCDF_FORMAT};
use crate::utils::file_uri;

/// NetCDF CF writer
#[derive(Debug, Default, Clone, Copy)]
pub struct NetcdfWriterDriver;

impl NetcdfWriterDriver {
    /// Create the driver
    pub fn new() -> Self {
        Self
    }
}

impl Driver for NetcdfWriterDriver {
    fn name(&self) -> &str {
        NETCDF_DRIVER_NAME
    }

    fn aliases(&self) -> &[&'static str] {
        &["NetCDF CF"]
    }
}

impl WriterDriver for NetcdfWriterDriver {
    fn format(&self) -> &str {
        NETCDF_FORMAT
    }

    fn mk_uri(&self, path: &Path) -> Result<String> {
        file_uri(path)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(WRITER_DRIVERS)]
static NETCDF_WRITER: WriterDriverEntry = WriterDriverEntry {
    name: NETCDF_DRIVER_NAME,
    description: "NetCDF CF writer for local storage",
    factory: || Ok(Arc::new(NetcdfWriterDriver::new())),
};
