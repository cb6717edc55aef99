//! Writer Driver Registry
//!
//! Dataset writer drivers register themselves into [`WRITER_DRIVERS`]; the
//! process-wide registry for the writer group is built from that slice on
//! first use.

use std::sync::Arc;

use cube_domain::constants::WRITER_DRIVER_GROUP;
use cube_domain::error::Result;
use cube_domain::ports::WriterDriver;

use super::cell::RegistryCell;
use super::driver_registry::DriverRegistry;
use super::linked::{DriverPlugin, LinkedDriverProvider};

/// Registry entry for writer drivers
///
/// Each writer driver implementation submits one of these into
/// [`WRITER_DRIVERS`] with `#[linkme::distributed_slice]`.
pub struct WriterDriverEntry {
    /// Canonical driver name (e.g., "netcdf")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the driver instance
    pub factory: fn() -> std::result::Result<Arc<dyn WriterDriver>, String>,
}

impl DriverPlugin for WriterDriverEntry {
    type Driver = dyn WriterDriver;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn instantiate(&self) -> std::result::Result<Arc<dyn WriterDriver>, String> {
        (self.factory)()
    }
}

// Auto-collection via linkme distributed slices - drivers submit entries at compile time
#[linkme::distributed_slice]
pub static WRITER_DRIVERS: [WriterDriverEntry] = [..];

static WRITER_CACHE: RegistryCell<dyn WriterDriver> = RegistryCell::new(WRITER_DRIVER_GROUP);

/// Provider serving the linked writer drivers
pub fn writer_provider() -> LinkedDriverProvider<WriterDriverEntry> {
    LinkedDriverProvider::new(WRITER_DRIVER_GROUP, WRITER_DRIVERS.static_slice())
}

/// Process-wide writer driver registry
pub fn writer_cache() -> Result<Arc<DriverRegistry<dyn WriterDriver>>> {
    WRITER_CACHE.get_or_init(&writer_provider())
}

/// Names of all writer drivers, aliases included
pub fn writer_drivers() -> Result<Vec<String>> {
    Ok(writer_cache()?.names())
}

/// Look up a writer driver by name or alias
///
/// # Returns
/// * `Ok(Some(driver))` - Driver registered under `name`
/// * `Ok(None)` - No such driver; not an error
/// * `Err(_)` - The writer registry could not be built
pub fn storage_writer_by_name(name: &str) -> Result<Option<Arc<dyn WriterDriver>>> {
    Ok(writer_cache()?.lookup(name))
}

/// List all linked writer drivers
///
/// Returns `(name, description)` tuples straight from the slice, without
/// instantiating anything. Useful for CLI help.
pub fn list_writer_drivers() -> Vec<(&'static str, &'static str)> {
    writer_provider().describe()
}
