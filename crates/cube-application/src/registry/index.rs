//! Index Driver Registry
//!
//! Index drivers register themselves into [`INDEX_DRIVERS`]; the
//! process-wide registry for the index group is built from that slice on
//! first use.

use std::sync::Arc;

use cube_domain::constants::INDEX_DRIVER_GROUP;
use cube_domain::error::Result;
use cube_domain::ports::IndexDriver;

use super::cell::RegistryCell;
use super::driver_registry::DriverRegistry;
use super::linked::{DriverPlugin, LinkedDriverProvider};

/// Registry entry for index drivers
pub struct IndexDriverEntry {
    /// Canonical driver name (e.g., "default")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the driver instance
    pub factory: fn() -> std::result::Result<Arc<dyn IndexDriver>, String>,
}

impl DriverPlugin for IndexDriverEntry {
    type Driver = dyn IndexDriver;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn instantiate(&self) -> std::result::Result<Arc<dyn IndexDriver>, String> {
        (self.factory)()
    }
}

#[linkme::distributed_slice]
pub static INDEX_DRIVERS: [IndexDriverEntry] = [..];

static INDEX_CACHE: RegistryCell<dyn IndexDriver> = RegistryCell::new(INDEX_DRIVER_GROUP);

/// Provider serving the linked index drivers
pub fn index_provider() -> LinkedDriverProvider<IndexDriverEntry> {
    LinkedDriverProvider::new(INDEX_DRIVER_GROUP, INDEX_DRIVERS.static_slice())
}

/// Process-wide index driver registry
pub fn index_cache() -> Result<Arc<DriverRegistry<dyn IndexDriver>>> {
    INDEX_CACHE.get_or_init(&index_provider())
}

/// Names of all index drivers, aliases included
pub fn index_drivers() -> Result<Vec<String>> {
    Ok(index_cache()?.names())
}

/// Look up an index driver by name or alias; `Ok(None)` when unknown
pub fn index_driver_by_name(name: &str) -> Result<Option<Arc<dyn IndexDriver>>> {
    Ok(index_cache()?.lookup(name))
}

/// `(name, description)` of every linked index driver
pub fn list_index_drivers() -> Vec<(&'static str, &'static str)> {
    index_provider().describe()
}
