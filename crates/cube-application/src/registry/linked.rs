//! Linked Driver Provider
//!
//! [`DriverProvider`] backed by a `linkme` distributed slice. Each slice
//! holds the entries of exactly one group.

use std::sync::Arc;

use cube_domain::error::{Error, Result};
use cube_domain::ports::{Driver, DriverMap, DriverProvider};
use tracing::trace;

/// Entry type stored in a driver distributed slice
pub trait DriverPlugin: Sync + 'static {
    /// Capability the entry instantiates
    type Driver: Driver + ?Sized;

    /// Canonical driver name
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Create the driver instance
    fn instantiate(&self) -> std::result::Result<Arc<Self::Driver>, String>;
}

/// Provider that serves one group from a static slice of entries
pub struct LinkedDriverProvider<P: 'static> {
    group: &'static str,
    plugins: &'static [P],
}

impl<P: DriverPlugin> LinkedDriverProvider<P> {
    /// Serve `plugins` as the drivers of `group`
    pub fn new(group: &'static str, plugins: &'static [P]) -> Self {
        Self { group, plugins }
    }

    /// `(name, description)` of every linked entry
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.plugins
            .iter()
            .map(|p| (p.name(), p.description()))
            .collect()
    }
}

impl<P: DriverPlugin> DriverProvider<P::Driver> for LinkedDriverProvider<P> {
    fn load(&self, group: &str) -> Result<DriverMap<P::Driver>> {
        if group != self.group {
            return Err(Error::unknown_driver_group(group));
        }

        let mut drivers = Vec::with_capacity(self.plugins.len());
        for plugin in self.plugins {
            let name = plugin.name();
            if name.is_empty() {
                return Err(Error::driver_load(
                    group,
                    name,
                    "driver registered with an empty name",
                ));
            }
            let driver = plugin
                .instantiate()
                .map_err(|message| Error::driver_load(group, name, message))?;
            trace!(group = group, driver = name, "Loaded linked driver");
            drivers.push((name.to_string(), driver));
        }
        Ok(drivers)
    }
}
