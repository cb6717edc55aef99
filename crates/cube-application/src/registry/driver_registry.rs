//! Driver Registry
//!
//! Name and alias index for the drivers of one group.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use cube_domain::error::{Error, Result};
use cube_domain::ports::{Driver, DriverMap, DriverProvider};
use tracing::{debug, warn};

/// What to do when an alias names a key that is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasPolicy {
    /// The driver processed later takes the key (logged as a warning)
    #[default]
    Overwrite,
    /// Fail registry construction with `Error::DriverConflict`
    Reject,
}

/// Registry of every driver discovered for one group
///
/// Built once from a [`DriverProvider`]; immutable afterwards.
pub struct DriverRegistry<D: ?Sized> {
    group: String,
    drivers: HashMap<String, Arc<D>>,
    canonical: Vec<String>,
}

impl<D: Driver + ?Sized> DriverRegistry<D> {
    /// Load the group from `provider` and index it with the default alias policy
    pub fn new(group: &str, provider: &dyn DriverProvider<D>) -> Result<Self> {
        Self::with_policy(group, provider, AliasPolicy::default())
    }

    /// Load the group from `provider` and index it with `policy`
    pub fn with_policy(
        group: &str,
        provider: &dyn DriverProvider<D>,
        policy: AliasPolicy,
    ) -> Result<Self> {
        let drivers = provider.load(group)?;
        Self::from_drivers(group, drivers, policy)
    }

    /// Index an already-discovered set of drivers
    ///
    /// Canonical names are registered first. Aliases are then registered in
    /// provider order, so under [`AliasPolicy::Overwrite`] the later driver
    /// wins any collision, including one with an earlier canonical name.
    pub fn from_drivers(group: &str, drivers: DriverMap<D>, policy: AliasPolicy) -> Result<Self> {
        let mut index: HashMap<String, Arc<D>> = HashMap::with_capacity(drivers.len());
        let mut canonical = Vec::with_capacity(drivers.len());

        for (name, driver) in &drivers {
            if index.insert(name.clone(), Arc::clone(driver)).is_none() {
                canonical.push(name.clone());
            }
        }

        for (name, driver) in &drivers {
            for alias in driver.aliases() {
                if let Some(existing) = index.get(*alias) {
                    if Arc::ptr_eq(existing, driver) {
                        continue;
                    }
                    if policy == AliasPolicy::Reject {
                        return Err(Error::driver_conflict(group, *alias));
                    }
                    warn!(
                        group = group,
                        alias = *alias,
                        previous = existing.name(),
                        driver = name.as_str(),
                        "Driver alias overrides an existing registration"
                    );
                }
                index.insert((*alias).to_string(), Arc::clone(driver));
            }
        }

        debug!(
            group = group,
            drivers = canonical.len(),
            names = index.len(),
            "Driver registry built"
        );

        Ok(Self {
            group: group.to_string(),
            drivers: index,
            canonical,
        })
    }

    /// Driver registered under `name`, if any
    ///
    /// An unknown name is an expected outcome and yields `None`.
    pub fn lookup(&self, name: &str) -> Option<Arc<D>> {
        self.drivers.get(name).cloned()
    }

    /// Every registered key, canonical names and aliases alike, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.drivers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Canonical names in provider order
    pub fn canonical_names(&self) -> &[String] {
        &self.canonical
    }
}

impl<D: ?Sized> DriverRegistry<D> {
    /// Group this registry was built for
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl<D: ?Sized> fmt::Debug for DriverRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("group", &self.group)
            .field("canonical", &self.canonical)
            .field("len", &self.drivers.len())
            .finish()
    }
}
