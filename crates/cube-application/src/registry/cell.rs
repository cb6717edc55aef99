//! Registry Singleton Holder
//!
//! Publishes a [`DriverRegistry`] exactly once per cell. Readers take the
//! lock-free fast path through the `OnceLock`; only first access for a group
//! takes the construction lock, and the re-check under that lock guarantees a
//! single provider call even when several threads race.
//!
//! A failed construction publishes nothing, so the next access retries.
//! The provider must not request the same cell while it runs.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use cube_domain::error::Result;
use cube_domain::ports::{Driver, DriverProvider};
use tracing::debug;

use super::driver_registry::DriverRegistry;

/// Build-once holder for the registry of one driver group
pub struct RegistryCell<D: ?Sized> {
    group: &'static str,
    registry: OnceLock<Arc<DriverRegistry<D>>>,
    init_lock: Mutex<()>,
}

impl<D: ?Sized> RegistryCell<D> {
    /// Create an empty holder for `group`
    pub const fn new(group: &'static str) -> Self {
        Self {
            group,
            registry: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Group served by this holder
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Registry already published, without constructing one
    pub fn get(&self) -> Option<Arc<DriverRegistry<D>>> {
        self.registry.get().cloned()
    }
}

impl<D: Driver + ?Sized> RegistryCell<D> {
    /// Registry for this group, loading it from `provider` on first access
    pub fn get_or_init(&self, provider: &dyn DriverProvider<D>) -> Result<Arc<DriverRegistry<D>>> {
        self.get_or_try_init(|| DriverRegistry::new(self.group, provider))
    }

    /// Registry for this group, constructing it with `build` on first access
    pub fn get_or_try_init<F>(&self, build: F) -> Result<Arc<DriverRegistry<D>>>
    where
        F: FnOnce() -> Result<DriverRegistry<D>>,
    {
        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        debug!(group = self.group, "Building driver registry");
        let registry = Arc::new(build()?);
        // Only written while holding the lock, after the re-check above.
        let _ = self.registry.set(Arc::clone(&registry));
        Ok(registry)
    }
}
