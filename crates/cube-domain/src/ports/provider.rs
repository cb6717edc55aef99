//! Driver Provider Port
//!
//! The discovery contract the registry is built on. A provider enumerates the
//! drivers contributed to a named group; how it finds them (linked slices,
//! a static table, a test double) is its own business.

use std::sync::Arc;

use crate::error::Result;

/// Drivers discovered for one group, as `(canonical name, driver)` pairs
///
/// Order is the provider's iteration order and decides which driver wins an
/// alias collision.
pub type DriverMap<D> = Vec<(String, Arc<D>)>;

/// Discovery backend for one kind of driver
pub trait DriverProvider<D: ?Sized>: Send + Sync {
    /// Enumerate every driver registered under `group`
    fn load(&self, group: &str) -> Result<DriverMap<D>>;
}

impl<D, F> DriverProvider<D> for F
where
    D: ?Sized,
    F: Fn(&str) -> Result<DriverMap<D>> + Send + Sync,
{
    fn load(&self, group: &str) -> Result<DriverMap<D>> {
        self(group)
    }
}
