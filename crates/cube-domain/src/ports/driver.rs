//! Driver Capability Ports
//!
//! Every pluggable driver exposes its canonical name and the aliases it can
//! also be looked up by. Writer and index drivers add the capability-specific
//! entry points on top.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::LocalConfig;

/// A named, pluggable driver implementation
pub trait Driver: Send + Sync {
    /// Canonical name the driver registers under
    fn name(&self) -> &str;

    /// Alternate names the driver can also be looked up by
    ///
    /// Processed in order when the registry is built.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }
}

/// Driver that writes datasets in a storage format
pub trait WriterDriver: Driver {
    /// Dataset format label written by this driver (e.g. "NetCDF")
    fn format(&self) -> &str;

    /// Build the storage URI for a local file
    ///
    /// Fails for paths that are not absolute.
    fn mk_uri(&self, path: &Path) -> Result<String>;
}

/// Driver that knows how to connect to an index backend
pub trait IndexDriver: Driver {
    /// Create an index from the given configuration
    ///
    /// When `validate_connection` is false the driver only records the
    /// connection parameters; checking them is deferred to first use.
    fn connect_to_index(
        &self,
        config: &LocalConfig,
        application_name: Option<&str>,
        validate_connection: bool,
    ) -> Result<Arc<dyn Index>>;
}

/// A connected dataset index
pub trait Index: Send + Sync {
    /// Name of the driver that produced this index
    fn driver_name(&self) -> &str;

    /// Connection URL, without credentials
    fn url(&self) -> String;

    /// Application identifier reported to the backend
    fn application_name(&self) -> Option<&str>;
}
