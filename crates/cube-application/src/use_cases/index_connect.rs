//! Index Connect Use Case
//!
//! Resolves the index driver named by the configuration and hands the
//! configuration over to it. Validation of the connection is the driver's
//! job; the selector only picks the driver.

use std::sync::Arc;

use cube_domain::constants::{DEFAULT_INDEX_DRIVER, INDEX_DRIVER_KEY};
use cube_domain::error::{Error, Result};
use cube_domain::ports::{Index, IndexDriver};
use cube_domain::value_objects::LocalConfig;
use tracing::info;

use crate::registry::{DriverRegistry, index_cache};

/// Selects an index driver by configured name and connects through it
#[derive(Debug, Clone)]
pub struct DriverSelector {
    registry: Arc<DriverRegistry<dyn IndexDriver>>,
}

impl DriverSelector {
    /// Create a selector over an explicit registry
    pub fn new(registry: Arc<DriverRegistry<dyn IndexDriver>>) -> Self {
        Self { registry }
    }

    /// Create a selector over the process-wide index driver registry
    pub fn from_linked() -> Result<Self> {
        Ok(Self::new(index_cache()?))
    }

    /// Registry this selector resolves against
    pub fn registry(&self) -> &DriverRegistry<dyn IndexDriver> {
        &self.registry
    }

    /// Resolve the driver named by `index_driver`, defaulting to "default"
    ///
    /// An unknown name fails with `Error::DriverNotFound`, whose message
    /// lists how many drivers are available and their names.
    pub fn select(&self, config: &LocalConfig) -> Result<Arc<dyn IndexDriver>> {
        let driver_name = config.get(INDEX_DRIVER_KEY, DEFAULT_INDEX_DRIVER);
        self.registry.lookup(driver_name).ok_or_else(|| {
            Error::driver_not_found(self.registry.group(), driver_name, self.registry.names())
        })
    }

    /// Resolve the configured driver and connect to its index
    pub fn connect(
        &self,
        config: &LocalConfig,
        application_name: Option<&str>,
        validate_connection: bool,
    ) -> Result<Arc<dyn Index>> {
        let driver = self.select(config)?;
        info!(
            driver = driver.name(),
            environment = config.environment.as_str(),
            validate = validate_connection,
            "Connecting to index"
        );
        driver.connect_to_index(config, application_name, validate_connection)
    }
}

/// Connect to the index configured in `config` using the linked drivers
pub fn index_connect(
    config: &LocalConfig,
    application_name: Option<&str>,
    validate_connection: bool,
) -> Result<Arc<dyn Index>> {
    DriverSelector::from_linked()?.connect(config, application_name, validate_connection)
}
