//! Index connection entry point
//!
//! Same workflow as `cube_application::use_cases::index_connect`, except the
//! configuration is loaded from the usual sources when the caller has none.

use std::sync::Arc;

use cube_domain::error::Result;
use cube_domain::ports::Index;
use cube_domain::value_objects::LocalConfig;

use crate::config::ConfigLoader;

/// Connect to the configured index
///
/// # Arguments
/// * `local_config` - Configuration to use; loaded with [`ConfigLoader`] when `None`
/// * `application_name` - Short name identifying this application to the index backend
/// * `validate_connection` - Validate the connection settings immediately
pub fn index_connect(
    local_config: Option<LocalConfig>,
    application_name: Option<&str>,
    validate_connection: bool,
) -> Result<Arc<dyn Index>> {
    let config = match local_config {
        Some(config) => config,
        None => ConfigLoader::new().load()?,
    };
    cube_application::use_cases::index_connect(&config, application_name, validate_connection)
}
