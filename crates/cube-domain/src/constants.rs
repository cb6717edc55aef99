//! Domain layer constants
//!
//! Driver group identifiers and well-known configuration keys. Loader and
//! logging constants live in `cube_infrastructure::constants`.

// ============================================================================
// DRIVER GROUPS
// ============================================================================

/// Group identifier for dataset writer drivers
pub const WRITER_DRIVER_GROUP: &str = "datacube.plugins.io.write";

/// Group identifier for index drivers
pub const INDEX_DRIVER_GROUP: &str = "datacube.plugins.index";

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Configuration key naming the index driver to connect with
pub const INDEX_DRIVER_KEY: &str = "index_driver";

/// Index driver used when the configuration does not name one
pub const DEFAULT_INDEX_DRIVER: &str = "default";

/// Name of the environment every other environment inherits from
pub const DEFAULT_ENVIRONMENT: &str = "default";
