//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `cube_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "datacube.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "datacube";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DATACUBE";

/// Variable (after the prefix) naming the configuration file
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Variable (after the prefix) selecting the configuration environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DATACUBE_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "datacube";
