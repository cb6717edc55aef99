//! Driver constants

// ============================================================================
// WRITER DRIVERS
// ============================================================================

/// Canonical name of the NetCDF writer
pub const NETCDF_DRIVER_NAME: &str = "netcdf";

/// Format label written by the NetCDF writer
pub const NETCDF_FORMAT: &str = "NetCDF";

/// Canonical name of the GeoTIFF writer
pub const GEOTIFF_DRIVER_NAME: &str = "geotiff";

/// Format label written by the GeoTIFF writer
pub const GEOTIFF_FORMAT: &str = "GeoTIFF";

/// URI scheme for local files
pub const FILE_URI_SCHEME: &str = "file";

// ============================================================================
// POSTGRES INDEX DRIVER
// ============================================================================

/// Canonical name of the PostgreSQL index driver
pub const POSTGRES_DRIVER_NAME: &str = "default";

/// Default database host
pub const DEFAULT_DB_HOSTNAME: &str = "localhost";

/// Default database port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database name
pub const DEFAULT_DB_DATABASE: &str = "datacube";

/// Default connection timeout in seconds
pub const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 60;

/// Maximum length of the application name reported to the server
pub const MAX_APPLICATION_NAME_LEN: usize = 64;

/// Identifier appended to every application name
pub const APPLICATION_NAME_SUFFIX: &str = "datacube";
