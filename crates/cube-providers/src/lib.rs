//! # Datacube Driver Registry - Built-in Drivers
//!
//! Driver implementations that register themselves into the slices declared
//! in `cube-application`. Linking this crate is enough to make them
//! discoverable; nothing has to be called.
//!
//! ## Drivers
//!
//! | Group | Driver | Aliases | Feature |
//! |-------|--------|---------|---------|
//! | Writer | [`writers::NetcdfWriterDriver`] | `NetCDF CF` | `writer-netcdf` |
//! | Writer | [`writers::GeotiffWriterDriver`] | `GeoTIFF`, `tif` | `writer-geotiff` |
//! | Index | [`index::PostgresIndexDriver`] | `postgres` | `index-postgres` |
//!
//! ## Usage
//!
//! ```ignore
//! // Force-link the drivers from a binary or test crate
//! extern crate cube_providers;
//!
//! let writer = cube_application::registry::storage_writer_by_name("netcdf")?;
//! ```

pub use cube_domain::error::{Error, Result};
pub use cube_domain::ports::{Driver, Index, IndexDriver, WriterDriver};

/// Driver-specific constants
pub mod constants;

/// Shared helpers for driver implementations
pub mod utils;

/// Dataset writer drivers
pub mod writers;

/// Index drivers
pub mod index;
