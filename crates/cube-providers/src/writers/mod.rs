//! Writer Driver Implementations
//!
//! | Driver | Format | Aliases |
//! |--------|--------|---------|
//! | [`NetcdfWriterDriver`] | NetCDF | `NetCDF CF` |
//! | [`GeotiffWriterDriver`] | GeoTIFF | `GeoTIFF`, `tif` |

#[cfg(feature = "writer-geotiff")]
pub mod geotiff;
#[cfg(feature = "writer-netcdf")]
pub mod netcdf;

#[cfg(feature = "writer-geotiff")]
pub use geotiff::GeotiffWriterDriver;
#[cfg(feature = "writer-netcdf")]
pub use netcdf::NetcdfWriterDriver;
