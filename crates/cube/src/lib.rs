//! # Datacube Driver Registry
//!
//! Plugin driver registry for datacube: writer and index drivers register
//! themselves at compile time, are indexed by name and alias once per
//! process, and are resolved on demand.
//!
//! ## Example
//!
//! ```ignore
//! use cube::application::registry::storage_writer_by_name;
//!
//! let writer = storage_writer_by_name("NetCDF CF")?.expect("netcdf driver is linked");
//! let uri = writer.mk_uri(std::path::Path::new("/data/tile.nc"))?;
//!
//! let index = cube::infrastructure::index_connect(None, Some("ingest"), true)?;
//! println!("{}", index.url());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Driver capabilities, errors and configuration values
//! - `application` - Registries, singleton holders and driver selection
//! - `infrastructure` - Configuration loading and logging
//! - `providers` - Built-in drivers
//! - `cli` - The `cube` command line

// Force-link cube-providers to ensure linkme registrations are included
extern crate cube_providers;

/// Domain layer - driver capabilities, errors and configuration values
pub mod domain {
    pub use cube_domain::*;
}

/// Application layer - registries and driver selection
pub mod application {
    pub use cube_application::*;
}

/// Infrastructure layer - configuration loading and logging
pub mod infrastructure {
    pub use cube_infrastructure::*;
}

/// Built-in drivers
pub mod providers {
    pub use cube_providers::*;
}

pub mod cli;

pub use cube_domain::{Error, Result};
