//! Driver Registry System
//!
//! Discovers the drivers contributed to each driver group, indexes them by
//! canonical name and alias, and keeps one registry per group for the whole
//! process. Drivers register at compile time through `linkme` distributed
//! slices declared here.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Driver Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Driver defines:    #[linkme::distributed_slice(WRITERS)]    │
//! │                        static ENTRY: WriterDriverEntry = ...    │
//! │                              ↓                                  │
//! │  2. Provider loads:    LinkedDriverProvider::load(group)        │
//! │                              ↓                                  │
//! │  3. Registry indexes:  canonical names, then aliases            │
//! │                              ↓                                  │
//! │  4. Cell publishes:    RegistryCell (built once per group)      │
//! │                              ↓                                  │
//! │  5. Caller looks up:   storage_writer_by_name("NetCDF CF")      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Driver (in cube-providers)
//!
//! ```ignore
//! use cube_application::registry::{WRITER_DRIVERS, WriterDriverEntry};
//!
//! #[linkme::distributed_slice(WRITER_DRIVERS)]
//! static NETCDF_WRITER: WriterDriverEntry = WriterDriverEntry {
//!     name: "netcdf",
//!     description: "NetCDF CF writer",
//!     factory: || Ok(Arc::new(NetcdfWriterDriver::new())),
//! };
//! ```
//!
//! ### Resolving a Driver
//!
//! ```ignore
//! use cube_application::registry::storage_writer_by_name;
//!
//! let writer = storage_writer_by_name("NetCDF CF")?.expect("netcdf is linked");
//! ```

pub mod cell;
pub mod driver_registry;
pub mod index;
pub mod linked;
pub mod writers;

pub use cell::RegistryCell;
pub use driver_registry::{AliasPolicy, DriverRegistry};
pub use index::{
    INDEX_DRIVERS, IndexDriverEntry, index_cache, index_driver_by_name, index_drivers,
    index_provider, list_index_drivers,
};
pub use linked::{DriverPlugin, LinkedDriverProvider};
pub use writers::{
    WRITER_DRIVERS, WriterDriverEntry, list_writer_drivers, storage_writer_by_name, writer_cache,
    writer_drivers, writer_provider,
};
