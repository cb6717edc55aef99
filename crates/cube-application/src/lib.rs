//! Application Layer - Datacube Driver Registry
//!
//! Builds and serves the per-group driver registries and the workflow that
//! selects and connects an index driver.
//!
//! ## Registries
//!
//! - `registry::DriverRegistry`: name and alias index for one driver group
//! - `registry::RegistryCell`: process-wide, build-once holder for a registry
//! - `registry::writers` / `registry::index`: the two driver groups, their
//!   linkme slices and their query functions
//!
//! ## Use Cases
//!
//! - `use_cases::index_connect`: resolve the configured index driver and connect
//!
//! ## Dependencies
//!
//! This crate depends only on `cube-domain` plus `tracing` and `linkme`.

pub mod registry;
pub mod use_cases;

pub use registry::*;
pub use use_cases::*;
