//! Domain Layer - Datacube Driver Registry
//!
//! Core types shared by every layer of the driver registry:
//!
//! - `ports::driver`: driver capabilities (`Driver`, `WriterDriver`, `IndexDriver`, `Index`)
//! - `ports::provider`: the `DriverProvider` discovery port
//! - `value_objects`: configuration values handed to drivers
//! - `error`: the shared error type
//!
//! This crate depends only on pure libraries (`serde`, `thiserror`).

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
