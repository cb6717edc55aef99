//! Use Cases
//!
//! Workflows built on top of the driver registries.

pub mod index_connect;

pub use index_connect::{DriverSelector, index_connect};
