//! Domain Port Interfaces
//!
//! Capabilities that drivers implement and the discovery port the registry
//! consumes. Implementations live in `cube-providers`; the registry itself
//! lives in `cube-application`.

pub mod driver;
pub mod provider;

pub use driver::{Driver, Index, IndexDriver, WriterDriver};
pub use provider::{DriverMap, DriverProvider};
