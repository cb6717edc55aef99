//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the driver registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration loading with figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |
//! | [`connect`] | Index connection that loads configuration on demand |
//! | [`constants`] | Loader and logging constants |

// Force-link cube-providers so the built-in drivers' linkme registrations are included
extern crate cube_providers;

pub mod config;
pub mod connect;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, LoggingConfig};
pub use connect::index_connect;
pub use error_ext::ErrorContext;
