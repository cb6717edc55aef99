//! Configuration
//!
//! Loads the [`LocalConfig`](cube_domain::LocalConfig) handed to index
//! drivers, and holds the logging configuration.

pub mod loader;
pub mod logging;

pub use loader::ConfigLoader;
pub use logging::LoggingConfig;
