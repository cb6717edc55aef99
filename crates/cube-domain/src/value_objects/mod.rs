//! Domain Value Objects

pub mod config;

pub use config::LocalConfig;
