//! Local configuration value
//!
//! Flat view of the selected configuration environment. Values are kept as
//! strings; drivers parse what they need.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENVIRONMENT;

/// Configuration for one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Name of the selected environment
    pub environment: String,
    /// Settings visible in that environment
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl LocalConfig {
    /// Create an empty configuration for the given environment
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a value
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a value, or `default` when the key is not set
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map_or(default, String::as_str)
    }

    /// Get a value if it is set
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the key is set
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}
