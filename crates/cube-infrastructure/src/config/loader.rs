//! Configuration loader
//!
//! Loads a [`LocalConfig`] from a TOML file and environment variables using
//! figment. The file holds one table per environment:
//!
//! ```toml
//! [default]
//! index_driver = "default"
//! db_hostname = "localhost"
//! db_port = 5432
//!
//! [staging]
//! db_hostname = "db.staging.example"
//! ```
//!
//! The selected environment inherits every key from `[default]`.
//! `DATACUBE_<KEY>` environment variables override file values in every
//! environment.

use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_PATH_VAR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    ENVIRONMENT_VAR,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use cube_domain::constants::DEFAULT_ENVIRONMENT;
use cube_domain::error::{Error, Result};
use cube_domain::value_objects::LocalConfig;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Scalar configuration value as written in the file or environment
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment to select
    environment: Option<String>,

    /// Environment variable prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            environment: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Select the configuration environment
    pub fn with_environment<S: Into<String>>(mut self, environment: S) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `[default]` table of the configuration file
    /// 2. The selected environment's table
    /// 3. Environment variables with prefix (e.g., `DATACUBE_DB_HOSTNAME`)
    pub fn load(&self) -> Result<LocalConfig> {
        let environment = self.resolve_environment();
        let mut figment = Figment::new();
        let mut file_loaded = false;

        if let Some(config_path) = self.resolve_config_path() {
            if config_path.exists() {
                figment = figment.merge(Toml::file(&config_path).nested());
                log_config_loaded(&config_path, true);
                file_loaded = true;
            } else {
                log_config_loaded(&config_path, false);
            }
        }

        let selectors = [CONFIG_PATH_VAR, ENVIRONMENT_VAR];
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .filter(move |key| {
                    !selectors
                        .iter()
                        .any(|selector| key.as_str().eq_ignore_ascii_case(selector))
                })
                .global(),
        );

        if environment != DEFAULT_ENVIRONMENT
            && !figment
                .profiles()
                .any(|profile| *profile == *environment.as_str())
        {
            return Err(Error::configuration(format!(
                "No configuration section found for environment '{environment}'{}",
                if file_loaded { "" } else { " (no configuration file loaded)" }
            )));
        }

        let values: BTreeMap<String, ScalarValue> = figment
            .select(environment.as_str())
            .extract()
            .config_context("Failed to extract configuration")?;

        Ok(LocalConfig {
            environment,
            values: values
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
        })
    }

    /// Save a configuration to file as its environment's table
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &LocalConfig, path: P) -> Result<()> {
        let document = BTreeMap::from([(config.environment.as_str(), &config.values)]);
        let toml_string =
            toml::to_string_pretty(&document).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the explicitly configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn resolve_environment(&self) -> String {
        self.environment
            .clone()
            .or_else(|| env::var(format!("{}_{ENVIRONMENT_VAR}", self.env_prefix)).ok())
            .filter(|environment| !environment.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    fn resolve_config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        if let Some(path) = env::var_os(format!("{}_{CONFIG_PATH_VAR}", self.env_prefix)) {
            return Some(PathBuf::from(path));
        }
        Self::find_default_config_path()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| d.join(format!(".{DEFAULT_CONFIG_FILENAME}"))),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_path", &self.config_path)
            .field("environment", &self.environment)
            .field("env_prefix", &self.env_prefix)
            .finish()
    }
}
