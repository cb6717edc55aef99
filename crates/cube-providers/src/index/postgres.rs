//! PostgreSQL index driver
//!
//! Registered as the `default` index driver. Connecting records the
//! connection settings read from the configuration; with
//! `validate_connection` the settings are checked up front instead of on
//! first use.
//!
//! ## Configuration keys
//!
//! | Key | Default |
//! |-----|---------|
//! | `db_hostname` | `localhost` |
//! | `db_port` | `5432` |
//! | `db_database` | `datacube` |
//! | `db_username` | unset |
//! | `db_password` | unset |
//! | `db_connection_timeout` | `60` |

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use cube_application::registry::{INDEX_DRIVERS, IndexDriverEntry};
use cube_domain::error::{Error, Result};
use cube_domain::ports::{Driver, Index, IndexDriver};
use cube_domain::value_objects::LocalConfig;
use tracing::debug;

use crate::constants::{
    APPLICATION_NAME_SUFFIX, DEFAULT_DB_CONNECTION_TIMEOUT_SECS, DEFAULT_DB_DATABASE,
    DEFAULT_DB_HOSTNAME, DEFAULT_DB_PORT, MAX_APPLICATION_NAME_LEN, POSTGRES_DRIVER_NAME,
};

/// Connection settings for a PostgreSQL index
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Server host name
    pub hostname: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Login user, if configured
    pub username: Option<String>,
    /// Login password, if configured
    pub password: Option<String>,
    /// Connection timeout
    pub connection_timeout: Duration,
    /// Application name reported to the server
    pub application_name: String,
}

impl ConnectionSettings {
    /// Read the settings from `config`
    ///
    /// Values that are present but malformed (a non-numeric port, say) are
    /// configuration errors whether or not the connection is validated.
    pub fn from_config(config: &LocalConfig, application_name: Option<&str>) -> Result<Self> {
        let port = parse_setting(config, "db_port", DEFAULT_DB_PORT)?;
        let timeout_secs = parse_setting(
            config,
            "db_connection_timeout",
            DEFAULT_DB_CONNECTION_TIMEOUT_SECS,
        )?;

        Ok(Self {
            hostname: config.get("db_hostname", DEFAULT_DB_HOSTNAME).to_string(),
            port,
            database: config.get("db_database", DEFAULT_DB_DATABASE).to_string(),
            username: config.get_opt("db_username").map(str::to_string),
            password: config.get_opt("db_password").map(str::to_string),
            connection_timeout: Duration::from_secs(timeout_secs),
            application_name: full_application_name(application_name),
        })
    }

    /// Check the settings are complete and well formed
    pub fn validate(&self) -> Result<()> {
        if self.hostname.trim().is_empty() {
            return Err(Error::connection("Database host name is empty"));
        }
        if self.port == 0 {
            return Err(Error::connection("Database port cannot be 0"));
        }
        if self.database.trim().is_empty() {
            return Err(Error::connection("Database name is empty"));
        }
        if self.connection_timeout.is_zero() {
            return Err(Error::connection("Connection timeout cannot be 0"));
        }
        if self.application_name.len() > MAX_APPLICATION_NAME_LEN {
            return Err(Error::connection(format!(
                "Application name is longer than {MAX_APPLICATION_NAME_LEN} characters: {}",
                self.application_name
            )));
        }
        if self.application_name.chars().any(char::is_control) {
            return Err(Error::connection(
                "Application name contains control characters",
            ));
        }
        Ok(())
    }

    /// Connection URL without the password
    pub fn url(&self) -> String {
        match &self.username {
            Some(user) => format!(
                "postgresql://{user}@{}:{}/{}",
                self.hostname, self.port, self.database
            ),
            None => format!(
                "postgresql://{}:{}/{}",
                self.hostname, self.port, self.database
            ),
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("connection_timeout", &self.connection_timeout)
            .field("application_name", &self.application_name)
            .finish()
    }
}

fn parse_setting<T: std::str::FromStr>(config: &LocalConfig, key: &str, default: T) -> Result<T> {
    match config.get_opt(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            Error::configuration(format!("Invalid value for {key}: {raw:?}"))
        }),
    }
}

fn full_application_name(application_name: Option<&str>) -> String {
    match application_name {
        Some(name) if !name.trim().is_empty() => {
            format!("{} {APPLICATION_NAME_SUFFIX}", name.trim())
        }
        _ => APPLICATION_NAME_SUFFIX.to_string(),
    }
}

/// Index backed by a PostgreSQL database
#[derive(Debug)]
pub struct PostgresIndex {
    settings: ConnectionSettings,
    application_name: Option<String>,
}

impl PostgresIndex {
    /// Settings this index connects with
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }
}

impl Index for PostgresIndex {
    fn driver_name(&self) -> &str {
        POSTGRES_DRIVER_NAME
    }

    fn url(&self) -> String {
        self.settings.url()
    }

    fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }
}

/// The `default` index driver
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresIndexDriver;

impl PostgresIndexDriver {
    /// Create the driver
    pub fn new() -> Self {
        Self
    }
}

impl Driver for PostgresIndexDriver {
    fn name(&self) -> &str {
        POSTGRES_DRIVER_NAME
    }

    fn aliases(&self) -> &[&'static str] {
        &["postgres"]
    }
}

impl IndexDriver for PostgresIndexDriver {
    fn connect_to_index(
        &self,
        config: &LocalConfig,
        application_name: Option<&str>,
        validate_connection: bool,
    ) -> Result<Arc<dyn Index>> {
        let settings = ConnectionSettings::from_config(config, application_name)?;
        if validate_connection {
            settings.validate()?;
        }
        debug!(url = %settings.url(), validated = validate_connection, "PostgreSQL index configured");

        Ok(Arc::new(PostgresIndex {
            settings,
            application_name: application_name.map(str::to_string),
        }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(INDEX_DRIVERS)]
static POSTGRES_INDEX: IndexDriverEntry = IndexDriverEntry {
    name: POSTGRES_DRIVER_NAME,
    description: "PostgreSQL index",
    factory: || Ok(Arc::new(PostgresIndexDriver::new())),
};
