//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the datacube driver registry
#[derive(Error, Debug)]
pub enum Error {
    /// The configured index driver is not registered
    ///
    /// Raised by the index driver selector only. Writer lookups report a
    /// missing driver as `None` instead.
    #[error(
        "No index driver found for '{name}'. {} available: {}",
        .available.len(),
        .available.join(", ")
    )]
    DriverNotFound {
        /// Group the lookup was made against
        group: String,
        /// The requested driver name
        name: String,
        /// Every name the registry knows about
        available: Vec<String>,
    },

    /// A registered driver could not be instantiated
    #[error("Failed to load driver '{name}' in group '{group}': {message}")]
    DriverLoad {
        /// Group being loaded
        group: String,
        /// Name of the failing driver
        name: String,
        /// Failure reported by the driver factory
        message: String,
    },

    /// An alias collided with an existing registry key
    #[error("Driver name '{name}' is already registered in group '{group}'")]
    DriverConflict {
        /// Group being built
        group: String,
        /// The colliding key
        name: String,
    },

    /// The provider does not serve the requested group
    #[error("Unknown driver group: {group}")]
    UnknownDriverGroup {
        /// The requested group
        group: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Index connection error
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Driver error creation methods
impl Error {
    /// Create the index selector's driver-not-found error
    pub fn driver_not_found<G, N>(group: G, name: N, available: Vec<String>) -> Self
    where
        G: Into<String>,
        N: Into<String>,
    {
        Self::DriverNotFound {
            group: group.into(),
            name: name.into(),
            available,
        }
    }

    /// Create a driver load error
    pub fn driver_load<G, N, M>(group: G, name: N, message: M) -> Self
    where
        G: Into<String>,
        N: Into<String>,
        M: Into<String>,
    {
        Self::DriverLoad {
            group: group.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a driver conflict error
    pub fn driver_conflict<G: Into<String>, N: Into<String>>(group: G, name: N) -> Self {
        Self::DriverConflict {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Create an unknown group error
    pub fn unknown_driver_group<G: Into<String>>(group: G) -> Self {
        Self::UnknownDriverGroup {
            group: group.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Connection error creation methods
impl Error {
    /// Create a connection error
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with source
    pub fn connection_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// General error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
