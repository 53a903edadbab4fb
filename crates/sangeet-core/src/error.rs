//! Error types for Mhara Sangeet

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::RegionId;

/// Top-level error type
#[derive(Debug, Error)]
pub enum SangeetError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No region with id {0} in the catalog")]
    UnknownRegion(RegionId),
}

/// Errors raised while bringing up or driving the map widget.
///
/// Both load and initialization failures are terminal for the map view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Map library not loaded: {0}")]
    LibraryUnavailable(String),

    #[error("Failed to initialize the map: {0}")]
    Initialization(String),

    #[error("Map bridge failure: {0}")]
    Bridge(String),
}

impl MapError {
    /// Message shown to the user in the map error panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            MapError::LibraryUnavailable(_) => {
                "Leaflet library not loaded. Check the network connection and the configured script URL."
            }
            MapError::Initialization(_) | MapError::Bridge(_) => {
                "Failed to initialize the map. Please check the log for details."
            }
        }
    }
}

/// Errors related to loading viewer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type alias using SangeetError
pub type Result<T> = std::result::Result<T, SangeetError>;

/// Result type alias for map operations
pub type MapResult<T> = std::result::Result<T, MapError>;
