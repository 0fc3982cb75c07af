//! Error types for cardvault_viewer

use cardvault_core::CatalogError;
use thiserror::Error;

/// Errors raised while setting up a viewer
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ViewerConfig`](crate::ViewerConfig)
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The card catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for cardvault_viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;
