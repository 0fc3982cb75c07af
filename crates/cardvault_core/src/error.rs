//! Catalog error types

use thiserror::Error;

/// Errors raised while loading the card catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed
    #[error("Failed to parse card catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The selected provider has no implementation yet
    #[error("Card provider not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
