//! Image error types

use thiserror::Error;

/// Errors raised while loading an image
#[derive(Error, Debug)]
pub enum ImageError {
    /// The image bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The image codec rejected the data
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A data URI was malformed
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Base64 payload could not be decoded
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// A file could not be read
    #[error("Failed to load file: {0}")]
    FileLoad(String),

    /// A URL could not be fetched
    #[error("Network error: {0}")]
    Network(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
