//! Image sources and the async asset fetch seam

use crate::error::{ImageError, Result};
use crate::loader::ImageData;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where an image is loaded from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Path relative to the asset root
    File(PathBuf),
    /// Inline `data:` URI
    DataUri(String),
    /// `http://` or `https://` URL
    Url(String),
}

impl ImageSource {
    /// Classify an artwork reference from the catalog
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("data:") {
            ImageSource::DataUri(reference.to_string())
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            ImageSource::Url(reference.to_string())
        } else {
            ImageSource::File(PathBuf::from(reference))
        }
    }
}

/// Fetches and decodes images
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, source: &ImageSource) -> Result<ImageData>;
}

/// Asset source backed by a directory on disk
///
/// URLs are fetched over HTTP when the `network` feature is enabled.
#[derive(Clone, Debug)]
pub struct FileAssetSource {
    root: PathBuf,
}

impl FileAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for FileAssetSource {
    async fn fetch(&self, source: &ImageSource) -> Result<ImageData> {
        match source {
            ImageSource::File(path) => {
                let full = self.root.join(path);
                let data = tokio::fs::read(&full)
                    .await
                    .map_err(|e| ImageError::FileLoad(format!("{}: {}", full.display(), e)))?;
                ImageData::from_bytes(&data)
            }

            ImageSource::DataUri(uri) => ImageData::from_base64(uri),

            ImageSource::Url(url) => fetch_url(url).await,
        }
    }
}

#[cfg(feature = "network")]
async fn fetch_url(url: &str) -> Result<ImageData> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ImageError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ImageError::Network(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ImageError::Network(e.to_string()))?;

    ImageData::from_bytes(&bytes)
}

#[cfg(not(feature = "network"))]
async fn fetch_url(url: &str) -> Result<ImageData> {
    Err(ImageError::Network(format!(
        "URL loading requires the 'network' feature: {url}"
    )))
}
