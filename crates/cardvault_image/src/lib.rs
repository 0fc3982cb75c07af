//! Cardvault Image Loading
//!
//! Card artwork and card backs are fetched asynchronously. Until an image
//! resolves, and permanently if it fails, a procedurally drawn placeholder is
//! shown instead.
//!
//! - [`ImageData`]: decoded RGBA pixels
//! - [`ImageSource`]: where an image comes from (file, data URI, URL)
//! - [`AssetSource`]: pluggable async fetch + decode
//! - [`TextureSlot`]: a texture that starts as a placeholder and swaps in the
//!   real image when its load completes; dropping it cancels the load

pub mod error;
pub mod loader;
pub mod placeholder;
pub mod source;
pub mod texture;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use placeholder::{card_back_placeholder, card_placeholder, Placeholder};
pub use source::{AssetSource, FileAssetSource, ImageSource};
pub use texture::{CancelToken, TextureLoader, TextureSlot, TextureStatus};
