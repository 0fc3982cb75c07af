//! Decoded image data

use crate::error::{ImageError, Result};
use base64::Engine;
use image::{DynamicImage, GenericImageView, RgbaImage};

/// Decoded image data ready for upload as a texture
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected_len {
            return Err(ImageError::Decode(format!(
                "Invalid pixel data length: expected {}, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Decode image from raw bytes (format sniffed from the header)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Decode image from base64
    ///
    /// Accepts plain base64 or a data URI such as
    /// `data:image/png;base64,iVBORw0KGgo...`.
    pub fn from_base64(data: &str) -> Result<Self> {
        let base64_data = if data.starts_with("data:") {
            data.find(";base64,")
                .map(|pos| &data[pos + 8..])
                .ok_or_else(|| ImageError::InvalidDataUri("missing ;base64, marker".to_string()))?
        } else {
            data
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(base64_data)?;
        Self::from_bytes(&bytes)
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
        }
    }

    /// Wrap an already drawn RGBA buffer
    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.into_raw(),
            width,
            height,
        }
    }

    /// Get the raw RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at (x, y), `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = &self.pixels[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}
