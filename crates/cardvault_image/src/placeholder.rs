//! Procedural placeholder art
//!
//! Placeholders are deterministic: the same card always gets the same image.
//! The label is drawn by the overlay layer, not rasterized here.

use crate::loader::ImageData;
use cardvault_core::{Card, Color};
use image::{Rgba, RgbaImage};
use std::sync::Arc;

/// Placeholder texture size, card aspect ratio 5:7
pub const PLACEHOLDER_WIDTH: u32 = 250;
pub const PLACEHOLDER_HEIGHT: u32 = 350;

const BORDER: u32 = 10;

/// A generated stand-in texture
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub image: Arc<ImageData>,
    /// Text shown over the fill
    pub label: String,
}

/// Placeholder for a card's face: darkened rarity fill, rarity-colored border
pub fn card_placeholder(card: &Card) -> Placeholder {
    let edge = card.rarity.color();
    let image = framed(edge.darken(0.6), edge);
    Placeholder {
        image: Arc::new(image),
        label: format!("{} {}", card.rarity.symbol(), card.name),
    }
}

/// Placeholder for the shared card back
pub fn card_back_placeholder() -> Placeholder {
    let image = framed(Color::from_hex(0x1e293b), Color::from_hex(0x475569));
    Placeholder {
        image: Arc::new(image),
        label: "Cardvault".to_string(),
    }
}

fn framed(fill: Color, border: Color) -> ImageData {
    let fill = Rgba(fill.to_rgba8());
    let border = Rgba(border.to_rgba8());
    let (w, h) = (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    let img = RgbaImage::from_fn(w, h, |x, y| {
        let on_edge = x < BORDER || y < BORDER || x >= w - BORDER || y >= h - BORDER;
        if on_edge {
            border
        } else {
            fill
        }
    });
    ImageData::from_rgba_image(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardvault_core::Rarity;

    #[test]
    fn test_card_placeholder_uses_rarity_colors() {
        let card = Card::new("card-011", "Kestrel Airship", Rarity::Blueprint);
        let placeholder = card_placeholder(&card);
        let edge = Rarity::Blueprint.color().to_rgba8();

        assert_eq!(placeholder.image.width(), PLACEHOLDER_WIDTH);
        assert_eq!(placeholder.image.pixel(0, 0), Some(edge));
        assert_eq!(
            placeholder.image.pixel(PLACEHOLDER_WIDTH / 2, PLACEHOLDER_HEIGHT / 2),
            Some(Rarity::Blueprint.color().darken(0.6).to_rgba8())
        );
        assert!(placeholder.label.ends_with("Kestrel Airship"));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let card = Card::new("x", "X", Rarity::Other("odd".into()));
        assert_eq!(card_placeholder(&card), card_placeholder(&card));
    }
}
