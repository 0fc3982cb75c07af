//! Gallery grid layout
//!
//! Cards fill rows of `columns` slots running downward from `y = 0`. With
//! grouping on, each rarity gets its own block, highest tier first, headed
//! by a separator row. With grouping off the catalog order is kept in one
//! flat grid.

use crate::camera::ContentExtent;
use crate::config::GalleryConfig;
use cardvault_core::{Card, Rarity, Vec3};

/// World position of one card in the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GallerySlot {
    /// Index into the card list that was arranged
    pub card_index: usize,
    pub position: Vec3,
}

/// Header row above a rarity group
#[derive(Clone, Debug, PartialEq)]
pub struct Separator {
    pub rarity: Rarity,
    pub label: String,
    /// Vertical center of the separator row
    pub y: f32,
}

/// Result of laying out a card list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryArrangement {
    pub slots: Vec<GallerySlot>,
    pub separators: Vec<Separator>,
    pub top: f32,
    pub height: f32,
}

impl GalleryArrangement {
    /// Scrollable extent for the camera
    pub fn extent(&self) -> ContentExtent {
        ContentExtent {
            top: self.top,
            height: self.height,
        }
    }

    /// Slot of the card at `card_index` in the arranged list
    pub fn slot_of(&self, card_index: usize) -> Option<&GallerySlot> {
        self.slots.iter().find(|s| s.card_index == card_index)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GalleryLayout {
    config: GalleryConfig,
}

impl GalleryLayout {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    pub fn arrange(&self, cards: &[Card]) -> GalleryArrangement {
        let mut arrangement = GalleryArrangement::default();
        let mut cursor_y = 0.0;

        if self.config.grouping {
            let mut order: Vec<usize> = (0..cards.len()).collect();
            // Stable, so catalog order survives inside each group
            order.sort_by(|&a, &b| {
                let (ra, rb) = (&cards[a].rarity, &cards[b].rarity);
                rb.rank().cmp(&ra.rank()).then_with(|| ra.as_str().cmp(rb.as_str()))
            });

            for group in order.chunk_by(|&a, &b| cards[a].rarity == cards[b].rarity) {
                let rarity = cards[group[0]].rarity.clone();
                let half = self.config.separator_height / 2.0;
                arrangement.separators.push(Separator {
                    label: rarity.label(),
                    rarity,
                    y: cursor_y - half,
                });
                cursor_y -= self.config.separator_height;
                cursor_y = self.place_rows(group, cursor_y, &mut arrangement.slots);
            }
        } else {
            let order: Vec<usize> = (0..cards.len()).collect();
            cursor_y = self.place_rows(&order, cursor_y, &mut arrangement.slots);
        }

        arrangement.height = -cursor_y;
        tracing::trace!(
            cards = cards.len(),
            groups = arrangement.separators.len(),
            height = arrangement.height,
            "gallery arranged"
        );
        arrangement
    }

    /// Lay `indices` out in rows starting at `top`; returns the new bottom
    fn place_rows(&self, indices: &[usize], top: f32, slots: &mut Vec<GallerySlot>) -> f32 {
        let columns = self.config.columns.max(1);
        let center = (columns - 1) as f32 / 2.0;
        let mut y = top;
        for row in indices.chunks(columns) {
            let row_center = y - self.config.spacing_y / 2.0;
            for (col, &card_index) in row.iter().enumerate() {
                slots.push(GallerySlot {
                    card_index,
                    position: Vec3::new(
                        (col as f32 - center) * self.config.spacing_x,
                        row_center,
                        0.0,
                    ),
                });
            }
            y -= self.config.spacing_y;
        }
        y
    }
}
