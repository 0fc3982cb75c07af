//! Booster pulls

use crate::card::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cards in one booster hand
pub const BOOSTER_HAND_SIZE: usize = 5;

/// Draw a booster hand from `pool`
///
/// Draws [`BOOSTER_HAND_SIZE`] cards uniformly with replacement, so
/// duplicates are possible. An empty pool yields an empty hand.
pub fn pull_booster<R: Rng + ?Sized>(pool: &[Card], rng: &mut R) -> Vec<Card> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..BOOSTER_HAND_SIZE)
        .filter_map(|_| pool.choose(rng).cloned())
        .collect()
}
