//! Card records and rarity tiers
//!
//! Cards are immutable once loaded; identity is the `id` string.

use crate::math::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rarity tier of a card
///
/// The six known tiers are a closed set. Raw values outside that set are
/// kept verbatim in [`Rarity::Other`] so lookups can fall back instead of
/// failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Classique,
    Uncommon,
    Legendary,
    Historique,
    Concept,
    /// Top tier, rendered with the holographic band overlay
    Blueprint,
    /// Unrecognized raw value
    Other(String),
}

impl Rarity {
    /// Known tiers from lowest to highest
    pub const TIERS: [Rarity; 6] = [
        Rarity::Classique,
        Rarity::Uncommon,
        Rarity::Legendary,
        Rarity::Historique,
        Rarity::Concept,
        Rarity::Blueprint,
    ];

    /// Parse a raw rarity string (case-insensitive)
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "classique" => Rarity::Classique,
            "uncommon" => Rarity::Uncommon,
            "legendary" => Rarity::Legendary,
            "historique" => Rarity::Historique,
            "concept" => Rarity::Concept,
            "blueprint" => Rarity::Blueprint,
            _ => Rarity::Other(raw.to_string()),
        }
    }

    /// Raw identifier as stored in the catalog
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Classique => "classique",
            Rarity::Uncommon => "uncommon",
            Rarity::Legendary => "legendary",
            Rarity::Historique => "historique",
            Rarity::Concept => "concept",
            Rarity::Blueprint => "blueprint",
            Rarity::Other(raw) => raw,
        }
    }

    /// Sort rank; unknown tiers rank below every known tier
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::Other(_) => 0,
            Rarity::Classique => 1,
            Rarity::Uncommon => 2,
            Rarity::Legendary => 3,
            Rarity::Historique => 4,
            Rarity::Concept => 5,
            Rarity::Blueprint => 6,
        }
    }

    /// Edge and placeholder color
    pub fn color(&self) -> Color {
        match self {
            Rarity::Classique => Color::from_hex(0x9ca3af),
            Rarity::Uncommon => Color::from_hex(0x22c55e),
            Rarity::Legendary => Color::from_hex(0xf59e0b),
            Rarity::Historique => Color::from_hex(0xb45309),
            Rarity::Concept => Color::from_hex(0xa855f7),
            Rarity::Blueprint => Color::from_hex(0x38bdf8),
            Rarity::Other(_) => Color::GRAY,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> String {
        match self {
            Rarity::Classique => "Classique".to_string(),
            Rarity::Uncommon => "Uncommon".to_string(),
            Rarity::Legendary => "Legendary".to_string(),
            Rarity::Historique => "Historique".to_string(),
            Rarity::Concept => "Concept".to_string(),
            Rarity::Blueprint => "Blueprint".to_string(),
            Rarity::Other(raw) => raw.to_uppercase(),
        }
    }

    /// Symbol drawn on placeholder art when the artwork is unavailable
    pub fn symbol(&self) -> char {
        match self {
            Rarity::Classique => '●',
            Rarity::Uncommon => '◆',
            Rarity::Legendary => '★',
            Rarity::Historique => '♜',
            Rarity::Concept => '✦',
            Rarity::Blueprint => '⬡',
            Rarity::Other(_) => '?',
        }
    }

    /// Whether this tier gets the holographic band overlay
    pub fn has_holo(&self) -> bool {
        matches!(self, Rarity::Blueprint)
    }
}

impl From<String> for Rarity {
    fn from(raw: String) -> Self {
        Rarity::parse(&raw)
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.as_str().to_string()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collectible card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub set: String,
    #[serde(default)]
    pub description: String,
    /// Artwork URL or path
    pub image: String,
    /// Custom card back, falls back to the shared back when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BTreeMap<String, serde_json::Value>>,
}

impl Card {
    /// Minimal card, mostly useful for tests and placeholders
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        let id = id.into();
        Self {
            image: format!("cards/{id}.png"),
            id,
            name: name.into(),
            rarity,
            set: String::new(),
            description: String::new(),
            back_image: None,
            stats: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tiers_case_insensitive() {
        assert_eq!(Rarity::parse("Blueprint"), Rarity::Blueprint);
        assert_eq!(Rarity::parse(" legendary "), Rarity::Legendary);
        for tier in Rarity::TIERS {
            assert_eq!(Rarity::parse(tier.as_str()), tier);
        }
    }

    #[test]
    fn test_unknown_rarity_falls_back() {
        let rarity = Rarity::parse("mythic");
        assert_eq!(rarity, Rarity::Other("mythic".to_string()));
        assert_eq!(rarity.label(), "MYTHIC");
        assert_eq!(rarity.color(), Color::GRAY);
        assert!(!rarity.has_holo());
        assert!(rarity.rank() < Rarity::Classique.rank());
    }

    #[test]
    fn test_only_blueprint_is_holo() {
        let tiers = Rarity::TIERS;
        let holo: Vec<_> = tiers.iter().filter(|r| r.has_holo()).collect();
        assert_eq!(holo, vec![&Rarity::Blueprint]);
    }

    #[test]
    fn test_card_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "card-001",
            "name": "Alpha",
            "rarity": "concept",
            "set": "origins",
            "image": "cards/card-001.png",
            "backImage": "backs/alt.png",
            "stats": { "power": 3 }
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.rarity, Rarity::Concept);
        assert_eq!(card.back_image.as_deref(), Some("backs/alt.png"));
        assert_eq!(card.description, "");
        assert_eq!(card.stats.unwrap()["power"], serde_json::json!(3));
    }
}
