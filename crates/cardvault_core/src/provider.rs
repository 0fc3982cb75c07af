//! Card data providers
//!
//! The viewer only consumes the in-memory card list; where it comes from is
//! decided by a [`ProviderKind`] switch at startup.

use crate::card::Card;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;

/// Catalog bundled into the binary
const BUNDLED_CATALOG: &str = include_str!("../data/cards.json");

/// Source of card records
#[async_trait]
pub trait CardProvider: Send + Sync {
    /// Fetch the whole collection
    async fn get_cards(&self) -> Result<Vec<Card>>;

    /// Fetch a single card by id, `None` when unknown
    async fn get_card_by_id(&self, id: &str) -> Result<Option<Card>>;
}

/// Which provider backs the catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderKind {
    /// Static JSON compiled into the binary
    #[default]
    Bundled,
    /// Remote API, not implemented
    Remote,
}

/// Build the provider selected by `kind`
pub fn create_provider(kind: ProviderKind) -> Result<Box<dyn CardProvider>> {
    match kind {
        ProviderKind::Bundled => Ok(Box::new(BundledProvider::new()?)),
        ProviderKind::Remote => Ok(Box::new(RemoteProvider)),
    }
}

/// Provider over a static JSON card list
#[derive(Clone, Debug)]
pub struct BundledProvider {
    cards: Vec<Card>,
}

impl BundledProvider {
    /// Parse the catalog shipped with the crate
    pub fn new() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from a JSON array of cards
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        tracing::debug!(count = cards.len(), "parsed card catalog");
        Ok(Self { cards })
    }

    /// The parsed catalog, without going through the async interface
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[async_trait]
impl CardProvider for BundledProvider {
    async fn get_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    async fn get_card_by_id(&self, id: &str) -> Result<Option<Card>> {
        Ok(self.cards.iter().find(|c| c.id == id).cloned())
    }
}

/// Remote API provider
///
/// Every call fails with [`CatalogError::NotImplemented`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteProvider;

#[async_trait]
impl CardProvider for RemoteProvider {
    async fn get_cards(&self) -> Result<Vec<Card>> {
        Err(CatalogError::NotImplemented("remote get_cards"))
    }

    async fn get_card_by_id(&self, _id: &str) -> Result<Option<Card>> {
        Err(CatalogError::NotImplemented("remote get_card_by_id"))
    }
}
