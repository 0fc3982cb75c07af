//! Cardvault Core
//!
//! Foundational types shared by every Cardvault crate:
//!
//! - **Card catalog**: [`Card`] records and the closed [`Rarity`] tiers
//! - **View state**: [`ViewStore`], an injectable store holding the view mode,
//!   selection, and booster session, mutated only through its actions
//! - **Data providers**: the [`CardProvider`] seam with a bundled JSON catalog
//! - **Booster pulls**: [`pull_booster`] draws a hand from a card pool
//! - **Math**: small [`Vec2`]/[`Vec3`]/[`Color`] value types
//!
//! # Example
//!
//! ```rust
//! use cardvault_core::{ViewMode, ViewStore};
//!
//! let mut store = ViewStore::new();
//! store.select_card("card-007");
//! assert_eq!(store.state().view_mode(), ViewMode::Inspect);
//!
//! store.deselect_card();
//! assert_eq!(store.state().selected_card_id(), None);
//! ```

pub mod booster;
pub mod card;
pub mod error;
pub mod math;
pub mod provider;
pub mod store;
pub mod view;

pub use booster::{pull_booster, BOOSTER_HAND_SIZE};
pub use card::{Card, Rarity};
pub use error::{CatalogError, Result};
pub use math::{Color, Vec2, Vec3};
pub use provider::{create_provider, BundledProvider, CardProvider, ProviderKind, RemoteProvider};
pub use store::{SubscriptionId, ViewState, ViewStore};
pub use view::{BoosterPhase, RevealedSet, ViewMode};
