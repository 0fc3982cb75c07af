//! View-state store
//!
//! One [`ViewStore`] is built at the application root and handed by reference
//! to whatever needs it. Fields are read through [`ViewState`] and written
//! only through the store's actions; every action that changes state notifies
//! subscribers with the new state.
//!
//! # Example
//!
//! ```rust
//! use cardvault_core::{BoosterPhase, Card, Rarity, ViewStore};
//!
//! let mut store = ViewStore::new();
//! let hand: Vec<Card> = (0..5)
//!     .map(|i| Card::new(format!("c{i}"), "Card", Rarity::Classique))
//!     .collect();
//!
//! store.start_booster(hand);
//! store.tear_open();
//! store.finish_opening();
//! for i in 0..5 {
//!     store.reveal_card(i);
//! }
//! assert_eq!(store.state().booster_phase(), BoosterPhase::Summary);
//! ```

use crate::card::Card;
use crate::view::{BoosterPhase, RevealedSet, ViewMode};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ViewStore::subscribe`]
    pub struct SubscriptionId;
}

/// Snapshot of every store field
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    cards: Vec<Card>,
    catalog_revision: u64,
    selected_card_id: Option<String>,
    view_mode: ViewMode,
    inspect_flipped: bool,
    booster_phase: BoosterPhase,
    booster_cards: Vec<Card>,
    revealed: RevealedSet,
}

impl ViewState {
    /// The whole collection
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Bumped by every `set_cards`, even when the new list looks the same
    pub fn catalog_revision(&self) -> u64 {
        self.catalog_revision
    }

    pub fn selected_card_id(&self) -> Option<&str> {
        self.selected_card_id.as_deref()
    }

    /// The selected card, if its id is in the collection
    pub fn selected_card(&self) -> Option<&Card> {
        let id = self.selected_card_id.as_deref()?;
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Whether the inspected card shows its back
    pub fn inspect_flipped(&self) -> bool {
        self.inspect_flipped
    }

    pub fn booster_phase(&self) -> BoosterPhase {
        self.booster_phase
    }

    /// The hand pulled for the current booster session
    pub fn booster_cards(&self) -> &[Card] {
        &self.booster_cards
    }

    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(index)
    }

    fn hand_complete(&self) -> bool {
        !self.booster_cards.is_empty() && self.revealed.len() == self.booster_cards.len()
    }
}

type Subscriber = Box<dyn Fn(&ViewState)>;

/// Injectable view-state container
///
/// Actions return `true` when they changed state. Actions that are not valid
/// in the current phase are ignored and return `false`.
#[derive(Default)]
pub struct ViewStore {
    state: ViewState,
    subscribers: SlotMap<SubscriptionId, Subscriber>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a collection
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut store = Self::new();
        store.set_cards(cards);
        store
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Subscribe to state changes
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ViewState) + 'static,
    {
        self.subscribers.insert(Box::new(callback))
    }

    /// Remove a subscription, returning `false` if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    fn notify(&self) {
        for callback in self.subscribers.values() {
            callback(&self.state);
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        tracing::debug!(count = cards.len(), "catalog loaded");
        self.state.cards = cards;
        self.state.catalog_revision += 1;
        self.notify();
    }

    /// Select a card for inspection and switch to inspect mode
    pub fn select_card(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(card = %id, "select card");
        self.state.selected_card_id = Some(id);
        self.state.inspect_flipped = false;
        self.state.view_mode = ViewMode::Inspect;
        self.notify();
    }

    /// Clear the selection and return to the gallery
    pub fn deselect_card(&mut self) {
        self.state.selected_card_id = None;
        self.state.inspect_flipped = false;
        self.state.view_mode = ViewMode::Gallery;
        self.notify();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode == mode {
            return;
        }
        tracing::debug!(?mode, "view mode");
        self.state.view_mode = mode;
        self.notify();
    }

    /// Toggle the inspected card between front and back
    pub fn toggle_flip(&mut self) {
        self.state.inspect_flipped = !self.state.inspect_flipped;
        self.notify();
    }

    /// Begin a booster session with a freshly pulled hand
    pub fn start_booster(&mut self, cards: Vec<Card>) {
        tracing::debug!(hand = cards.len(), "booster started");
        self.state.booster_cards = cards;
        self.state.revealed.clear();
        self.state.booster_phase = BoosterPhase::Pack;
        self.state.view_mode = ViewMode::Booster;
        self.notify();
    }

    /// `pack -> opening`
    pub fn tear_open(&mut self) -> bool {
        self.advance_from(BoosterPhase::Pack)
    }

    /// `opening -> revealing`
    pub fn finish_opening(&mut self) -> bool {
        self.advance_from(BoosterPhase::Opening)
    }

    fn advance_from(&mut self, expected: BoosterPhase) -> bool {
        if self.state.booster_phase != expected {
            tracing::trace!(
                phase = ?self.state.booster_phase,
                ?expected,
                "ignored booster transition"
            );
            return false;
        }
        let Some(next) = expected.next() else {
            return false;
        };
        tracing::debug!(from = ?expected, to = ?next, "booster phase");
        self.state.booster_phase = next;
        self.notify();
        true
    }

    /// Flip one booster card face-up
    ///
    /// Only valid while revealing. Revealing an index twice is a no-op.
    /// Revealing the last face-down card moves the session to summary.
    pub fn reveal_card(&mut self, index: usize) -> bool {
        if !self.state.booster_phase.accepts_reveals() {
            tracing::trace!(index, phase = ?self.state.booster_phase, "reveal ignored");
            return false;
        }
        if index >= self.state.booster_cards.len() {
            tracing::warn!(
                index,
                hand = self.state.booster_cards.len(),
                "reveal index out of range"
            );
            return false;
        }
        if !self.state.revealed.insert(index) {
            return false;
        }
        self.complete_if_revealed();
        self.notify();
        true
    }

    /// Flip every booster card face-up at once
    pub fn reveal_all(&mut self) -> bool {
        if !self.state.booster_phase.accepts_reveals() {
            return false;
        }
        let mut changed = false;
        for index in 0..self.state.booster_cards.len() {
            changed |= self.state.revealed.insert(index);
        }
        if changed {
            self.complete_if_revealed();
            self.notify();
        }
        changed
    }

    fn complete_if_revealed(&mut self) {
        if self.state.hand_complete() {
            tracing::debug!("booster hand fully revealed");
            self.state.booster_phase = BoosterPhase::Summary;
        }
    }

    /// End the session and return to the gallery
    pub fn close_booster(&mut self) {
        self.state.booster_cards.clear();
        self.state.revealed.clear();
        self.state.booster_phase = BoosterPhase::Pack;
        self.state.view_mode = ViewMode::Gallery;
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rarity;
    use std::cell::Cell;
    use std::rc::Rc;

    fn hand() -> Vec<Card> {
        (0..5)
            .map(|i| Card::new(format!("card-{i:03}"), "Card", Rarity::Classique))
            .collect()
    }

    fn revealing_store() -> ViewStore {
        let mut store = ViewStore::new();
        store.start_booster(hand());
        assert!(store.tear_open());
        assert!(store.finish_opening());
        store
    }

    #[test]
    fn test_select_and_deselect() {
        let mut store = ViewStore::new();
        store.select_card("card-007");
        assert_eq!(store.state().view_mode(), ViewMode::Inspect);
        assert_eq!(store.state().selected_card_id(), Some("card-007"));

        store.deselect_card();
        assert_eq!(store.state().view_mode(), ViewMode::Gallery);
        assert_eq!(store.state().selected_card_id(), None);
    }

    #[test]
    fn test_set_cards_bumps_revision() {
        let mut store = ViewStore::new();
        assert_eq!(store.state().catalog_revision(), 0);
        store.set_cards(hand());
        store.set_cards(hand());
        assert_eq!(store.state().catalog_revision(), 2);
    }

    #[test]
    fn test_flip_resets_on_selection() {
        let mut store = ViewStore::new();
        store.select_card("a");
        store.toggle_flip();
        assert!(store.state().inspect_flipped());
        store.select_card("b");
        assert!(!store.state().inspect_flipped());
    }

    #[test]
    fn test_phases_only_move_forward() {
        let mut store = ViewStore::new();
        store.start_booster(hand());
        assert!(!store.finish_opening());
        assert!(store.tear_open());
        assert!(!store.tear_open());
        assert!(store.finish_opening());
        assert!(!store.finish_opening());
        assert_eq!(store.state().booster_phase(), BoosterPhase::Revealing);
    }

    #[test]
    fn test_reveal_rejected_before_revealing() {
        let mut store = ViewStore::new();
        store.start_booster(hand());
        assert!(!store.reveal_card(0));
        store.tear_open();
        assert!(!store.reveal_card(0));
        assert!(!store.reveal_all());
        assert!(store.state().revealed().is_empty());
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut store = revealing_store();
        assert!(store.reveal_card(2));
        assert!(!store.reveal_card(2));
        assert_eq!(store.state().revealed().len(), 1);
        assert_eq!(store.state().booster_phase(), BoosterPhase::Revealing);
    }

    #[test]
    fn test_last_reveal_moves_to_summary() {
        let mut store = revealing_store();
        for i in 0..4 {
            store.reveal_card(i);
        }
        assert_eq!(store.state().booster_phase(), BoosterPhase::Revealing);
        store.reveal_card(4);
        assert_eq!(store.state().booster_phase(), BoosterPhase::Summary);
        assert!(!store.reveal_card(0));
    }

    #[test]
    fn test_reveal_out_of_range_is_ignored() {
        let mut store = revealing_store();
        assert!(!store.reveal_card(5));
        assert!(store.state().revealed().is_empty());
    }

    #[test]
    fn test_reveal_all_completes_hand() {
        let mut store = revealing_store();
        store.reveal_card(1);
        assert!(store.reveal_all());
        assert_eq!(store.state().revealed().len(), 5);
        assert_eq!(store.state().booster_phase(), BoosterPhase::Summary);
    }

    #[test]
    fn test_close_booster_resets_session() {
        let mut store = revealing_store();
        store.reveal_card(0);
        store.close_booster();
        let state = store.state();
        assert_eq!(state.booster_phase(), BoosterPhase::Pack);
        assert!(state.revealed().is_empty());
        assert!(state.booster_cards().is_empty());
        assert_eq!(state.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_subscribers_see_effective_actions_only() {
        let mut store = ViewStore::new();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.start_booster(hand());
        store.finish_opening(); // ignored
        store.tear_open();
        assert_eq!(calls.get(), 2);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.close_booster();
        assert_eq!(calls.get(), 2);
    }
}
