//! Booster sequence controller
//!
//! Drives the pack-opening ritual from the phase held in the store:
//!
//! ```text
//! PACK       pack eases in; dragging the top strip up past the threshold tears it
//! OPENING    flap lifts and swings open, body drops, pack shrinks; timer-driven
//! REVEALING  cards enter one by one, face-down; a click flips one face-up
//! SUMMARY    every card face-up
//! ```
//!
//! The controller never writes phase itself. Gestures and the opening timer
//! call store actions, and the controller reacts to whatever phase it reads
//! on the next frame.

use crate::card::{CardEntity, CardPose, HoloDrive};
use crate::config::{BoosterConfig, CardConfig};
use cardvault_animation::{clamp, lerp, Smoothed};
use cardvault_core::{BoosterPhase, Card, Vec2, Vec3, ViewStore};
use cardvault_image::{
    card_back_placeholder, card_placeholder, Placeholder, TextureLoader, TextureSlot,
};
use cardvault_platform::Cursor;
use smallvec::SmallVec;

const PACK_ENTRY_OFFSET: Vec3 = Vec3::new(0.0, -3.0, 0.0);
const PACK_ENTRY_SCALE: f32 = 0.6;
const CARD_ENTRY_POSITION: Vec3 = Vec3::new(0.0, -4.0, 0.0);
const CARD_ENTRY_SCALE: f32 = 0.3;
const MIN_TEAR_THRESHOLD_PX: f32 = 1.0;

/// Pack geometry for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackPose {
    pub position: Vec3,
    pub scale: f32,
    /// Vertical offset of the top flap
    pub flap_lift: f32,
    /// Flap rotation about its hinge (radians)
    pub flap_angle: f32,
    /// Downward offset of the pack body
    pub body_drop: f32,
}

/// Upward drag on the pack's top strip
#[derive(Clone, Copy, Debug, Default)]
struct TearGesture {
    armed: bool,
    start_y: f32,
    progress: f32,
}

/// One card slot of the revealed hand
struct BoosterSlot {
    entity: CardEntity,
    /// Custom back from the card record; `None` shows the shared back
    back: Option<TextureSlot>,
    position: Smoothed<Vec3>,
    scale: Smoothed<f32>,
    final_position: Vec3,
}

/// Per-session booster animation state
pub struct BoosterController {
    config: BoosterConfig,
    card_config: CardConfig,
    observed_phase: Option<BoosterPhase>,
    pack_position: Smoothed<Vec3>,
    pack_scale: Smoothed<f32>,
    tear: TearGesture,
    opening_elapsed: f32,
    finish_requested: bool,
    reveal_elapsed: f32,
    slots: SmallVec<[BoosterSlot; 5]>,
    textures: Option<TextureLoader>,
    pack_texture: TextureSlot,
    back_texture: TextureSlot,
}

impl BoosterController {
    pub fn new(config: BoosterConfig, card_config: CardConfig) -> Self {
        Self {
            config,
            card_config,
            observed_phase: None,
            pack_position: Smoothed::from_to(PACK_ENTRY_OFFSET, Vec3::ZERO),
            pack_scale: Smoothed::from_to(PACK_ENTRY_SCALE, 1.0),
            tear: TearGesture::default(),
            opening_elapsed: 0.0,
            finish_requested: false,
            reveal_elapsed: 0.0,
            slots: SmallVec::new(),
            textures: None,
            pack_texture: TextureSlot::placeholder(pack_placeholder()),
            back_texture: TextureSlot::placeholder(card_back_placeholder()),
        }
    }

    /// Load pack art, card back, and card fronts through `loader`
    pub fn with_textures(
        mut self,
        loader: TextureLoader,
        pack_image: &str,
        back_image: &str,
    ) -> Self {
        self.pack_texture = loader.load(pack_image, pack_placeholder());
        self.back_texture = loader.load(back_image, card_back_placeholder());
        self.textures = Some(loader);
        self
    }

    pub fn pack_texture(&self) -> &TextureSlot {
        &self.pack_texture
    }

    pub fn back_texture(&self) -> &TextureSlot {
        &self.back_texture
    }

    /// Drag progress toward the tear threshold, 0.0..=1.0
    pub fn tear_progress(&self) -> f32 {
        self.tear.progress
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Entity of a revealed-hand slot
    pub fn slot(&self, index: usize) -> Option<&CardEntity> {
        self.slots.get(index).map(|s| &s.entity)
    }

    /// Back texture shown while a slot is face-down
    pub fn slot_back_texture(&self, index: usize) -> Option<&TextureSlot> {
        let slot = self.slots.get(index)?;
        Some(slot.back.as_ref().unwrap_or(&self.back_texture))
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer pressed on the pack's top strip
    pub fn pointer_down(&mut self, position: Vec2, store: &ViewStore) -> Option<Cursor> {
        if store.state().booster_phase() != BoosterPhase::Pack {
            return None;
        }
        self.tear = TearGesture {
            armed: true,
            start_y: position.y,
            progress: 0.0,
        };
        Some(Cursor::Grabbing)
    }

    /// Pointer moved while a tear may be in progress
    ///
    /// Returns `true` on the move that tears the pack open.
    pub fn pointer_move(&mut self, position: Vec2, store: &mut ViewStore) -> bool {
        if !self.tear.armed {
            return false;
        }
        let threshold = self.config.tear_threshold_px.max(MIN_TEAR_THRESHOLD_PX);
        let distance = self.tear.start_y - position.y;
        self.tear.progress = clamp(distance / threshold, 0.0, 1.0);

        if distance > threshold {
            self.tear = TearGesture::default();
            if store.tear_open() {
                tracing::debug!(distance, "pack torn open");
                return true;
            }
        }
        false
    }

    /// Pointer released; an unfinished tear does nothing
    pub fn pointer_up(&mut self) {
        self.tear = TearGesture::default();
    }

    pub fn hover_enter(&mut self, slot: usize) -> Option<Cursor> {
        self.slots.get_mut(slot).map(|s| s.entity.pointer_enter())
    }

    pub fn hover_move(&mut self, slot: usize, uv: Vec2) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.entity.pointer_move(uv);
        }
    }

    pub fn hover_leave(&mut self, slot: usize) -> Option<Cursor> {
        self.slots.get_mut(slot).map(|s| s.entity.pointer_leave())
    }

    /// Card clicked; reveals it unless already face-up
    pub fn click(&mut self, slot: usize, store: &mut ViewStore) -> bool {
        let Some(s) = self.slots.get(slot) else {
            return false;
        };
        if s.entity.click().is_none() || store.state().is_revealed(slot) {
            return false;
        }
        store.reveal_card(slot)
    }

    /// Flip every remaining card face-up
    pub fn reveal_all(&mut self, store: &mut ViewStore) -> bool {
        store.reveal_all()
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    fn enter_phase(&mut self, phase: BoosterPhase, store: &ViewStore) {
        tracing::debug!(?phase, "booster scene phase");
        match phase {
            BoosterPhase::Pack => {
                self.pack_position = Smoothed::from_to(PACK_ENTRY_OFFSET, Vec3::ZERO);
                self.pack_scale = Smoothed::from_to(PACK_ENTRY_SCALE, 1.0);
                self.tear = TearGesture::default();
                self.slots.clear();
            }
            BoosterPhase::Opening => {
                self.tear = TearGesture::default();
                self.opening_elapsed = 0.0;
                self.finish_requested = false;
            }
            BoosterPhase::Revealing | BoosterPhase::Summary => {
                if self.slots.is_empty() {
                    self.reveal_elapsed = 0.0;
                    self.mount_slots(store.state().booster_cards());
                }
            }
        }
    }

    fn mount_slots(&mut self, hand: &[Card]) {
        let count = hand.len();
        let spacing = self.config.slot_spacing;
        let center = (count.saturating_sub(1)) as f32 / 2.0;
        self.slots = hand
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let mut entity = CardEntity::new(card, self.card_config, HoloDrive::Time);
                if let Some(loader) = &self.textures {
                    entity = entity.with_texture(
                        loader.load(&card.image, card_placeholder(card)),
                    );
                }
                entity.snap_flipped(true);
                entity.attach();
                let back = match (&self.textures, card.back_image.as_deref()) {
                    (Some(loader), Some(reference)) => {
                        Some(loader.load(reference, card_back_placeholder()))
                    }
                    _ => None,
                };
                BoosterSlot {
                    entity,
                    back,
                    position: Smoothed::new(CARD_ENTRY_POSITION),
                    scale: Smoothed::new(CARD_ENTRY_SCALE),
                    final_position: Vec3::new((i as f32 - center) * spacing, 0.0, 0.0),
                }
            })
            .collect();
    }

    /// Advance one frame; returns the pack pose while the pack is on screen
    pub fn update(&mut self, dt: f32, elapsed: f32, store: &mut ViewStore) -> Option<PackPose> {
        let phase = store.state().booster_phase();
        if self.observed_phase != Some(phase) {
            self.enter_phase(phase, store);
            self.observed_phase = Some(phase);
        }

        self.pack_texture.poll();
        self.back_texture.poll();

        match phase {
            BoosterPhase::Pack => Some(self.update_pack(dt)),
            BoosterPhase::Opening => Some(self.update_opening(dt, store)),
            BoosterPhase::Revealing | BoosterPhase::Summary => {
                self.update_slots(dt, elapsed, store);
                None
            }
        }
    }

    fn update_pack(&mut self, dt: f32) -> PackPose {
        let rate = self.config.smoothing_rate;
        PackPose {
            position: self.pack_position.step(rate, dt),
            scale: self.pack_scale.step(rate, dt),
            flap_lift: self.tear.progress * self.config.flap_preview_lift,
            flap_angle: 0.0,
            body_drop: 0.0,
        }
    }

    fn update_opening(&mut self, dt: f32, store: &mut ViewStore) -> PackPose {
        self.opening_elapsed += dt;
        let c = self.config;
        let p = clamp(self.opening_elapsed / c.opening_duration, 0.0, 1.0);

        if self.opening_elapsed > c.scale_delay {
            self.pack_scale.set_target(0.0);
        }
        let rate = c.smoothing_rate;
        let pose = PackPose {
            position: self.pack_position.step(rate, dt),
            scale: self.pack_scale.step(rate, dt),
            flap_lift: lerp(c.flap_preview_lift, c.flap_preview_lift + c.flap_open_lift, p),
            flap_angle: p * c.flap_open_angle,
            body_drop: p * p * c.body_drop,
        };

        if self.opening_elapsed > c.opening_duration && !self.finish_requested {
            self.finish_requested = true;
            tracing::debug!(elapsed = self.opening_elapsed, "opening animation finished");
            store.finish_opening();
        }
        pose
    }

    fn update_slots(&mut self, dt: f32, elapsed: f32, store: &ViewStore) {
        self.reveal_elapsed += dt;
        let rate = self.config.smoothing_rate;
        let step = self.config.stagger_ms / 1000.0;
        let state = store.state();

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if self.reveal_elapsed >= i as f32 * step {
                slot.position.set_target(slot.final_position);
                slot.scale.set_target(1.0);
                slot.position.step(rate, dt);
                slot.scale.step(rate, dt);
            }
            let revealed = state.is_revealed(i);
            slot.entity.set_flipped(!revealed);
            slot.entity.set_revealed(revealed);
            if let Some(back) = slot.back.as_mut() {
                back.poll();
            }
            slot.entity.set_base_position(slot.position.current());
            slot.entity.set_scale(slot.scale.current());
            slot.entity.update(dt, elapsed);
        }
    }

    /// Poses of the revealed-hand cards from the last update
    pub fn card_poses(&self) -> Vec<CardPose> {
        self.slots.iter().map(|s| s.entity.pose()).collect()
    }
}

impl std::fmt::Debug for BoosterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoosterController")
            .field("observed_phase", &self.observed_phase)
            .field("tear_progress", &self.tear.progress)
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

fn pack_placeholder() -> Placeholder {
    let mut placeholder = card_back_placeholder();
    placeholder.label = "Booster".to_string();
    placeholder
}
