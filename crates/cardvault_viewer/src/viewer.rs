//! Application root
//!
//! [`Viewer`] owns the view store and every controller. The host calls
//! [`Viewer::frame`] once per displayed frame and forwards input through
//! [`Viewer::handle_input`]. Both run on the same thread, so controllers hold
//! plain mutable state with no synchronization.
//!
//! The mounted scene follows the store: when the view mode, the inspected
//! card, or the gallery catalog changes, the old scene is dropped (cancelling
//! its texture loads) and a fresh one is built with new animation state.

use crate::booster::{BoosterController, PackPose};
use crate::camera::{CameraController, CameraPose, ContentExtent};
use crate::card::{CardEntity, CardPose, HoloDrive};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::gallery::{GalleryArrangement, GalleryLayout};
use crate::inspect::{InspectController, InspectPose};
use cardvault_core::{pull_booster, CardProvider, ViewMode, ViewStore};
use cardvault_image::{card_placeholder, TextureLoader};
use cardvault_platform::{
    Cursor, HitTarget, InputEvent, InputResponse, PointerEvent, PointerKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shared booster pack artwork
pub const PACK_IMAGE: &str = "booster/pack.png";
/// Shared card back artwork
pub const CARD_BACK_IMAGE: &str = "cards/back.png";

/// Everything the renderer needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub mode: ViewMode,
    pub camera: CameraPose,
    /// Gallery cards or booster hand, in slot order
    pub cards: Vec<CardPose>,
    pub inspect: Option<InspectPose>,
    /// Present while the booster pack is on screen
    pub pack: Option<PackPose>,
}

enum Scene {
    Empty,
    Gallery(Vec<CardEntity>),
    Inspect(Box<InspectController>),
    Booster(Box<BoosterController>),
}

/// Identity of the mounted scene; a change triggers a remount
#[derive(Clone, Debug, PartialEq)]
struct MountKey {
    mode: ViewMode,
    selected: Option<String>,
    catalog: u64,
}

impl MountKey {
    fn of(store: &ViewStore) -> Self {
        let state = store.state();
        let mode = state.view_mode();
        Self {
            mode,
            selected: match mode {
                ViewMode::Inspect => state.selected_card_id().map(str::to_owned),
                _ => None,
            },
            catalog: match mode {
                ViewMode::Gallery => state.catalog_revision(),
                _ => 0,
            },
        }
    }
}

pub struct Viewer {
    config: ViewerConfig,
    store: ViewStore,
    camera: CameraController,
    layout: GalleryLayout,
    arrangement: GalleryArrangement,
    scene: Scene,
    mounted: Option<MountKey>,
    elapsed: f32,
    textures: Option<TextureLoader>,
    rng: StdRng,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            store: ViewStore::new(),
            camera: CameraController::new(config.camera),
            layout: GalleryLayout::new(config.gallery),
            arrangement: GalleryArrangement::default(),
            scene: Scene::Empty,
            mounted: None,
            elapsed: 0.0,
            textures: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Load catalog data from `provider` and start in the gallery
    pub async fn from_provider(provider: &dyn CardProvider, config: ViewerConfig) -> Result<Self> {
        let cards = provider.get_cards().await?;
        tracing::info!(cards = cards.len(), "catalog loaded");
        let mut viewer = Self::new(config);
        viewer.store.set_cards(cards);
        Ok(viewer)
    }

    /// Fetch card art through `loader`; without it only placeholders show
    pub fn with_textures(mut self, loader: TextureLoader) -> Self {
        self.textures = Some(loader);
        self.mounted = None;
        self
    }

    /// Deterministic booster pulls
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    /// Direct store access; the scene catches up on the next frame or input
    pub fn store_mut(&mut self) -> &mut ViewStore {
        &mut self.store
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn arrangement(&self) -> &GalleryArrangement {
        &self.arrangement
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Mounted gallery cards, empty outside the gallery
    pub fn gallery_cards(&self) -> &[CardEntity] {
        match &self.scene {
            Scene::Gallery(entities) => entities.as_slice(),
            _ => &[],
        }
    }

    pub fn inspect(&self) -> Option<&InspectController> {
        match &self.scene {
            Scene::Inspect(controller) => Some(controller.as_ref()),
            _ => None,
        }
    }

    pub fn booster(&self) -> Option<&BoosterController> {
        match &self.scene {
            Scene::Booster(controller) => Some(controller.as_ref()),
            _ => None,
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Whether the booster pull action is enabled
    pub fn can_pull(&self) -> bool {
        !self.store.state().cards().is_empty()
    }

    /// Pull a hand from the catalog and start a booster session
    pub fn pull_booster(&mut self) -> bool {
        if !self.can_pull() {
            tracing::debug!("booster pull disabled, catalog is empty");
            return false;
        }
        let hand = pull_booster(self.store.state().cards(), &mut self.rng);
        self.store.start_booster(hand);
        true
    }

    pub fn reveal_all(&mut self) -> bool {
        self.store.reveal_all()
    }

    pub fn close_booster(&mut self) {
        self.store.close_booster();
    }

    // =========================================================================
    // Scene mounting
    // =========================================================================

    fn sync_scene(&mut self) {
        let key = MountKey::of(&self.store);
        if self.mounted.as_ref() == Some(&key) {
            return;
        }
        tracing::debug!(mode = ?key.mode, selected = ?key.selected, "mounting scene");

        // Drop the old scene first so its pending loads are cancelled
        self.scene = Scene::Empty;
        self.scene = match key.mode {
            ViewMode::Gallery => self.mount_gallery(),
            ViewMode::Inspect => self.mount_inspect(),
            ViewMode::Booster => self.mount_booster(),
        };
        let extent = match key.mode {
            ViewMode::Gallery => self.arrangement.extent(),
            _ => ContentExtent::default(),
        };
        self.camera.set_view_mode(key.mode, extent);
        self.mounted = Some(key);
    }

    fn mount_gallery(&mut self) -> Scene {
        let cards = self.store.state().cards();
        self.arrangement = self.layout.arrange(cards);
        let entities = self
            .arrangement
            .slots
            .iter()
            .map(|slot| {
                let card = &cards[slot.card_index];
                let mut entity = CardEntity::new(card, self.config.card, HoloDrive::Tilt);
                if let Some(loader) = &self.textures {
                    entity = entity.with_texture(loader.load(&card.image, card_placeholder(card)));
                }
                entity.set_base_position(slot.position);
                entity.attach();
                entity
            })
            .collect();
        Scene::Gallery(entities)
    }

    fn mount_inspect(&self) -> Scene {
        let state = self.store.state();
        let Some(card) = state.selected_card() else {
            tracing::warn!(
                selected = ?state.selected_card_id(),
                "inspect without a known card, nothing mounted"
            );
            return Scene::Empty;
        };
        let mut controller = InspectController::new(card, self.config.inspect, self.config.card)
            .started_at(self.elapsed);
        if let Some(loader) = &self.textures {
            controller =
                controller.with_texture(loader.load(&card.image, card_placeholder(card)));
        }
        Scene::Inspect(Box::new(controller))
    }

    fn mount_booster(&self) -> Scene {
        let mut controller = BoosterController::new(self.config.booster, self.config.card);
        if let Some(loader) = &self.textures {
            controller = controller.with_textures(loader.clone(), PACK_IMAGE, CARD_BACK_IMAGE);
        }
        Scene::Booster(Box::new(controller))
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance every mounted component by `dt` seconds
    pub fn frame(&mut self, dt: f32) -> Frame {
        self.elapsed += dt;
        self.sync_scene();
        let elapsed = self.elapsed;

        let mut cards = Vec::new();
        let mut inspect = None;
        let mut pack = None;
        match &mut self.scene {
            Scene::Empty => {}
            Scene::Gallery(entities) => {
                cards.extend(entities.iter_mut().filter_map(|e| e.update(dt, elapsed)));
            }
            Scene::Inspect(controller) => {
                let flipped = self.store.state().inspect_flipped();
                inspect = Some(controller.update(dt, elapsed, flipped));
            }
            Scene::Booster(controller) => {
                pack = controller.update(dt, elapsed, &mut self.store);
                cards = controller.card_poses();
            }
        }

        Frame {
            mode: self.store.state().view_mode(),
            camera: self.camera.update(dt),
            cards,
            inspect,
            pack,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route one host input event to the mounted scene
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        self.sync_scene();
        match event {
            InputEvent::Wheel { delta_y, .. } => InputResponse {
                cursor: None,
                scroll: self.camera.on_wheel(delta_y),
            },
            InputEvent::Pointer(pointer) => {
                let cursor = match &mut self.scene {
                    Scene::Empty => None,
                    Scene::Gallery(entities) => gallery_pointer(entities, pointer, &mut self.store),
                    Scene::Inspect(controller) => {
                        inspect_pointer(controller, pointer, &mut self.store)
                    }
                    Scene::Booster(controller) => {
                        booster_pointer(controller, pointer, &mut self.store)
                    }
                };
                cursor.map_or_else(InputResponse::none, InputResponse::with_cursor)
            }
        }
    }
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("mounted", &self.mounted)
            .field("elapsed", &self.elapsed)
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

fn gallery_pointer(
    entities: &mut [CardEntity],
    pointer: PointerEvent,
    store: &mut ViewStore,
) -> Option<Cursor> {
    let HitTarget::Card { slot, uv } = pointer.target else {
        return None;
    };
    let entity = entities.get_mut(slot)?;
    match pointer.kind {
        PointerKind::Enter => Some(entity.pointer_enter()),
        PointerKind::Move => {
            entity.pointer_move(uv);
            None
        }
        PointerKind::Leave => Some(entity.pointer_leave()),
        PointerKind::Click => {
            let id = entity.click()?.to_owned();
            store.select_card(id);
            None
        }
        PointerKind::Down | PointerKind::Up | PointerKind::DoubleClick => None,
    }
}

fn inspect_pointer(
    controller: &mut InspectController,
    pointer: PointerEvent,
    store: &mut ViewStore,
) -> Option<Cursor> {
    let on_card = matches!(pointer.target, HitTarget::Card { .. });
    match pointer.kind {
        PointerKind::Down if on_card => Some(controller.drag_start(pointer.position)),
        PointerKind::Move if controller.captures(pointer.target) => {
            controller.drag_move(pointer.position);
            None
        }
        PointerKind::Up if controller.is_dragging() => Some(controller.drag_end()),
        PointerKind::Enter if on_card => Some(Cursor::Grab),
        PointerKind::Leave if on_card && !controller.is_dragging() => Some(Cursor::Default),
        PointerKind::DoubleClick if on_card => {
            controller.double_click();
            store.toggle_flip();
            None
        }
        _ => None,
    }
}

fn booster_pointer(
    controller: &mut BoosterController,
    pointer: PointerEvent,
    store: &mut ViewStore,
) -> Option<Cursor> {
    match (pointer.kind, pointer.target) {
        (PointerKind::Down, HitTarget::PackTop) => controller.pointer_down(pointer.position, store),
        (PointerKind::Move, target) => {
            controller.pointer_move(pointer.position, store);
            if let HitTarget::Card { slot, uv } = target {
                controller.hover_move(slot, uv);
            }
            None
        }
        (PointerKind::Up, _) => {
            controller.pointer_up();
            None
        }
        (PointerKind::Enter, HitTarget::PackTop) => Some(Cursor::Grab),
        // Only the top strip tears; the body is inert
        (PointerKind::Enter, HitTarget::Pack) | (PointerKind::Leave, HitTarget::PackTop) => {
            Some(Cursor::Default)
        }
        (PointerKind::Enter, HitTarget::Card { slot, .. }) => controller.hover_enter(slot),
        (PointerKind::Leave, HitTarget::Card { slot, .. }) => controller.hover_leave(slot),
        (PointerKind::Click, HitTarget::Card { slot, .. }) => {
            controller.click(slot, store);
            None
        }
        _ => None,
    }
}
