//! Inspect interaction controller
//!
//! Free two-axis rotation of the focused card. Dragging writes yaw/pitch
//! targets and records the per-sample delta as velocity; after release the
//! targets keep moving by that velocity while it decays geometrically. With
//! no input for `idle_timeout` seconds and no residual velocity, the targets
//! follow a slow sinusoidal sway instead.

use crate::card::HoloOverlay;
use crate::config::{CardConfig, InspectConfig};
use cardvault_animation::{clamp, Smoothed};
use cardvault_core::{Card, Rarity, Vec2, Vec3};
use cardvault_image::TextureSlot;
use cardvault_platform::{Cursor, HitTarget};
use std::f32::consts::PI;

/// Output of one inspect frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InspectPose {
    /// Euler rotation (x = pitch, y = yaw + flip)
    pub rotation: Vec3,
    /// Spot light position, orbiting with the current yaw
    pub light_position: Vec3,
    pub holo: HoloOverlay,
}

/// Drag/inertia/sway controller for one inspected card
pub struct InspectController {
    config: InspectConfig,
    card_config: CardConfig,
    card_id: String,
    rarity: Rarity,
    yaw: Smoothed<f32>,
    pitch: Smoothed<f32>,
    flip: Smoothed<f32>,
    /// Per-frame inertial velocity (yaw, pitch), radians
    velocity: Vec2,
    dragging: bool,
    last_pointer: Vec2,
    last_interaction: f32,
    clock: f32,
    texture: Option<TextureSlot>,
}

impl InspectController {
    pub fn new(card: &Card, config: InspectConfig, card_config: CardConfig) -> Self {
        Self {
            config,
            card_config,
            card_id: card.id.clone(),
            rarity: card.rarity.clone(),
            yaw: Smoothed::default(),
            pitch: Smoothed::default(),
            flip: Smoothed::default(),
            velocity: Vec2::ZERO,
            dragging: false,
            last_pointer: Vec2::ZERO,
            last_interaction: 0.0,
            clock: 0.0,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: TextureSlot) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Start the idle clock at `now`, the frame time the card is mounted at
    pub fn started_at(mut self, now: f32) -> Self {
        self.clock = now;
        self.last_interaction = now;
        self
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn texture(&self) -> Option<&TextureSlot> {
        self.texture.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current yaw and pitch targets
    pub fn targets(&self) -> (f32, f32) {
        (self.yaw.target(), self.pitch.target())
    }

    /// Whether a pointer move over `target` belongs to the drag
    ///
    /// The full-frame background keeps receiving moves after the pointer
    /// slides off the card mid-gesture.
    pub fn captures(&self, target: HitTarget) -> bool {
        self.dragging && matches!(target, HitTarget::Card { .. } | HitTarget::Background)
    }

    pub fn drag_start(&mut self, position: Vec2) -> Cursor {
        self.dragging = true;
        self.last_pointer = position;
        self.velocity = Vec2::ZERO;
        self.last_interaction = self.clock;
        Cursor::Grabbing
    }

    pub fn drag_move(&mut self, position: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = position - self.last_pointer;
        self.last_pointer = position;

        let d_yaw = delta.x * self.config.sensitivity;
        let d_pitch = delta.y * self.config.sensitivity;
        let max_pitch = self.config.max_pitch();

        self.yaw.set_target(self.yaw.target() + d_yaw);
        self.pitch
            .set_target(clamp(self.pitch.target() + d_pitch, -max_pitch, max_pitch));
        self.velocity = Vec2::new(d_yaw, d_pitch);
        self.last_interaction = self.clock;
    }

    pub fn drag_end(&mut self) -> Cursor {
        self.dragging = false;
        Cursor::Grab
    }

    /// Double click or double tap; the caller toggles the flip flag
    pub fn double_click(&mut self) {
        self.last_interaction = self.clock;
    }

    fn apply_inertia(&mut self) {
        let damping = self.config.damping;
        let max_pitch = self.config.max_pitch();
        self.yaw
            .set_target(self.yaw.target() + self.velocity.x * damping);
        self.pitch.set_target(clamp(
            self.pitch.target() + self.velocity.y * damping,
            -max_pitch,
            max_pitch,
        ));

        let decay = self.config.velocity_decay;
        let eps = self.config.velocity_epsilon;
        self.velocity.x *= decay;
        self.velocity.y *= decay;
        if self.velocity.x.abs() < eps {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < eps {
            self.velocity.y = 0.0;
        }
    }

    fn is_idle(&self) -> bool {
        self.clock - self.last_interaction > self.config.idle_timeout
            && self.velocity.x == 0.0
            && self.velocity.y == 0.0
    }

    /// Advance one frame; `flipped` comes from the store
    pub fn update(&mut self, dt: f32, elapsed: f32, flipped: bool) -> InspectPose {
        self.clock = elapsed;

        if !self.dragging {
            self.apply_inertia();
        }

        if !self.dragging && self.is_idle() {
            let c = &self.config;
            self.yaw
                .set_target((elapsed * c.sway_yaw_frequency).sin() * c.sway_yaw_amplitude);
            self.pitch.set_target(
                (elapsed * c.sway_pitch_frequency + c.sway_pitch_phase).sin()
                    * c.sway_pitch_amplitude,
            );
        }

        self.flip.set_target(if flipped { PI } else { 0.0 });

        let rate = self.config.smoothing_rate;
        let yaw = self.yaw.step(rate, dt);
        let pitch = self.pitch.step(rate, dt);
        let flip = self.flip.step(rate, dt);

        if let Some(texture) = self.texture.as_mut() {
            texture.poll();
        }

        let holo = if self.rarity.has_holo() {
            HoloOverlay::from_tilt(
                yaw.sin() * self.card_config.max_tilt,
                self.card_config.max_tilt,
                self.card_config.holo_intensity,
            )
        } else {
            HoloOverlay::default()
        };

        InspectPose {
            rotation: Vec3::new(pitch, yaw + flip, 0.0),
            light_position: Vec3::new(
                yaw.sin() * self.config.light_radius,
                self.config.light_height,
                yaw.cos() * self.config.light_radius,
            ),
            holo,
        }
    }
}

impl std::fmt::Debug for InspectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectController")
            .field("card_id", &self.card_id)
            .field("dragging", &self.dragging)
            .field("velocity", &self.velocity)
            .finish_non_exhaustive()
    }
}
