//! Card visual entity
//!
//! Per-card presentation state: hover tilt, hover lift, flip, and the holo
//! band for top-tier cards. Each animated scalar is an independent
//! [`Smoothed`] value stepped once per frame at the same rate.

use crate::config::CardConfig;
use cardvault_animation::{clamp, Smoothed};
use cardvault_core::{Card, Rarity, Vec2, Vec3};
use cardvault_image::TextureSlot;
use cardvault_platform::Cursor;
use std::f32::consts::PI;

/// What drives the holo band position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoloDrive {
    /// Follows the card's tilt; visible while hovered (gallery, inspect)
    #[default]
    Tilt,
    /// Oscillates with elapsed time; visible once revealed (booster)
    Time,
}

/// Rainbow band overlay parameters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoloOverlay {
    /// Band position across the card, 0.0..=1.0
    pub band: f32,
    /// Overlay opacity, 0.0 when hidden
    pub intensity: f32,
}

impl HoloOverlay {
    /// Band position from a tilt angle in `[-max_tilt, max_tilt]`
    pub fn from_tilt(tilt: f32, max_tilt: f32, intensity: f32) -> Self {
        let normalized = if max_tilt > 0.0 { tilt / max_tilt } else { 0.0 };
        Self {
            band: clamp(0.5 + 0.5 * normalized, 0.0, 1.0),
            intensity,
        }
    }

    /// Band position from elapsed seconds
    pub fn from_time(elapsed: f32, speed: f32, intensity: f32) -> Self {
        Self {
            band: 0.5 + 0.5 * (elapsed * speed).sin(),
            intensity,
        }
    }
}

/// Transform and material parameters for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub position: Vec3,
    /// Euler rotation (x = tilt pitch, y = tilt yaw + flip)
    pub rotation: Vec3,
    pub scale: f32,
    pub holo: HoloOverlay,
}

/// One card on screen
pub struct CardEntity {
    card_id: String,
    rarity: Rarity,
    config: CardConfig,
    holo_drive: HoloDrive,
    attached: bool,
    hovered: bool,
    revealed: bool,
    base_position: Vec3,
    scale: f32,
    tilt_x: Smoothed<f32>,
    tilt_y: Smoothed<f32>,
    lift: Smoothed<f32>,
    flip: Smoothed<f32>,
    elapsed: f32,
    texture: Option<TextureSlot>,
}

impl CardEntity {
    pub fn new(card: &Card, config: CardConfig, holo_drive: HoloDrive) -> Self {
        Self {
            card_id: card.id.clone(),
            rarity: card.rarity.clone(),
            config,
            holo_drive,
            attached: false,
            hovered: false,
            revealed: false,
            base_position: Vec3::ZERO,
            scale: 1.0,
            tilt_x: Smoothed::default(),
            tilt_y: Smoothed::default(),
            lift: Smoothed::default(),
            flip: Smoothed::default(),
            elapsed: 0.0,
            texture: None,
        }
    }

    /// Attach the front texture
    pub fn with_texture(mut self, texture: TextureSlot) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn texture(&self) -> Option<&TextureSlot> {
        self.texture.as_ref()
    }

    /// Mark the scene objects as created; frames before this are no-ops
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_base_position(&mut self, position: Vec3) {
        self.base_position = position;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Face-down when `flipped`; the turn animates
    pub fn set_flipped(&mut self, flipped: bool) {
        self.flip.set_target(if flipped { PI } else { 0.0 });
    }

    /// Jump to face-down or face-up with no animation
    pub fn snap_flipped(&mut self, flipped: bool) {
        self.flip.snap(if flipped { PI } else { 0.0 });
    }

    /// Booster reveal state, shows the time-driven holo band
    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    pub fn pointer_enter(&mut self) -> Cursor {
        self.hovered = true;
        self.lift.set_target(self.config.hover_lift);
        Cursor::Pointer
    }

    /// Pointer moved over the card, `uv` in card space (0..1 on both axes)
    pub fn pointer_move(&mut self, uv: Vec2) {
        let nx = clamp(uv.x * 2.0 - 1.0, -1.0, 1.0);
        let ny = clamp(uv.y * 2.0 - 1.0, -1.0, 1.0);
        self.tilt_x.set_target(-ny * self.config.max_tilt);
        self.tilt_y.set_target(nx * self.config.max_tilt);
    }

    pub fn pointer_leave(&mut self) -> Cursor {
        self.hovered = false;
        self.tilt_x.set_target(0.0);
        self.tilt_y.set_target(0.0);
        self.lift.set_target(0.0);
        Cursor::Default
    }

    /// Id of the clicked card, `None` before the entity is attached
    pub fn click(&self) -> Option<&str> {
        self.attached.then_some(self.card_id.as_str())
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32, elapsed: f32) -> Option<CardPose> {
        if !self.attached {
            return None;
        }
        self.elapsed = elapsed;

        let rate = self.config.smoothing_rate;
        self.tilt_x.step(rate, dt);
        self.tilt_y.step(rate, dt);
        self.lift.step(rate, dt);
        self.flip.step(rate, dt);

        if let Some(texture) = self.texture.as_mut() {
            texture.poll();
        }

        Some(self.pose())
    }

    /// Pose from the current animated values
    pub fn pose(&self) -> CardPose {
        CardPose {
            position: self.base_position + Vec3::new(0.0, self.lift.current(), 0.0),
            rotation: Vec3::new(
                self.tilt_x.current(),
                self.tilt_y.current() + self.flip.current(),
                0.0,
            ),
            scale: self.scale,
            holo: self.holo(),
        }
    }

    fn holo(&self) -> HoloOverlay {
        if !self.rarity.has_holo() {
            return HoloOverlay::default();
        }
        match self.holo_drive {
            HoloDrive::Tilt => {
                let intensity = if self.hovered {
                    self.config.holo_intensity
                } else {
                    0.0
                };
                HoloOverlay::from_tilt(self.tilt_y.current(), self.config.max_tilt, intensity)
            }
            HoloDrive::Time => {
                let intensity = if self.revealed {
                    self.config.holo_intensity
                } else {
                    0.0
                };
                HoloOverlay::from_time(self.elapsed, self.config.holo_time_speed, intensity)
            }
        }
    }
}

impl std::fmt::Debug for CardEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardEntity")
            .field("card_id", &self.card_id)
            .field("attached", &self.attached)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn entity(rarity: Rarity, drive: HoloDrive) -> CardEntity {
        let card = Card::new("card-001", "Aurora Tram", rarity);
        let mut entity = CardEntity::new(&card, CardConfig::default(), drive);
        entity.attach();
        entity
    }

    fn run(entity: &mut CardEntity, frames: usize) -> CardPose {
        let mut pose = entity.pose();
        for i in 0..frames {
            pose = entity.update(DT, i as f32 * DT).unwrap();
        }
        pose
    }

    #[test]
    fn test_unattached_update_is_noop() {
        let card = Card::new("x", "X", Rarity::Classique);
        let mut entity = CardEntity::new(&card, CardConfig::default(), HoloDrive::Tilt);
        assert!(entity.update(DT, 0.0).is_none());
        assert!(entity.click().is_none());
    }

    #[test]
    fn test_tilt_leans_toward_pointer() {
        let mut entity = entity(Rarity::Classique, HoloDrive::Tilt);
        let max = CardConfig::default().max_tilt;
        entity.pointer_enter();
        entity.pointer_move(Vec2::new(1.0, 1.0));
        let pose = run(&mut entity, 240);

        assert!((pose.rotation.x + max).abs() < 1e-3);
        assert!((pose.rotation.y - max).abs() < 1e-3);
        assert!((pose.position.y - CardConfig::default().hover_lift).abs() < 1e-3);
    }

    #[test]
    fn test_leave_resets_tilt_and_lift() {
        let mut entity = entity(Rarity::Classique, HoloDrive::Tilt);
        entity.pointer_enter();
        entity.pointer_move(Vec2::new(0.0, 0.5));
        run(&mut entity, 30);
        assert_eq!(entity.pointer_leave(), Cursor::Default);
        let pose = run(&mut entity, 240);

        assert!(pose.rotation.x.abs() < 1e-3);
        assert!(pose.rotation.y.abs() < 1e-3);
        assert!(pose.position.y.abs() < 1e-3);
    }

    #[test]
    fn test_pointer_outside_bounds_is_clamped() {
        let mut entity = entity(Rarity::Classique, HoloDrive::Tilt);
        entity.pointer_move(Vec2::new(7.0, -3.0));
        let pose = run(&mut entity, 400);
        let max = CardConfig::default().max_tilt;
        assert!((pose.rotation.x - max).abs() < 1e-3);
        assert!((pose.rotation.y - max).abs() < 1e-3);
    }

    #[test]
    fn test_flip_animates_rather_than_snaps() {
        let mut entity = entity(Rarity::Classique, HoloDrive::Tilt);
        entity.set_flipped(true);
        let first = entity.update(DT, 0.0).unwrap();
        assert!(first.rotation.y > 0.0 && first.rotation.y < PI);

        let settled = run(&mut entity, 300);
        assert!((settled.rotation.y - PI).abs() < 1e-3);
    }

    #[test]
    fn test_holo_tilt_driven_only_while_hovered() {
        let mut entity = entity(Rarity::Blueprint, HoloDrive::Tilt);
        assert_eq!(run(&mut entity, 1).holo.intensity, 0.0);

        entity.pointer_enter();
        entity.pointer_move(Vec2::new(1.0, 0.5));
        let pose = run(&mut entity, 240);
        assert_eq!(pose.holo.intensity, CardConfig::default().holo_intensity);
        assert!(pose.holo.band > 0.99);
    }

    #[test]
    fn test_holo_time_driven_only_when_revealed() {
        let mut entity = entity(Rarity::Blueprint, HoloDrive::Time);
        entity.pointer_enter();
        assert_eq!(entity.update(DT, 1.0).unwrap().holo.intensity, 0.0);

        entity.set_revealed(true);
        let a = entity.update(DT, 0.0).unwrap().holo;
        let b = entity.update(DT, 1.0).unwrap().holo;
        assert!(a.intensity > 0.0);
        assert!((a.band - 0.5).abs() < 1e-6);
        assert!((b.band - a.band).abs() > 0.1);
    }

    #[test]
    fn test_non_holo_rarity_never_shows_band() {
        let mut entity = entity(Rarity::Legendary, HoloDrive::Tilt);
        entity.pointer_enter();
        assert_eq!(run(&mut entity, 10).holo, HoloOverlay::default());
    }

    #[test]
    fn test_enter_sets_pointer_cursor_and_click_reports_id() {
        let mut entity = entity(Rarity::Classique, HoloDrive::Tilt);
        assert_eq!(entity.pointer_enter(), Cursor::Pointer);
        assert_eq!(entity.click(), Some("card-001"));
    }
}
