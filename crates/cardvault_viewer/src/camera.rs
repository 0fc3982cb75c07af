//! Camera/viewport controller
//!
//! Each view mode has a zoom window `[min, max]` over camera depth. The
//! gallery additionally pans vertically over its content. Wheel input only
//! moves targets; targets are clamped on every wheel event and again on
//! every frame, then the camera eases toward them.

use crate::config::{CameraConfig, GalleryCameraMode, ZoomWindow};
use cardvault_animation::{clamp, Smoothed};
use cardvault_core::{Vec3, ViewMode};
use cardvault_platform::ScrollDisposition;

/// Vertical extent of the gallery content in world units
///
/// Content runs downward from `top` for `height` units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentExtent {
    pub top: f32,
    pub height: f32,
}

/// Camera placement for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
}

/// Zoom and pan controller shared by every view mode
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    mode: ViewMode,
    window: ZoomWindow,
    depth: Smoothed<f32>,
    pan: Smoothed<f32>,
    pan_min: f32,
    pan_max: f32,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        let window = config.gallery;
        Self {
            config,
            mode: ViewMode::Gallery,
            window,
            depth: Smoothed::new(window.default),
            pan: Smoothed::default(),
            pan_min: 0.0,
            pan_max: 0.0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn zoom_window(&self) -> ZoomWindow {
        self.window
    }

    pub fn depth_target(&self) -> f32 {
        self.depth.target()
    }

    pub fn pan_target(&self) -> f32 {
        self.pan.target()
    }

    /// Scrollable pan range `(min, max)` for the gallery
    pub fn pan_range(&self) -> (f32, f32) {
        (self.pan_min, self.pan_max)
    }

    fn window_for(&self, mode: ViewMode) -> ZoomWindow {
        match mode {
            ViewMode::Gallery => self.config.gallery,
            ViewMode::Inspect => self.config.inspect,
            ViewMode::Booster => self.config.booster,
        }
    }

    /// Half the height visible at the plane `depth` units away
    fn half_visible(&self, depth: f32) -> f32 {
        depth * (self.config.fov_deg.to_radians() / 2.0).tan()
    }

    /// Enter `mode`; depth target resets to the mode default and, in the
    /// gallery, the pan target jumps to the top of `extent`
    pub fn set_view_mode(&mut self, mode: ViewMode, extent: ContentExtent) {
        self.mode = mode;
        self.window = self.window_for(mode);
        self.depth.set_target(self.window.default);

        if mode == ViewMode::Gallery {
            let half = self.half_visible(self.window.default);
            self.pan_max = extent.top - half;
            self.pan_min = (extent.top - extent.height + half).min(self.pan_max);
            self.pan.set_target(self.pan_max);
        } else {
            self.pan_min = 0.0;
            self.pan_max = 0.0;
            self.pan.set_target(0.0);
        }
        tracing::debug!(
            ?mode,
            depth = self.window.default,
            pan_min = self.pan_min,
            pan_max = self.pan_max,
            "camera reset"
        );
    }

    /// Wheel input; always consumed so the host suppresses native scrolling
    pub fn on_wheel(&mut self, delta_y: f32) -> ScrollDisposition {
        match self.mode {
            ViewMode::Gallery => {
                if self.config.gallery_mode == GalleryCameraMode::Pan {
                    let target = self.pan.target() - delta_y * self.config.pan_speed;
                    self.pan
                        .set_target(clamp(target, self.pan_min, self.pan_max));
                }
            }
            ViewMode::Inspect | ViewMode::Booster => {
                let target = self.depth.target() + delta_y * self.config.zoom_speed;
                self.depth
                    .set_target(clamp(target, self.window.min, self.window.max));
            }
        }
        tracing::trace!(
            delta_y,
            depth = self.depth.target(),
            pan = self.pan.target(),
            "wheel"
        );
        ScrollDisposition::Consumed
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) -> CameraPose {
        self.depth
            .set_target(clamp(self.depth.target(), self.window.min, self.window.max));
        self.pan
            .set_target(clamp(self.pan.target(), self.pan_min, self.pan_max));

        let rate = self.config.smoothing_rate;
        let depth = self.depth.step(rate, dt);
        let pan = self.pan.step(rate, dt);

        CameraPose {
            position: Vec3::new(0.0, pan, depth),
            look_at: Vec3::new(0.0, pan, 0.0),
            fov_deg: self.config.fov_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn tall() -> ContentExtent {
        ContentExtent {
            top: 0.0,
            height: 40.0,
        }
    }

    fn camera(mode: ViewMode) -> CameraController {
        let mut camera = CameraController::new(CameraConfig::default());
        camera.set_view_mode(mode, tall());
        camera
    }

    #[test]
    fn test_zoom_stays_in_window_under_wheel_spam() {
        for (mode, min, max) in [
            (ViewMode::Inspect, 3.0, 8.0),
            (ViewMode::Booster, 8.0, 18.0),
        ] {
            let mut c = camera(mode);
            for _ in 0..1000 {
                assert_eq!(c.on_wheel(120.0), ScrollDisposition::Consumed);
                assert!(c.depth_target() <= max);
            }
            assert_eq!(c.depth_target(), max);
            for _ in 0..1000 {
                c.on_wheel(-120.0);
                assert!(c.depth_target() >= min);
            }
            assert_eq!(c.depth_target(), min);
        }
    }

    #[test]
    fn test_gallery_depth_is_fixed() {
        let mut c = camera(ViewMode::Gallery);
        for _ in 0..1000 {
            c.on_wheel(-120.0);
        }
        assert_eq!(c.depth_target(), 10.0);
        let pose = c.update(DT);
        assert_eq!(pose.position.z, 10.0);
    }

    #[test]
    fn test_gallery_starts_at_top_and_pans_within_content() {
        let mut c = camera(ViewMode::Gallery);
        let (min, max) = c.pan_range();
        assert!(min < max);
        assert_eq!(c.pan_target(), max);

        // Wheel up at the top stays put
        c.on_wheel(-500.0);
        assert_eq!(c.pan_target(), max);

        for _ in 0..1000 {
            c.on_wheel(120.0);
            assert!(c.pan_target() >= min);
        }
        assert_eq!(c.pan_target(), min);
    }

    #[test]
    fn test_short_content_has_no_scroll() {
        let mut c = CameraController::new(CameraConfig::default());
        c.set_view_mode(
            ViewMode::Gallery,
            ContentExtent {
                top: 0.0,
                height: 2.0,
            },
        );
        let (min, max) = c.pan_range();
        assert_eq!(min, max);
        c.on_wheel(300.0);
        assert_eq!(c.pan_target(), max);
    }

    #[test]
    fn test_fixed_gallery_swallows_wheel() {
        let config = CameraConfig {
            gallery_mode: GalleryCameraMode::Fixed,
            ..CameraConfig::default()
        };
        let mut c = CameraController::new(config);
        c.set_view_mode(ViewMode::Gallery, tall());
        let before = c.pan_target();
        assert_eq!(c.on_wheel(240.0), ScrollDisposition::Consumed);
        assert_eq!(c.pan_target(), before);
    }

    #[test]
    fn test_mode_switch_resets_depth() {
        let mut c = camera(ViewMode::Inspect);
        for _ in 0..100 {
            c.on_wheel(120.0);
        }
        c.set_view_mode(ViewMode::Booster, tall());
        assert_eq!(c.depth_target(), 12.0);
        assert_eq!(c.pan_target(), 0.0);
        c.set_view_mode(ViewMode::Inspect, tall());
        assert_eq!(c.depth_target(), 5.0);
    }

    #[test]
    fn test_camera_eases_toward_target() {
        let mut c = camera(ViewMode::Gallery);
        c.set_view_mode(ViewMode::Booster, tall());
        let first = c.update(DT);
        assert!(first.position.z > 10.0 && first.position.z < 12.0);
        let mut pose = first;
        for _ in 0..600 {
            pose = c.update(DT);
        }
        assert!((pose.position.z - 12.0).abs() < 1e-3);
        assert_eq!(pose.look_at.y, pose.position.y);
    }
}
