//! Viewer configuration
//!
//! Every tuning constant of the interaction layer lives here. A config file
//! (`cardvault.toml`) may override any subset; missing keys keep their
//! defaults.
//!
//! ```toml
//! [booster]
//! tear_threshold_px = 120.0
//!
//! [camera.inspect]
//! min = 2.5
//! ```

use crate::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fs;
use std::path::Path;

/// Root configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub card: CardConfig,
    pub inspect: InspectConfig,
    pub booster: BoosterConfig,
    pub camera: CameraConfig,
    pub gallery: GalleryConfig,
}

impl ViewerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Card visual entity tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardConfig {
    /// Card width in world units
    pub width: f32,
    /// Card height in world units
    pub height: f32,
    /// Largest hover tilt (radians)
    pub max_tilt: f32,
    /// Vertical lift while hovered
    pub hover_lift: f32,
    /// Exponential smoothing rate (per second)
    pub smoothing_rate: f32,
    /// Holo band opacity when visible
    pub holo_intensity: f32,
    /// Holo band oscillation speed when time-driven (radians per second)
    pub holo_time_speed: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: 2.5,
            height: 3.5,
            max_tilt: 0.25,
            hover_lift: 0.15,
            smoothing_rate: 8.0,
            holo_intensity: 0.35,
            holo_time_speed: 1.5,
        }
    }
}

/// Inspect controller tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Radians of rotation per dragged pixel
    pub sensitivity: f32,
    /// Pitch limit in degrees (both directions)
    pub max_pitch_deg: f32,
    /// Exponential smoothing rate for yaw, pitch, and flip
    pub smoothing_rate: f32,
    /// Fraction of velocity applied to the targets each inertial frame
    pub damping: f32,
    /// Velocity multiplier per inertial frame
    pub velocity_decay: f32,
    /// Velocities below this snap to zero
    pub velocity_epsilon: f32,
    /// Seconds without input before idle sway starts
    pub idle_timeout: f32,
    pub sway_yaw_amplitude: f32,
    pub sway_yaw_frequency: f32,
    pub sway_pitch_amplitude: f32,
    pub sway_pitch_frequency: f32,
    pub sway_pitch_phase: f32,
    /// Spot light orbit radius around the card
    pub light_radius: f32,
    pub light_height: f32,
}

impl InspectConfig {
    pub fn max_pitch(&self) -> f32 {
        self.max_pitch_deg.to_radians()
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.01,
            max_pitch_deg: 70.0,
            smoothing_rate: 6.0,
            damping: 0.95,
            velocity_decay: 0.92,
            velocity_epsilon: 1e-4,
            idle_timeout: 3.0,
            sway_yaw_amplitude: 0.35,
            sway_yaw_frequency: 0.5,
            sway_pitch_amplitude: 0.12,
            sway_pitch_frequency: 0.35,
            sway_pitch_phase: 1.3,
            light_radius: 4.0,
            light_height: 3.0,
        }
    }
}

/// Booster sequence tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoosterConfig {
    /// Upward drag distance that tears the pack open
    pub tear_threshold_px: f32,
    /// Flap lift at full drag progress, before the tear
    pub flap_preview_lift: f32,
    /// Extra flap lift over the opening animation
    pub flap_open_lift: f32,
    /// Flap rotation at the end of the opening animation (radians)
    pub flap_open_angle: f32,
    /// How far the pack body drops while opening
    pub body_drop: f32,
    /// Total opening animation time (seconds)
    pub opening_duration: f32,
    /// Delay before the pack starts shrinking (seconds)
    pub scale_delay: f32,
    /// Entrance delay between consecutive cards (milliseconds)
    pub stagger_ms: f32,
    /// Horizontal distance between revealed card slots
    pub slot_spacing: f32,
    /// Exponential smoothing rate for pack and card entrance
    pub smoothing_rate: f32,
}

impl Default for BoosterConfig {
    fn default() -> Self {
        Self {
            tear_threshold_px: 80.0,
            flap_preview_lift: 0.3,
            flap_open_lift: 1.5,
            flap_open_angle: PI * 0.6,
            body_drop: 3.0,
            opening_duration: 1.2,
            scale_delay: 0.5,
            stagger_ms: 150.0,
            slot_spacing: 2.8,
            smoothing_rate: 6.0,
        }
    }
}

/// Zoom window for one view mode
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ZoomWindow {
    /// Depth on entering the mode
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

impl ZoomWindow {
    pub const fn new(default: f32, min: f32, max: f32) -> Self {
        Self { default, min, max }
    }
}

/// Gallery camera behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCameraMode {
    /// Wheel scrolls the gallery vertically
    #[default]
    Pan,
    /// Camera stays put; the wheel is swallowed
    Fixed,
}

/// Camera controller tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub gallery: ZoomWindow,
    pub inspect: ZoomWindow,
    pub booster: ZoomWindow,
    pub gallery_mode: GalleryCameraMode,
    pub smoothing_rate: f32,
    /// Depth change per wheel delta unit
    pub zoom_speed: f32,
    /// Pan change per wheel delta unit
    pub pan_speed: f32,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            gallery: ZoomWindow::new(10.0, 10.0, 10.0),
            inspect: ZoomWindow::new(5.0, 3.0, 8.0),
            booster: ZoomWindow::new(12.0, 8.0, 18.0),
            gallery_mode: GalleryCameraMode::Pan,
            smoothing_rate: 5.0,
            zoom_speed: 0.01,
            pan_speed: 0.01,
            fov_deg: 50.0,
        }
    }
}

/// Gallery grid tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub columns: usize,
    pub spacing_x: f32,
    pub spacing_y: f32,
    /// Height of a rarity separator row
    pub separator_height: f32,
    /// Group cards by rarity, highest tier first
    pub grouping: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            spacing_x: 3.0,
            spacing_y: 4.0,
            separator_height: 1.5,
            grouping: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ViewerConfig::from_toml_str(
            r#"
            [booster]
            tear_threshold_px = 120.0

            [camera]
            gallery_mode = "fixed"

            [camera.inspect]
            default = 4.0
            min = 2.5
            max = 9.0
            "#,
        )
        .unwrap();
        assert_eq!(config.booster.tear_threshold_px, 120.0);
        assert_eq!(config.booster.stagger_ms, 150.0);
        assert_eq!(config.camera.gallery_mode, GalleryCameraMode::Fixed);
        assert_eq!(config.camera.inspect, ZoomWindow::new(4.0, 2.5, 9.0));
        assert_eq!(config.camera.booster, ZoomWindow::new(12.0, 8.0, 18.0));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = ViewerConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let err = ViewerConfig::from_toml_str("[card]\nmax_tilt = \"steep\"").unwrap_err();
        assert!(matches!(err, ViewerError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ViewerConfig::load(Path::new("/nonexistent/cardvault.toml")).unwrap_err();
        assert!(matches!(err, ViewerError::ConfigRead { .. }));
    }
}
