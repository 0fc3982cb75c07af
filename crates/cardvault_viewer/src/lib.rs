//! Cardvault Viewer
//!
//! The animated interaction layer of the card collection viewer:
//!
//! - **Card entity**: hover tilt, hover lift, flip, and holo band per card
//! - **Inspect**: drag-to-rotate with inertia, idle sway, and flip
//! - **Booster**: pack tear gesture, timed opening, staggered reveal
//! - **Camera**: per-mode zoom windows and gallery panning
//! - **Gallery**: rarity-grouped or flat grid layout
//!
//! Every controller keeps its own current/target animation state and writes
//! to the [`ViewStore`](cardvault_core::ViewStore) only through its actions.
//! [`Viewer`] is the root that owns the store and mounts the controllers
//! for the active view mode.
//!
//! # Example
//!
//! ```rust
//! use cardvault_core::{BundledProvider, ViewMode};
//! use cardvault_viewer::{Viewer, ViewerConfig};
//!
//! let catalog = BundledProvider::new().unwrap();
//! let mut viewer = Viewer::new(ViewerConfig::default()).with_seed(1);
//! viewer.store_mut().set_cards(catalog.cards().to_vec());
//!
//! assert!(viewer.pull_booster());
//! let frame = viewer.frame(1.0 / 60.0);
//! assert_eq!(frame.mode, ViewMode::Booster);
//! assert!(frame.pack.is_some());
//! ```

pub mod booster;
pub mod camera;
pub mod card;
pub mod config;
pub mod error;
pub mod gallery;
pub mod inspect;
pub mod viewer;

pub use booster::{BoosterController, PackPose};
pub use camera::{CameraController, CameraPose, ContentExtent};
pub use card::{CardEntity, CardPose, HoloDrive, HoloOverlay};
pub use config::{
    BoosterConfig, CameraConfig, CardConfig, GalleryCameraMode, GalleryConfig, InspectConfig,
    ViewerConfig, ZoomWindow,
};
pub use error::{Result, ViewerError};
pub use gallery::{GalleryArrangement, GalleryLayout, GallerySlot, Separator};
pub use inspect::{InspectController, InspectPose};
pub use viewer::{Frame, Viewer, CARD_BACK_IMAGE, PACK_IMAGE};
