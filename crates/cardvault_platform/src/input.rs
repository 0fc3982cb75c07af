//! Input event types for pointer and wheel

use crate::cursor::Cursor;
use cardvault_core::Vec2;

/// What the host's hit test found under the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HitTarget {
    /// Nothing under the pointer
    #[default]
    None,
    /// The transparent full-frame capture surface behind the scene
    Background,
    /// A card mesh
    Card {
        /// Slot index of the card in the mounted scene
        slot: usize,
        /// Hit position in card UV space, (0,0) bottom-left to (1,1) top-right
        uv: Vec2,
    },
    /// Upper tear strip of the booster pack
    PackTop,
    /// Any other part of the booster pack
    Pack,
}

/// Pointer event phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer entered the hit target
    Enter,
    /// Pointer left the hit target
    Leave,
    /// Press and release on the same target
    Click,
    /// Double click or double tap
    DoubleClick,
}

/// A pointer event in surface coordinates (pixels, y grows downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
    pub target: HitTarget,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Vec2, target: HitTarget) -> Self {
        Self {
            kind,
            position,
            target,
        }
    }
}

/// Input events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse, pen, or touch pointer
    Pointer(PointerEvent),
    /// Scroll wheel or trackpad scroll
    Wheel {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta, positive = scroll down
        delta_y: f32,
    },
}

/// Whether the host should run its native scroll behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDisposition {
    /// Let the host handle the event
    #[default]
    Passthrough,
    /// The viewer handled it; suppress native scrolling
    Consumed,
}

/// What the host must apply after dispatching an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// New cursor hint, `None` keeps the current cursor
    pub cursor: Option<Cursor>,
    pub scroll: ScrollDisposition,
}

impl InputResponse {
    /// Nothing to apply
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_cursor(cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
            scroll: ScrollDisposition::Passthrough,
        }
    }

    pub fn consumed() -> Self {
        Self {
            cursor: None,
            scroll: ScrollDisposition::Consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response_passes_through() {
        let response = InputResponse::default();
        assert_eq!(response.cursor, None);
        assert_eq!(response.scroll, ScrollDisposition::Passthrough);
        assert_eq!(InputResponse::consumed().scroll, ScrollDisposition::Consumed);
    }
}
